//! # Mesh Export
//!
//! Writers turning a [`sphere_mesh::Mesh`] into fixture files:
//!
//! - **STL** - Binary triangle soup with computed face normals
//! - **OBJ** - ASCII, shared vertices, 1-based face indices
//! - **VTP** - VTK PolyData XML with ascii data arrays
//!
//! Every writer comes in two flavors: `write_*` creates a file, and
//! `encode_*` writes into any [`std::io::Write`]. The encoders are
//! independent of each other and only read the mesh.
//!
//! # Example
//!
//! ```no_run
//! use mesh_export::{write_mesh, MeshFormat};
//! use sphere_mesh::generate_sphere_mesh;
//!
//! let mesh = generate_sphere_mesh(10_000).unwrap();
//! for format in MeshFormat::ALL {
//!     write_mesh(&mesh, format!("sphere.{}", format.extension()), format).unwrap();
//! }
//! ```

pub mod error;
pub mod obj;
pub mod stl;
pub mod vtp;

pub use error::{ExportError, ExportResult};
pub use obj::{encode_obj, write_obj};
pub use stl::{encode_stl, write_stl};
pub use vtp::{encode_vtp, write_vtp};

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use sphere_mesh::Mesh;

/// Supported fixture file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshFormat {
    /// Binary STL.
    Stl,
    /// Wavefront OBJ.
    Obj,
    /// VTK PolyData XML.
    Vtp,
}

impl MeshFormat {
    /// Every format, in the order a full run writes them.
    pub const ALL: [MeshFormat; 3] = [MeshFormat::Stl, MeshFormat::Obj, MeshFormat::Vtp];

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Stl => "stl",
            Self::Obj => "obj",
            Self::Vtp => "vtp",
        }
    }

    /// Detect format from a file extension (case-insensitive).
    ///
    /// # Example
    ///
    /// ```rust
    /// use mesh_export::MeshFormat;
    ///
    /// assert_eq!(MeshFormat::from_extension("STL"), Some(MeshFormat::Stl));
    /// assert_eq!(MeshFormat::from_extension("ply"), None);
    /// ```
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "stl" => Some(Self::Stl),
            "obj" => Some(Self::Obj),
            "vtp" => Some(Self::Vtp),
            _ => None,
        }
    }

    /// Detect format from the extension of a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        Self::from_extension(ext)
    }
}

impl fmt::Display for MeshFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for MeshFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('.');
        Self::from_extension(trimmed).ok_or_else(|| ExportError::unknown_format(trimmed))
    }
}

/// Save a mesh in the given format.
///
/// # Errors
///
/// Returns the error of the selected writer; I/O failures carry `path`.
pub fn write_mesh<P: AsRef<Path>>(mesh: &Mesh, path: P, format: MeshFormat) -> ExportResult<()> {
    match format {
        MeshFormat::Stl => write_stl(mesh, path),
        MeshFormat::Obj => write_obj(mesh, path),
        MeshFormat::Vtp => write_vtp(mesh, path),
    }
}

/// Encode a mesh in the given format into any writer.
pub fn encode_mesh<W: Write>(mesh: &Mesh, writer: W, format: MeshFormat) -> ExportResult<()> {
    match format {
        MeshFormat::Stl => encode_stl(mesh, writer),
        MeshFormat::Obj => encode_obj(mesh, writer),
        MeshFormat::Vtp => encode_vtp(mesh, writer),
    }
}

/// Create `path`, run `encode` against a buffered writer and flush it.
///
/// The file handle is dropped on every path out of this function; stream
/// errors are tagged with `path`.
pub(crate) fn write_file<F>(path: &Path, encode: F) -> ExportResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> ExportResult<()>,
{
    let result = File::create(path)
        .map_err(ExportError::from)
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            encode(&mut writer)?;
            writer.flush()?;
            Ok(())
        });
    result.map_err(|e| e.at_path(path))
}

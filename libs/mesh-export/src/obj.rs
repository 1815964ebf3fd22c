//! Wavefront OBJ writer.
//!
//! ```text
//! # comment
//! v x y z
//! f i j k
//! ```
//!
//! Face indices are 1-based in OBJ; the mesh stores them 0-based, so every
//! index is shifted by one on the way out.

use std::io::Write;
use std::path::Path;

use config::constants::{COORDINATE_PRECISION, GENERATOR_NAME};
use sphere_mesh::Mesh;

use crate::error::ExportResult;
use crate::write_file;

/// Save a mesh to an OBJ file.
///
/// # Errors
///
/// Returns [`crate::ExportError::Io`] carrying `path` if the file cannot be
/// written.
///
/// # Example
///
/// ```no_run
/// use mesh_export::write_obj;
/// use sphere_mesh::generate_sphere_mesh;
///
/// let mesh = generate_sphere_mesh(10_000).unwrap();
/// write_obj(&mesh, "sphere.obj").unwrap();
/// ```
pub fn write_obj<P: AsRef<Path>>(mesh: &Mesh, path: P) -> ExportResult<()> {
    write_file(path.as_ref(), |writer| encode_obj(mesh, writer))
}

/// Encode a mesh as OBJ text into any writer.
pub fn encode_obj<W: Write>(mesh: &Mesh, mut writer: W) -> ExportResult<()> {
    writeln!(
        writer,
        "# Generated sphere mesh with {} vertices and {} faces",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;
    writeln!(writer, "# Created by {GENERATOR_NAME}")?;
    writeln!(writer)?;

    for v in mesh.vertices() {
        writeln!(
            writer,
            "v {:.prec$} {:.prec$} {:.prec$}",
            v.x,
            v.y,
            v.z,
            prec = COORDINATE_PRECISION
        )?;
    }

    writeln!(writer)?;

    for &[a, b, c] in mesh.triangles() {
        writeln!(
            writer,
            "f {} {} {}",
            u64::from(a) + 1,
            u64::from(b) + 1,
            u64::from(c) + 1
        )?;
    }

    Ok(())
}

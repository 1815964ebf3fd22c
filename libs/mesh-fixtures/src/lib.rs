//! # Mesh Fixtures
//!
//! Generates sphere meshes at several sizes and writes each one in the
//! requested formats, for benchmarking mesh loaders and renderers.
//!
//! ## Architecture
//!
//! ```text
//! GeneratorConfig → generate_all
//!                     └─ per size: generate_sphere_mesh → write_mesh (per format)
//! ```
//!
//! Sizes run one after another. The formats of one size share the same
//! immutable mesh and are written on the rayon pool.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use config::constants::GeneratorConfig;
//! use mesh_export::MeshFormat;
//! use mesh_fixtures::generate_all;
//!
//! let config = GeneratorConfig::new("test_meshes", vec![10_000])?;
//! let reports = generate_all(&config, &MeshFormat::ALL)?;
//! assert_eq!(reports[0].files.len(), 3);
//! # Ok::<(), mesh_fixtures::FixtureError>(())
//! ```

pub mod error;
pub mod naming;

pub use error::FixtureError;

use std::fs;
use std::path::{Path, PathBuf};

use config::constants::GeneratorConfig;
use log::info;
use mesh_export::{write_mesh, MeshFormat};
use rayon::prelude::*;
use sphere_mesh::{generate_sphere_mesh, Mesh};

use naming::{fixture_file_name, format_size, group_thousands};

/// One artifact written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureFile {
    /// Format of the artifact.
    pub format: MeshFormat,
    /// Full path of the artifact.
    pub path: PathBuf,
    /// Size on disk in bytes.
    pub size_bytes: u64,
}

/// Outcome of generating one target size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureReport {
    /// Requested vertex count.
    pub target: usize,
    /// Generated vertex count.
    pub vertex_count: usize,
    /// Generated triangle count.
    pub triangle_count: usize,
    /// Written artifacts, in request order.
    pub files: Vec<FixtureFile>,
}

/// Creates the output directory and its parents if they do not exist.
pub fn ensure_output_dir<P: AsRef<Path>>(path: P) -> Result<PathBuf, FixtureError> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|source| FixtureError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

/// Generates one sphere and writes it in every requested format.
///
/// Repeated formats are written once. The output directory must exist.
///
/// # Errors
///
/// Fails on an invalid target or on the first artifact that cannot be
/// written; artifacts already written are left in place.
pub fn generate_fixture(
    target: usize,
    output_dir: &Path,
    formats: &[MeshFormat],
) -> Result<FixtureReport, FixtureError> {
    info!("Generating mesh with ~{} nodes...", group_thousands(target));

    let mesh = generate_sphere_mesh(target)?;
    info!(
        "  Generated: {} vertices, {} faces",
        group_thousands(mesh.vertex_count()),
        group_thousands(mesh.triangle_count())
    );

    let mut unique: Vec<MeshFormat> = Vec::with_capacity(formats.len());
    for &format in formats {
        if !unique.contains(&format) {
            unique.push(format);
        }
    }

    let files = unique
        .par_iter()
        .map(|&format| write_fixture_file(&mesh, output_dir, format))
        .collect::<Result<Vec<_>, FixtureError>>()?;

    for file in &files {
        let name = file
            .path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        info!("  Created: {} ({})", name, format_size(file.size_bytes));
    }

    Ok(FixtureReport {
        target,
        vertex_count: mesh.vertex_count(),
        triangle_count: mesh.triangle_count(),
        files,
    })
}

/// Runs every target size of `config`, in order.
///
/// The output directory is created first. The first failure aborts the
/// run.
pub fn generate_all(
    config: &GeneratorConfig,
    formats: &[MeshFormat],
) -> Result<Vec<FixtureReport>, FixtureError> {
    let output_dir = ensure_output_dir(&config.output_dir)?;
    info!("Output directory: {}", output_dir.display());

    config
        .target_sizes
        .iter()
        .map(|&target| generate_fixture(target, &output_dir, formats))
        .collect()
}

/// Writes one format and reads back its size.
fn write_fixture_file(
    mesh: &Mesh,
    output_dir: &Path,
    format: MeshFormat,
) -> Result<FixtureFile, FixtureError> {
    let path = output_dir.join(fixture_file_name(mesh.vertex_count(), format));
    write_mesh(mesh, &path, format)?;

    let size_bytes = fs::metadata(&path)
        .map_err(|source| FixtureError::Metadata {
            path: path.clone(),
            source,
        })?
        .len();

    Ok(FixtureFile {
        format,
        path,
        size_bytes,
    })
}

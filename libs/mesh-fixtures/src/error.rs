//! # Fixture Errors
//!
//! Errors surfaced by a generation run. Failures from the lower layers are
//! kept as the source; filesystem failures owned by this crate carry the
//! offending path. Messages never repeat their source, so a chained report
//! names each cause once.

use std::path::PathBuf;

use config::constants::ConfigError;
use mesh_export::ExportError;
use sphere_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur while generating fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Invalid run configuration
    #[error("invalid configuration")]
    Config(#[from] ConfigError),

    /// Mesh generation failed
    #[error("mesh generation failed")]
    Mesh(#[from] MeshError),

    /// Writing an artifact failed
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Output directory could not be created
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Written file could not be inspected
    #[error("failed to read metadata of {}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

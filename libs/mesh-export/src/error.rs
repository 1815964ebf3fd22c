//! # Export Errors
//!
//! Error types for mesh serialization.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while writing a mesh artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing to a file failed.
    #[error("failed to write {}", path.display())]
    Io {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing to a caller-supplied stream failed.
    #[error("write error")]
    Stream(#[from] std::io::Error),

    /// Unknown file format (unrecognized extension).
    #[error("unknown mesh format: {extension}")]
    UnknownFormat {
        /// The unrecognized extension.
        extension: String,
    },

    /// Binary STL stores the triangle count as a `u32`.
    #[error("too many triangles for binary STL: {count}")]
    TooManyTriangles {
        /// Triangle count of the rejected mesh.
        count: usize,
    },
}

impl ExportError {
    /// Create an `UnknownFormat` error for the given extension.
    pub fn unknown_format(extension: impl Into<String>) -> Self {
        Self::UnknownFormat {
            extension: extension.into(),
        }
    }

    /// Attaches the file path to a stream error.
    pub(crate) fn at_path(self, path: &Path) -> Self {
        match self {
            Self::Stream(source) => Self::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }

    /// Returns the file path this error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => Some(path),
            _ => None,
        }
    }
}

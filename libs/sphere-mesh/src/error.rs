//! # Mesh Errors
//!
//! Error types for mesh generation operations.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// Target vertex count produces an empty grid
    #[error("Invalid target vertex count: {target} (must be >= 1)")]
    InvalidTarget { target: usize },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Face refers to a vertex that does not exist
    #[error("Triangle {triangle} references vertex {index} (vertex count: {vertex_count})")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },
}

impl MeshError {
    /// Creates an invalid target error.
    pub fn invalid_target(target: usize) -> Self {
        Self::InvalidTarget { target }
    }
}

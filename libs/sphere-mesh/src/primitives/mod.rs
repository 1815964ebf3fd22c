//! # Primitives
//!
//! Mesh generation for fixture primitives.

pub mod sphere;

pub use sphere::{generate_sphere_mesh, SphereGrid};

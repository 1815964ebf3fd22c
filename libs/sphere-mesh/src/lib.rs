//! # Sphere Mesh
//!
//! Deterministic sphere meshes sized by a target vertex count, used as
//! synthetic fixtures for mesh loaders and renderers.
//!
//! ## Architecture
//!
//! ```text
//! target vertex count → SphereGrid → generate_sphere_mesh → Mesh
//! ```
//!
//! ## Guarantees
//!
//! - Same target, same mesh: no randomness, no clock
//! - Vertex count is `(d + 1) * 2d` with `d = floor(sqrt(target))`
//! - Every face index addresses an existing vertex
//!
//! ## Usage
//!
//! ```rust
//! use sphere_mesh::generate_sphere_mesh;
//!
//! let mesh = generate_sphere_mesh(4)?;
//! assert_eq!(mesh.vertex_count(), 12);
//! assert_eq!(mesh.triangle_count(), 8);
//! # Ok::<(), sphere_mesh::MeshError>(())
//! ```

pub mod error;
pub mod mesh;
pub mod primitives;

pub use error::MeshError;
pub use mesh::{triangle_normal, Mesh};
pub use primitives::{generate_sphere_mesh, SphereGrid};

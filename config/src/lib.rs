//! # Config Crate
//!
//! Centralized configuration constants for the mesh fixture generator.
//! File layout constants, naming defaults and the default size ladder are
//! defined here so the generator, the encoders and the CLI agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GeneratorConfig, STL_HEADER_SIZE, STL_TRIANGLE_RECORD_SIZE};
//!
//! // Expected size of a binary STL with 8 triangles
//! let bytes = STL_HEADER_SIZE + 4 + 8 * STL_TRIANGLE_RECORD_SIZE;
//! assert_eq!(bytes, 484);
//!
//! // Default run configuration
//! let config = GeneratorConfig::default();
//! assert!(!config.target_sizes.is_empty());
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Deterministic**: Nothing here depends on time, environment or randomness
//! - **Format Exact**: Byte layout constants match the file formats exactly

pub mod constants;

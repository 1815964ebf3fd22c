//! # Configuration Constants
//!
//! Centralized constants for the fixture pipeline. Binary layout sizes,
//! text precision, naming defaults and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Binary STL Layout**: Header and record sizes
//! - **Text Formats**: Coordinate precision and provenance
//! - **Geometry**: Fallback normal
//! - **Limits**: Maximum values for safety bounds
//! - **Run Defaults**: Output directory and target size ladder

use std::fmt;
use std::path::PathBuf;

// =============================================================================
// BINARY STL LAYOUT CONSTANTS
// =============================================================================

/// Size of the free-form header at the start of a binary STL file.
///
/// The header text is null-padded or truncated to exactly this length.
///
/// # Example
///
/// ```rust
/// use config::constants::STL_HEADER_SIZE;
///
/// let header = [0u8; STL_HEADER_SIZE];
/// assert_eq!(header.len(), 80);
/// ```
pub const STL_HEADER_SIZE: usize = 80;

/// Size of one triangle record in binary STL.
///
/// 12 bytes normal + 36 bytes vertices + 2 bytes attribute count.
///
/// # Example
///
/// ```rust
/// use config::constants::STL_TRIANGLE_RECORD_SIZE;
///
/// assert_eq!(STL_TRIANGLE_RECORD_SIZE, 12 + 36 + 2);
/// ```
pub const STL_TRIANGLE_RECORD_SIZE: usize = 50;

// =============================================================================
// TEXT FORMAT CONSTANTS
// =============================================================================

/// Number of decimals written for every coordinate in the ASCII formats.
///
/// # Example
///
/// ```rust
/// use config::constants::COORDINATE_PRECISION;
///
/// let text = format!("{:.*}", COORDINATE_PRECISION, 0.5f32);
/// assert_eq!(text, "0.500000");
/// ```
pub const COORDINATE_PRECISION: usize = 6;

/// Tool name recorded in the provenance comment of text artifacts.
pub const GENERATOR_NAME: &str = "mesh-fixtures";

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Normal written for triangles whose cross product has zero length.
///
/// # Example
///
/// ```rust
/// use config::constants::FALLBACK_NORMAL;
///
/// assert_eq!(FALLBACK_NORMAL, [0.0, 0.0, 1.0]);
/// ```
pub const FALLBACK_NORMAL: [f32; 3] = [0.0, 0.0, 1.0];

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Faces store `u32` indices, so no mesh may hold more vertices than that
/// type can address.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 2_002_000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = u32::MAX as usize;

// =============================================================================
// RUN DEFAULTS
// =============================================================================

/// Directory fixtures are written to when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "test_meshes";

/// Target vertex counts generated by a default run (10K to 1M).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_TARGET_SIZES;
///
/// assert_eq!(DEFAULT_TARGET_SIZES.first(), Some(&10_000));
/// assert_eq!(DEFAULT_TARGET_SIZES.last(), Some(&1_000_000));
/// ```
pub const DEFAULT_TARGET_SIZES: [usize; 5] = [10_000, 100_000, 250_000, 500_000, 1_000_000];

/// Validated description of one generator run.
///
/// # Examples
/// ```
/// use config::constants::GeneratorConfig;
/// let config = GeneratorConfig::default();
/// assert_eq!(config.output_dir.to_str(), Some("test_meshes"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory every artifact of the run is written to.
    pub output_dir: PathBuf,
    /// Requested vertex counts, processed in order.
    pub target_sizes: Vec<usize>,
}

impl GeneratorConfig {
    /// Builds a configuration enforcing a non-empty output directory and a
    /// non-empty list of positive target sizes.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, GeneratorConfig};
    /// let cfg = GeneratorConfig::new("out", vec![4, 100]).expect("valid config");
    /// assert_eq!(cfg.target_sizes, vec![4, 100]);
    /// assert_eq!(
    ///     GeneratorConfig::new("out", vec![10, 0]).unwrap_err(),
    ///     ConfigError::InvalidTargetSize(0)
    /// );
    /// ```
    pub fn new(
        output_dir: impl Into<PathBuf>,
        target_sizes: Vec<usize>,
    ) -> Result<Self, ConfigError> {
        let output_dir = output_dir.into();
        if output_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputDir);
        }
        if target_sizes.is_empty() {
            return Err(ConfigError::EmptySizes);
        }
        if let Some(&size) = target_sizes.iter().find(|&&size| size == 0) {
            return Err(ConfigError::InvalidTargetSize(size));
        }
        Ok(Self {
            output_dir,
            target_sizes,
        })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            target_sizes: DEFAULT_TARGET_SIZES.to_vec(),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the output directory path is empty.
    EmptyOutputDir,
    /// Raised when no target sizes were requested.
    EmptySizes,
    /// Raised when a target size cannot produce a grid.
    InvalidTargetSize(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyOutputDir => write!(f, "output directory must not be empty"),
            ConfigError::EmptySizes => write!(f, "at least one target size is required"),
            ConfigError::InvalidTargetSize(value) => {
                write!(f, "target size must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

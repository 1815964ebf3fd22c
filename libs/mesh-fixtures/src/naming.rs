//! # Naming
//!
//! File naming policy and human-readable sizes.

use mesh_export::MeshFormat;

/// Short vertex count used in file names.
///
/// Counts of a million or more use `m`, counts of a thousand or more use
/// `k`; both round down. The count is the generated one, not the request.
///
/// # Example
///
/// ```rust
/// use mesh_fixtures::naming::size_suffix;
///
/// assert_eq!(size_suffix(20_200), "20k");
/// assert_eq!(size_suffix(2_002_000), "2m");
/// assert_eq!(size_suffix(12), "12");
/// ```
pub fn size_suffix(vertex_count: usize) -> String {
    if vertex_count >= 1_000_000 {
        format!("{}m", vertex_count / 1_000_000)
    } else if vertex_count >= 1_000 {
        format!("{}k", vertex_count / 1_000)
    } else {
        vertex_count.to_string()
    }
}

/// File name for a fixture: `mesh_{suffix}_nodes.{ext}`.
///
/// # Example
///
/// ```rust
/// use mesh_export::MeshFormat;
/// use mesh_fixtures::naming::fixture_file_name;
///
/// assert_eq!(fixture_file_name(20_200, MeshFormat::Obj), "mesh_20k_nodes.obj");
/// ```
pub fn fixture_file_name(vertex_count: usize, format: MeshFormat) -> String {
    format!(
        "mesh_{}_nodes.{}",
        size_suffix(vertex_count),
        format.extension()
    )
}

/// Renders a count with `,` between groups of three digits.
///
/// # Example
///
/// ```rust
/// use mesh_fixtures::naming::group_thousands;
///
/// assert_eq!(group_thousands(39_600), "39,600");
/// ```
pub fn group_thousands(count: usize) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Formats a byte count with two decimals, stepping units by 1024.
///
/// # Example
///
/// ```rust
/// use mesh_fixtures::naming::format_size;
///
/// assert_eq!(format_size(1536), "1.50 KB");
/// ```
pub fn format_size(size_bytes: u64) -> String {
    let mut size = size_bytes as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if size < 1024.0 {
            return format!("{size:.2} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.2} TB")
}

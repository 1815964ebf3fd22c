//! Binary STL (Stereolithography) writer.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (descriptive text, null padded)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (always 0)
//! end
//! ```
//!
//! All numbers are little-endian. Vertices are written in the face's
//! winding order, so the normal and the vertex order always agree.

use std::io::Write;
use std::path::Path;

use config::constants::{STL_HEADER_SIZE, STL_TRIANGLE_RECORD_SIZE};
use glam::Vec3;
use sphere_mesh::Mesh;

use crate::error::{ExportError, ExportResult};
use crate::write_file;

/// Save a mesh to a binary STL file.
///
/// The file is created (or truncated), written through a buffer and flushed
/// before returning. A failure part way through leaves a truncated file.
///
/// # Errors
///
/// Returns [`ExportError::Io`] carrying `path` if the file cannot be written,
/// or [`ExportError::TooManyTriangles`] if the face count overflows `u32`.
///
/// # Example
///
/// ```no_run
/// use mesh_export::write_stl;
/// use sphere_mesh::generate_sphere_mesh;
///
/// let mesh = generate_sphere_mesh(10_000).unwrap();
/// write_stl(&mesh, "sphere.stl").unwrap();
/// ```
pub fn write_stl<P: AsRef<Path>>(mesh: &Mesh, path: P) -> ExportResult<()> {
    write_file(path.as_ref(), |writer| encode_stl(mesh, writer))
}

/// Encode a mesh as binary STL into any writer.
///
/// The header reads `Generated sphere mesh with {vertex_count} nodes`.
pub fn encode_stl<W: Write>(mesh: &Mesh, mut writer: W) -> ExportResult<()> {
    let face_count = u32::try_from(mesh.triangle_count()).map_err(|_| {
        ExportError::TooManyTriangles {
            count: mesh.triangle_count(),
        }
    })?;

    let text = format!("Generated sphere mesh with {} nodes", mesh.vertex_count());
    writer.write_all(&header_bytes(&text))?;
    writer.write_all(&face_count.to_le_bytes())?;

    let mut record = [0u8; STL_TRIANGLE_RECORD_SIZE];
    for index in 0..mesh.triangle_count() {
        let [v1, v2, v3] = mesh.triangle_vertices(index);
        let normal = mesh.face_normal(index);

        put_vec3(&mut record[0..12], normal);
        put_vec3(&mut record[12..24], v1);
        put_vec3(&mut record[24..36], v2);
        put_vec3(&mut record[36..48], v3);
        // Attribute byte count stays zero
        record[48..50].copy_from_slice(&0u16.to_le_bytes());

        writer.write_all(&record)?;
    }

    Ok(())
}

/// Build the fixed-size header from descriptive text.
///
/// Text longer than the header is truncated; shorter text is padded with
/// null bytes.
///
/// # Example
///
/// ```rust
/// use mesh_export::stl::header_bytes;
///
/// let header = header_bytes("hello");
/// assert_eq!(&header[..5], b"hello");
/// assert!(header[5..].iter().all(|&b| b == 0));
/// ```
pub fn header_bytes(text: &str) -> [u8; STL_HEADER_SIZE] {
    let mut header = [0u8; STL_HEADER_SIZE];
    let bytes = text.as_bytes();
    let len = bytes.len().min(STL_HEADER_SIZE);
    header[..len].copy_from_slice(&bytes[..len]);
    header
}

/// Expected size in bytes of a binary STL holding `triangle_count` faces.
pub fn stl_file_size(triangle_count: usize) -> usize {
    STL_HEADER_SIZE + 4 + triangle_count * STL_TRIANGLE_RECORD_SIZE
}

/// Write a vector as 3 little-endian f32s into a 12-byte slice.
fn put_vec3(buf: &mut [u8], v: Vec3) {
    buf[0..4].copy_from_slice(&v.x.to_le_bytes());
    buf[4..8].copy_from_slice(&v.y.to_le_bytes());
    buf[8..12].copy_from_slice(&v.z.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use sphere_mesh::generate_sphere_mesh;

    fn read_f32(bytes: &[u8], offset: usize) -> f32 {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&bytes[offset..offset + 4]);
        f32::from_le_bytes(raw)
    }

    fn create_test_triangle() -> Mesh {
        Mesh::from_parts(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![[0, 1, 2]]).unwrap()
    }

    #[test]
    fn test_header_padding() {
        let header = header_bytes("Generated sphere mesh with 12 nodes");
        assert_eq!(&header[..35], b"Generated sphere mesh with 12 nodes");
        assert!(header[35..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_header_truncation() {
        let long = "x".repeat(200);
        let header = header_bytes(&long);
        assert_eq!(header.len(), STL_HEADER_SIZE);
        assert!(header.iter().all(|&b| b == b'x'));
    }

    #[test]
    fn test_single_triangle_layout() {
        let mut bytes = Vec::new();
        encode_stl(&create_test_triangle(), &mut bytes).unwrap();

        assert_eq!(bytes.len(), stl_file_size(1));
        assert_eq!(&bytes[80..84], &1u32.to_le_bytes());

        // normal (0, 0, 1)
        assert_eq!(read_f32(&bytes, 84), 0.0);
        assert_eq!(read_f32(&bytes, 88), 0.0);
        assert_eq!(read_f32(&bytes, 92), 1.0);

        // second vertex is X
        assert_eq!(read_f32(&bytes, 108), 1.0);
        assert_eq!(read_f32(&bytes, 112), 0.0);

        // attribute byte count
        assert_eq!(&bytes[132..134], &[0, 0]);
    }

    #[test]
    fn test_degenerate_triangle_normal() {
        let mesh =
            Mesh::from_parts(vec![Vec3::X, Vec3::X, Vec3::X], vec![[0, 1, 2]]).unwrap();
        let mut bytes = Vec::new();
        encode_stl(&mesh, &mut bytes).unwrap();

        assert_eq!(read_f32(&bytes, 84), 0.0);
        assert_eq!(read_f32(&bytes, 88), 0.0);
        assert_eq!(read_f32(&bytes, 92), 1.0);
    }

    #[test]
    fn test_empty_mesh() {
        let mut bytes = Vec::new();
        encode_stl(&Mesh::new(), &mut bytes).unwrap();
        assert_eq!(bytes.len(), 84);
        assert_eq!(&bytes[80..84], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_sphere_size() {
        let mesh = generate_sphere_mesh(100).unwrap();
        let mut bytes = Vec::new();
        encode_stl(&mesh, &mut bytes).unwrap();
        assert_eq!(bytes.len(), stl_file_size(mesh.triangle_count()));
        assert!(bytes.starts_with(b"Generated sphere mesh with 220 nodes\0"));
    }
}

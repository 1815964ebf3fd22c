//! # Mesh Data Structure
//!
//! Core mesh representation: an ordered vertex list and index-triplet faces.

use config::constants::FALLBACK_NORMAL;
use glam::Vec3;

use crate::error::MeshError;

/// A triangle mesh with vertices and indices.
///
/// Vertices are stored as `f32` triples, the precision every output format
/// uses. A mesh is never modified once built; encoders only borrow it.
///
/// # Example
///
/// ```rust
/// use sphere_mesh::Mesh;
/// use glam::Vec3;
///
/// let mesh = Mesh::from_parts(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![[0, 1, 2]]).unwrap();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<Vec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub(crate) fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Builds a mesh from existing buffers, rejecting faces that point past
    /// the end of the vertex list.
    pub fn from_parts(vertices: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> Result<Self, MeshError> {
        let vertex_count = vertices.len();
        for (triangle, tri) in triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&index| index as usize >= vertex_count) {
                return Err(MeshError::IndexOutOfRange {
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(Self {
            vertices,
            triangles,
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub(crate) fn add_vertex(&mut self, position: Vec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub(crate) fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> Vec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the three corner positions of a triangle in winding order.
    #[inline]
    pub fn triangle_vertices(&self, index: usize) -> [Vec3; 3] {
        let [a, b, c] = self.triangles[index];
        [self.vertex(a), self.vertex(b), self.vertex(c)]
    }

    /// Returns the unit normal of a triangle, see [`triangle_normal`].
    pub fn face_normal(&self, index: usize) -> Vec3 {
        let [a, b, c] = self.triangle_vertices(index);
        triangle_normal(a, b, c)
    }

    /// Checks that every triangle index refers to an existing vertex.
    pub fn indices_in_range(&self) -> bool {
        let vertex_count = self.vertices.len();
        self.triangles
            .iter()
            .flatten()
            .all(|&index| (index as usize) < vertex_count)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        if self.vertices.is_empty() {
            return (Vec3::ZERO, Vec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }
}

/// Computes the unit normal of the triangle `(a, b, c)`.
///
/// The normal is `(b - a) × (c - a)` divided by its length, so it follows the
/// winding order. The arithmetic runs in `f64` and is rounded once at the end.
/// A zero-length cross product (degenerate triangle) yields `(0, 0, 1)`.
///
/// The inputs are the stored `f32` positions, not the exact trigonometric
/// values they were rounded from. Normals therefore describe the mesh as
/// written, and can differ in the last bits (around `1e-6`) from a generator
/// that keeps `f64` positions until serialization.
///
/// # Example
///
/// ```rust
/// use sphere_mesh::triangle_normal;
/// use glam::Vec3;
///
/// assert_eq!(triangle_normal(Vec3::ZERO, Vec3::X, Vec3::Y), Vec3::Z);
/// assert_eq!(triangle_normal(Vec3::ZERO, Vec3::X, Vec3::X), Vec3::Z);
/// ```
pub fn triangle_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    let a = a.as_dvec3();
    let edge1 = b.as_dvec3() - a;
    let edge2 = c.as_dvec3() - a;
    let normal = edge1.cross(edge2);

    let length = normal.length();
    if length == 0.0 {
        return Vec3::from_array(FALLBACK_NORMAL);
    }
    (normal / length).as_vec3()
}

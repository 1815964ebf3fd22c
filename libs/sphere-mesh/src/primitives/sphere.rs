//! # Sphere Primitive
//!
//! Generates a unit sphere mesh using latitude/longitude tessellation sized
//! from a target vertex count.

use std::f64::consts::PI;

use config::constants::MAX_VERTICES;
use glam::Vec3;
use log::debug;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Latitude/longitude grid dimensions derived from a target vertex count.
///
/// With `d = floor(sqrt(target))` the grid has `d` latitude bands
/// (`d + 1` rings, poles included) and `2d` samples per ring.
///
/// # Example
///
/// ```rust
/// use sphere_mesh::primitives::SphereGrid;
///
/// let grid = SphereGrid::from_target(4).unwrap();
/// assert_eq!(grid.lat_divisions(), 2);
/// assert_eq!(grid.lon_divisions(), 4);
/// assert_eq!(grid.vertex_count(), 12);
/// assert_eq!(grid.triangle_count(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SphereGrid {
    lat_divisions: u32,
    lon_divisions: u32,
}

impl SphereGrid {
    /// Computes the grid for `target` vertices.
    ///
    /// Fails when the target is zero (empty grid) or when the grid would hold
    /// more vertices than `u32` face indices can address.
    pub fn from_target(target: usize) -> Result<Self, MeshError> {
        let divisions = floor_sqrt(target);
        if divisions == 0 {
            return Err(MeshError::invalid_target(target));
        }

        let vertex_count = (divisions + 1)
            .checked_mul(2 * divisions)
            .unwrap_or(usize::MAX);
        if vertex_count > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: vertex_count,
                max: MAX_VERTICES,
            });
        }

        // Both fit in u32 because (d + 1) * 2d does.
        Ok(Self {
            lat_divisions: divisions as u32,
            lon_divisions: (2 * divisions) as u32,
        })
    }

    /// Number of latitude bands; rings run from `0` to `lat_divisions`.
    #[inline]
    pub fn lat_divisions(&self) -> u32 {
        self.lat_divisions
    }

    /// Number of vertices on every ring.
    #[inline]
    pub fn lon_divisions(&self) -> u32 {
        self.lon_divisions
    }

    /// Vertices the grid produces, pole rings included.
    pub fn vertex_count(&self) -> usize {
        (self.lat_divisions as usize + 1) * self.lon_divisions as usize
    }

    /// Triangles the grid produces.
    ///
    /// Every band contributes one triangle per quad except the pole bands,
    /// which lose the triangle that would collapse onto the pole.
    pub fn triangle_count(&self) -> usize {
        2 * self.lon_divisions as usize * (self.lat_divisions as usize - 1)
    }

    /// Index of the vertex at `ring`, `sample` in ring-major order.
    #[inline]
    fn index(&self, ring: u32, sample: u32) -> u32 {
        ring * self.lon_divisions + sample % self.lon_divisions
    }
}

/// Creates a unit sphere mesh with approximately `target` vertices.
///
/// # Arguments
///
/// * `target` - Requested vertex count; the actual count is
///   `(floor(sqrt(target)) + 1) * 2 * floor(sqrt(target))`
///
/// # Returns
///
/// A mesh on the unit sphere centered at the origin.
///
/// # Algorithm
///
/// - Ring `i` sits at polar angle `theta = PI * i / lat_divisions`
/// - Sample `j` sits at azimuth `phi = 2 * PI * j / lon_divisions`
/// - Pole rings keep all `lon_divisions` coincident vertices
/// - Each quad between rings `i` and `i + 1` splits into `(v1, v2, v3)` and
///   `(v2, v4, v3)`; the first is skipped on the top band and the second on
///   the bottom band
///
/// # Example
///
/// ```rust
/// use sphere_mesh::primitives::generate_sphere_mesh;
///
/// let mesh = generate_sphere_mesh(10_000).unwrap();
/// assert_eq!(mesh.vertex_count(), 101 * 200);
/// ```
pub fn generate_sphere_mesh(target: usize) -> Result<Mesh, MeshError> {
    let grid = SphereGrid::from_target(target)?;
    let lat_divisions = grid.lat_divisions();
    let lon_divisions = grid.lon_divisions();

    debug!(
        "Sphere grid for target {}: {} x {} ({} vertices, {} triangles)",
        target,
        lat_divisions,
        lon_divisions,
        grid.vertex_count(),
        grid.triangle_count()
    );

    let mut mesh = Mesh::with_capacity(grid.vertex_count(), grid.triangle_count());

    // Vertex rings, north pole first
    for i in 0..=lat_divisions {
        let theta = PI * f64::from(i) / f64::from(lat_divisions);
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for j in 0..lon_divisions {
            let phi = 2.0 * PI * f64::from(j) / f64::from(lon_divisions);
            let x = sin_theta * phi.cos();
            let y = sin_theta * phi.sin();
            let z = cos_theta;

            mesh.add_vertex(Vec3::new(x as f32, y as f32, z as f32));
        }
    }

    // Two triangles per quad, minus the ones collapsing onto a pole
    for i in 0..lat_divisions {
        for j in 0..lon_divisions {
            let v1 = grid.index(i, j);
            let v2 = grid.index(i, j + 1);
            let v3 = grid.index(i + 1, j);
            let v4 = grid.index(i + 1, j + 1);

            if i > 0 {
                mesh.add_triangle(v1, v2, v3);
            }
            if i + 1 < lat_divisions {
                mesh.add_triangle(v2, v4, v3);
            }
        }
    }

    Ok(mesh)
}

/// Integer square root rounded down, exact for every `usize`.
fn floor_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root.checked_mul(root).map_or(true, |square| square > n) {
        root -= 1;
    }
    while (root + 1)
        .checked_mul(root + 1)
        .map_or(false, |square| square <= n)
    {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests;

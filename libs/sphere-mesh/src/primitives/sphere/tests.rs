//! Sphere primitive tests.

use super::*;
use approx::assert_relative_eq;

#[test]
fn test_sphere_target_four() {
    // d = 2: 3 rings of 4 vertices, 4 triangles on each pole band
    let mesh = generate_sphere_mesh(4).unwrap();
    assert_eq!(mesh.vertex_count(), 12);
    assert_eq!(mesh.triangle_count(), 8);
}

#[test]
fn test_sphere_target_four_faces() {
    let mesh = generate_sphere_mesh(4).unwrap();
    let expected: Vec<[u32; 3]> = vec![
        // band 0: only (v2, v4, v3)
        [1, 5, 4],
        [2, 6, 5],
        [3, 7, 6],
        [0, 4, 7],
        // band 1: only (v1, v2, v3)
        [4, 5, 8],
        [5, 6, 9],
        [6, 7, 10],
        [7, 4, 11],
    ];
    assert_eq!(mesh.triangles(), expected.as_slice());
}

#[test]
fn test_vertex_count_formula() {
    for target in (1..=400).chain([9_999, 10_000, 10_001, 123_456]) {
        let d = (target as f64).sqrt().floor() as usize;
        let grid = SphereGrid::from_target(target).unwrap();
        assert_eq!(grid.vertex_count(), (d + 1) * 2 * d, "target {target}");
    }
}

#[test]
fn test_generated_counts_match_grid() {
    for target in [1, 2, 4, 5, 16, 50, 99, 100, 1_000] {
        let grid = SphereGrid::from_target(target).unwrap();
        let mesh = generate_sphere_mesh(target).unwrap();
        assert_eq!(mesh.vertex_count(), grid.vertex_count());
        assert_eq!(mesh.triangle_count(), grid.triangle_count());
    }
}

#[test]
fn test_smallest_grid_has_no_triangles() {
    // d = 1: both bands are pole bands and every triangle is suppressed
    for target in 1..4 {
        let mesh = generate_sphere_mesh(target).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 0);
    }
}

#[test]
fn test_zero_target_is_rejected() {
    assert_eq!(
        generate_sphere_mesh(0).unwrap_err(),
        MeshError::InvalidTarget { target: 0 }
    );
}

#[test]
fn test_oversized_grid_is_rejected() {
    let result = SphereGrid::from_target(usize::MAX);
    assert!(matches!(result, Err(MeshError::TooManyVertices { .. })));
}

#[test]
fn test_indices_in_range() {
    for target in [4, 37, 10_000] {
        let mesh = generate_sphere_mesh(target).unwrap();
        assert!(mesh.indices_in_range());
    }
}

#[test]
fn test_vertices_on_unit_sphere() {
    let mesh = generate_sphere_mesh(2_500).unwrap();
    for v in mesh.vertices() {
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-6);
    }
    let (min, max) = mesh.bounding_box();
    assert_relative_eq!(min.z, -1.0);
    assert_relative_eq!(max.z, 1.0);
}

#[test]
fn test_pole_rings_are_coincident() {
    let mesh = generate_sphere_mesh(100).unwrap();
    let grid = SphereGrid::from_target(100).unwrap();
    let lon = grid.lon_divisions() as usize;
    let vertices = mesh.vertices();

    let north = &vertices[..lon];
    let south = &vertices[vertices.len() - lon..];
    for v in north {
        assert_relative_eq!(v.z, 1.0);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-6);
    }
    for v in south {
        assert_relative_eq!(v.z, -1.0);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-6);
    }
}

#[test]
fn test_rings_are_ring_major() {
    let mesh = generate_sphere_mesh(36).unwrap();
    let grid = SphereGrid::from_target(36).unwrap();
    let lon = grid.lon_divisions() as usize;
    for ring in mesh.vertices().chunks(lon) {
        let z = ring[0].z;
        assert!(ring.iter().all(|v| v.z == z));
    }
}

#[test]
fn test_triangles_face_inward() {
    let mesh = generate_sphere_mesh(400).unwrap();
    for index in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle_vertices(index);
        let centroid = (a + b + c) / 3.0;
        assert!(mesh.face_normal(index).dot(centroid) < 0.0);
    }
}

#[test]
fn test_no_degenerate_triangles() {
    let mesh = generate_sphere_mesh(900).unwrap();
    for &[a, b, c] in mesh.triangles() {
        assert!(a != b && b != c && a != c);
    }
}

#[test]
fn test_generation_is_deterministic() {
    let first = generate_sphere_mesh(5_000).unwrap();
    let second = generate_sphere_mesh(5_000).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_floor_sqrt_exact() {
    assert_eq!(floor_sqrt(0), 0);
    assert_eq!(floor_sqrt(3), 1);
    assert_eq!(floor_sqrt(4), 2);
    assert_eq!(floor_sqrt(99), 9);
    assert_eq!(floor_sqrt(1_000_000), 1_000);
    assert_eq!(floor_sqrt(999_999), 999);
}

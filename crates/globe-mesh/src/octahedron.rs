//! The seed solid: a unit octahedron with outward-facing counter-clockwise winding.

use glam::Vec3;

use crate::triangle_buffer::TriangleBuffer;

const UP: Vec3 = Vec3::Y;
const DOWN: Vec3 = Vec3::NEG_Y;
const EAST: Vec3 = Vec3::X;
const WEST: Vec3 = Vec3::NEG_X;
const NORTH: Vec3 = Vec3::NEG_Z;
const SOUTH: Vec3 = Vec3::Z;

/// The 8 faces of the octahedron, 3 vertices each.
///
/// The upper four faces fan around `+Y`, the lower four around `-Y`. The two
/// pole-to-`-Z` edges lie on the `x = 0, z < 0` half-plane, which is where the
/// texture seam lands after UV projection.
pub const OCTAHEDRON: [Vec3; 24] = [
    UP, NORTH, WEST, //
    UP, WEST, SOUTH, //
    UP, SOUTH, EAST, //
    UP, EAST, NORTH, //
    DOWN, WEST, NORTH, //
    DOWN, SOUTH, WEST, //
    DOWN, EAST, SOUTH, //
    DOWN, NORTH, EAST, //
];

/// Level 0 of the subdivision sequence.
pub fn octahedron() -> TriangleBuffer<Vec3> {
    OCTAHEDRON
        .chunks_exact(3)
        .map(|tri| [tri[0], tri[1], tri[2]])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octahedron_has_eight_faces() {
        let seed = octahedron();
        assert_eq!(seed.triangle_count(), 8);
        assert_eq!(seed.len(), 24);
    }

    #[test]
    fn test_components_are_axis_units() {
        for v in OCTAHEDRON {
            for c in v.to_array() {
                assert!(c == -1.0 || c == 0.0 || c == 1.0, "unexpected component {c}");
            }
            assert_eq!(v.length(), 1.0);
        }
    }

    #[test]
    fn test_all_faces_wind_outward() {
        for [a, b, c] in octahedron().triangles() {
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(
                normal.dot(centroid) > 0.0,
                "face {a:?} {b:?} {c:?} winds inward"
            );
        }
    }

    #[test]
    fn test_six_distinct_corners() {
        let mut corners: Vec<[f32; 3]> = OCTAHEDRON.iter().map(|v| v.to_array()).collect();
        corners.sort_by(|a, b| a.partial_cmp(b).unwrap());
        corners.dedup();
        assert_eq!(corners.len(), 6);
    }

    #[test]
    fn test_each_corner_shared_by_four_faces() {
        for corner in [UP, DOWN, EAST, WEST, NORTH, SOUTH] {
            let faces = octahedron()
                .triangles()
                .filter(|tri| tri.contains(&corner))
                .count();
            assert_eq!(faces, 4, "corner {corner:?}");
        }
    }
}

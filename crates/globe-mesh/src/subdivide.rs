//! Midpoint subdivision on the unit sphere and the per-level buffers it produces.

use glam::Vec3;

use crate::octahedron::octahedron;
use crate::triangle_buffer::TriangleBuffer;

/// Midpoint of `a` and `b` pushed back out to the unit sphere.
#[inline]
fn sphere_midpoint(a: Vec3, b: Vec3) -> Vec3 {
    (a + b).normalize()
}

/// Split every triangle of `level` into four.
///
/// For a triangle `(a, b, c)` with projected edge midpoints `ab`, `bc`, `ca`,
/// the children are emitted as `(a, ab, ca)`, `(ab, bc, ca)`, `(ab, b, bc)`,
/// `(ca, bc, c)`. Each child keeps the parent's winding. The input is left
/// untouched and a fresh buffer four times its size is returned.
pub fn subdivide(level: &TriangleBuffer<Vec3>) -> TriangleBuffer<Vec3> {
    let mut split = TriangleBuffer::with_triangle_capacity(level.triangle_count() * 4);

    for [a, b, c] in level.triangles() {
        let ab = sphere_midpoint(a, b);
        let bc = sphere_midpoint(b, c);
        let ca = sphere_midpoint(c, a);

        split.push_triangle([a, ab, ca]);
        split.push_triangle([ab, bc, ca]);
        split.push_triangle([ab, b, bc]);
        split.push_triangle([ca, bc, c]);
    }

    split
}

/// Every subdivision level from the octahedron seed down to the requested depth.
#[derive(Clone, Debug)]
pub struct LodSequence {
    levels: Vec<TriangleBuffer<Vec3>>,
}

impl LodSequence {
    /// Level `i`, holding `8 * 4^i` triangles.
    pub fn level(&self, i: usize) -> Option<&TriangleBuffer<Vec3>> {
        self.levels.get(i)
    }

    /// The most subdivided level.
    pub fn finest(&self) -> &TriangleBuffer<Vec3> {
        // `subdivision_levels` always seeds level 0.
        &self.levels[self.levels.len() - 1]
    }

    /// Number of subdivision passes applied to reach [`Self::finest`].
    pub fn depth(&self) -> u32 {
        (self.levels.len() - 1) as u32
    }

    /// Number of levels, including the seed.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always `false`; the seed level is always present.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterate from coarsest to finest.
    pub fn iter(&self) -> std::slice::Iter<'_, TriangleBuffer<Vec3>> {
        self.levels.iter()
    }

    /// Drop the coarser levels and keep only the finest one.
    pub fn into_finest(mut self) -> TriangleBuffer<Vec3> {
        // Never empty, see `finest`.
        self.levels.swap_remove(self.levels.len() - 1)
    }
}

impl<'a> IntoIterator for &'a LodSequence {
    type Item = &'a TriangleBuffer<Vec3>;
    type IntoIter = std::slice::Iter<'a, TriangleBuffer<Vec3>>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

/// Run `divisions` subdivision passes starting from the octahedron.
///
/// Cost grows as `O(4^divisions)` in both time and memory.
pub fn subdivision_levels(divisions: u32) -> LodSequence {
    let mut levels = Vec::with_capacity(divisions as usize + 1);
    levels.push(octahedron());

    for i in 0..divisions as usize {
        let next = subdivide(&levels[i]);
        levels.push(next);
    }

    LodSequence { levels }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_each_level_quadruples() {
        let lods = subdivision_levels(4);
        assert_eq!(lods.len(), 5);
        assert_eq!(lods.depth(), 4);
        for (i, level) in lods.iter().enumerate() {
            assert_eq!(level.triangle_count(), 8 * 4usize.pow(i as u32));
        }
    }

    #[test]
    fn test_zero_divisions_is_seed() {
        let lods = subdivision_levels(0);
        assert_eq!(lods.len(), 1);
        assert_eq!(lods.finest(), &octahedron());
    }

    #[test]
    fn test_child_order_and_corners() {
        let a = Vec3::Y;
        let b = Vec3::NEG_Z;
        let c = Vec3::NEG_X;
        let parent: TriangleBuffer<Vec3> = [[a, b, c]].into_iter().collect();
        let split = subdivide(&parent);
        let tris: Vec<[Vec3; 3]> = split.triangles().collect();

        let ab = (a + b).normalize();
        let bc = (b + c).normalize();
        let ca = (c + a).normalize();
        assert_eq!(tris[0], [a, ab, ca]);
        assert_eq!(tris[1], [ab, bc, ca]);
        assert_eq!(tris[2], [ab, b, bc]);
        assert_eq!(tris[3], [ca, bc, c]);
    }

    #[test]
    fn test_subdivide_leaves_input_untouched() {
        let seed = octahedron();
        let before = seed.clone();
        let _ = subdivide(&seed);
        assert_eq!(seed, before);
    }

    #[test]
    fn test_vertices_stay_on_unit_sphere() {
        let lods = subdivision_levels(5);
        for level in &lods {
            for v in level.vertices() {
                assert!((v.length() - 1.0).abs() < EPSILON, "{v:?} off sphere");
            }
        }
    }

    #[test]
    fn test_winding_stays_outward() {
        let finest = subdivision_levels(3).into_finest();
        for [a, b, c] in finest.triangles() {
            let normal = (b - a).cross(c - a);
            assert!(normal.dot(a + b + c) > 0.0);
        }
    }

    #[test]
    fn test_meridian_vertices_keep_exact_zero_x() {
        // Points on the x = 0 great circle must stay bit-exact so the seam
        // lands on u == 1.0 exactly.
        let finest = subdivision_levels(4).into_finest();
        let on_meridian = finest
            .vertices()
            .iter()
            .filter(|v| v.x == 0.0)
            .all(|v| v.x.to_bits() == 0);
        assert!(on_meridian);
    }
}

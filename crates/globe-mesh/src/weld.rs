//! Vertex welding: merges identical `(position, uv)` pairs into an indexed mesh.

use glam::{Vec2, Vec3};
use rustc_hash::FxHashMap;

use crate::error::MeshError;
use crate::sphere_mesh::SphereMesh;
use crate::triangle_buffer::TriangleBuffer;

/// Bit-exact identity of one welded vertex: three position and two UV components.
///
/// Keys compare raw `f32` bit patterns, with `-0.0` folded into `0.0` so the
/// two zeros weld together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VertexKey([u32; 5]);

impl VertexKey {
    /// Key for a position and texture coordinate.
    pub fn new(position: Vec3, uv: Vec2) -> Self {
        Self([
            canonical_bits(position.x),
            canonical_bits(position.y),
            canonical_bits(position.z),
            canonical_bits(uv.x),
            canonical_bits(uv.y),
        ])
    }
}

#[inline]
pub(crate) fn canonical_bits(value: f32) -> u32 {
    if value == 0.0 { 0 } else { value.to_bits() }
}

/// Weld parallel position and UV triangle buffers into a [`SphereMesh`].
///
/// Vertices are stored in first-seen order and `indices` has one entry per
/// input slot, so triangle order and winding carry over unchanged. Every
/// welded vertex starts with an elevation of zero.
///
/// # Errors
///
/// [`MeshError::LengthMismatch`] if the buffers differ in length, and
/// [`MeshError::IndexOverflow`] if more than 65536 unique vertices appear.
pub fn weld(
    positions: &TriangleBuffer<Vec3>,
    uvs: &TriangleBuffer<Vec2>,
) -> Result<SphereMesh, MeshError> {
    if positions.len() != uvs.len() {
        return Err(MeshError::LengthMismatch {
            positions: positions.len(),
            texcoords: uvs.len(),
        });
    }

    let mut lookup: FxHashMap<VertexKey, u16> = FxHashMap::default();
    let mut mesh = SphereMesh::with_capacity(positions.len());

    for (&position, &uv) in positions.vertices().iter().zip(uvs.vertices()) {
        let key = VertexKey::new(position, uv);

        let index = match lookup.get(&key) {
            Some(&existing) => existing,
            None => {
                let next = mesh.position.len();
                let index = u16::try_from(next)
                    .map_err(|_| MeshError::IndexOverflow { vertices: next + 1 })?;
                lookup.insert(key, index);
                mesh.position.push(position.to_array());
                mesh.texcoord.push(uv.to_array());
                mesh.elevation.push(0.0);
                index
            }
        };

        mesh.indices.push(index);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffers(points: &[(Vec3, Vec2)]) -> (TriangleBuffer<Vec3>, TriangleBuffer<Vec2>) {
        let positions = points.iter().map(|p| p.0).collect();
        let uvs = points.iter().map(|p| p.1).collect();
        (
            TriangleBuffer::from_vertices(positions).unwrap(),
            TriangleBuffer::from_vertices(uvs).unwrap(),
        )
    }

    #[test]
    fn test_shared_vertices_collapse() {
        let a = (Vec3::X, Vec2::new(0.75, 0.5));
        let b = (Vec3::Y, Vec2::new(0.5, 0.0));
        let c = (Vec3::Z, Vec2::new(0.5, 0.5));
        let d = (Vec3::NEG_X, Vec2::new(0.25, 0.5));
        let (positions, uvs) = buffers(&[a, b, c, c, b, d]);

        let mesh = weld(&positions, &uvs).unwrap();
        assert_eq!(mesh.indices, vec![0, 1, 2, 2, 1, 3]);
        assert_eq!(mesh.position.len(), 4);
        assert_eq!(mesh.texcoord.len(), 4);
        assert_eq!(mesh.elevation, vec![0.0; 4]);
    }

    #[test]
    fn test_same_position_different_uv_stays_split() {
        let seam_low = (Vec3::NEG_Z, Vec2::new(0.0, 0.5));
        let seam_high = (Vec3::NEG_Z, Vec2::new(1.0, 0.5));
        let pole = (Vec3::Y, Vec2::new(0.5, 0.0));
        let (positions, uvs) = buffers(&[pole, seam_low, pole, pole, seam_high, pole]);

        let mesh = weld(&positions, &uvs).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 0, 0, 2, 0]);
    }

    #[test]
    fn test_negative_zero_welds_with_zero() {
        assert_eq!(
            VertexKey::new(Vec3::new(-0.0, 1.0, 0.0), Vec2::new(0.5, -0.0)),
            VertexKey::new(Vec3::new(0.0, 1.0, 0.0), Vec2::new(0.5, 0.0)),
        );
    }

    #[test]
    fn test_length_mismatch() {
        let positions = TriangleBuffer::from_vertices(vec![Vec3::X; 6]).unwrap();
        let uvs = TriangleBuffer::from_vertices(vec![Vec2::ZERO; 3]).unwrap();
        assert_eq!(
            weld(&positions, &uvs).unwrap_err(),
            MeshError::LengthMismatch {
                positions: 6,
                texcoords: 3
            }
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        // 65538 distinct vertices, a whole number of triangles.
        let count = 65_538;
        let positions: Vec<Vec3> = (0..count).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect();
        let uvs = vec![Vec2::ZERO; count];

        let result = weld(
            &TriangleBuffer::from_vertices(positions).unwrap(),
            &TriangleBuffer::from_vertices(uvs).unwrap(),
        );
        assert_eq!(result.unwrap_err(), MeshError::IndexOverflow { vertices: 65_537 });
    }

    #[test]
    fn test_exactly_u16_range_fits() {
        let count = 65_538;
        // The last two slots repeat earlier vertices, so 65536 are unique.
        let positions: Vec<Vec3> = (0..count)
            .map(|i| Vec3::new((i % 65_536) as f32, 0.0, 0.0))
            .collect();
        let uvs = vec![Vec2::ZERO; count];

        let mesh = weld(
            &TriangleBuffer::from_vertices(positions).unwrap(),
            &TriangleBuffer::from_vertices(uvs).unwrap(),
        )
        .unwrap();
        assert_eq!(mesh.vertex_count(), 65_536);
        assert_eq!(mesh.indices[65_535], u16::MAX);
        assert_eq!(mesh.indices[65_536], 0);
    }
}

//! Indexed sphere mesh: welded vertex attributes plus a 16-bit index buffer.

use glam::{Vec2, Vec3};

use crate::error::MeshError;
use crate::weld::canonical_bits;

/// One corner of a re-expanded triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshCorner {
    /// Object-space position on the unit sphere.
    pub position: Vec3,
    /// Texture coordinate.
    pub uv: Vec2,
}

/// The output of a sphere build, laid out for an indexed draw.
///
/// `position`, `texcoord` and `elevation` are parallel, one entry per welded
/// vertex. `indices` has three entries per triangle, in winding order.
///
/// Indices are `u16`, so a mesh holds at most 65536 vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct SphereMesh {
    /// Index buffer (triangles, 3 indices per triangle).
    pub indices: Vec<u16>,
    /// Welded vertex positions.
    pub position: Vec<[f32; 3]>,
    /// Texture coordinates, one per position.
    pub texcoord: Vec<[f32; 2]>,
    /// Per-vertex elevation, zero until filled by an elevation sampler.
    pub elevation: Vec<f32>,
}

impl SphereMesh {
    pub(crate) fn with_capacity(slots: usize) -> Self {
        Self {
            indices: Vec::with_capacity(slots),
            position: Vec::new(),
            texcoord: Vec::new(),
            elevation: Vec::new(),
        }
    }

    /// Number of welded vertices.
    pub fn vertex_count(&self) -> usize {
        self.position.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Positions as a flat `x, y, z, x, y, z, ...` slice.
    pub fn position_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.position)
    }

    /// Texture coordinates as a flat `u, v, u, v, ...` slice.
    pub fn texcoord_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.texcoord)
    }

    /// Index buffer contents for GPU upload.
    pub fn indices_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Position buffer contents for GPU upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.position)
    }

    /// Texture coordinate buffer contents for GPU upload.
    pub fn texcoord_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texcoord)
    }

    /// Elevation buffer contents for GPU upload.
    pub fn elevation_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.elevation)
    }

    /// Mutable access to the elevation channel.
    ///
    /// The slice length is fixed; writing through it never changes the
    /// vertex count or the index buffer.
    pub fn elevation_mut(&mut self) -> &mut [f32] {
        &mut self.elevation
    }

    /// Look up one welded vertex.
    pub fn corner(&self, index: u16) -> Option<MeshCorner> {
        let i = usize::from(index);
        let position = self.position.get(i)?;
        let uv = self.texcoord.get(i)?;
        Some(MeshCorner {
            position: Vec3::from_array(*position),
            uv: Vec2::from_array(*uv),
        })
    }

    /// Check that the buffers describe a well-formed indexed mesh.
    ///
    /// # Errors
    ///
    /// [`MeshError::LengthMismatch`] if `position` and `texcoord` differ in
    /// length, [`MeshError::IncompleteTriangle`] if `indices` is not a whole
    /// number of triangles, and [`MeshError::IndexOutOfRange`] for the first
    /// index that has no vertex.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.position.len() != self.texcoord.len() {
            return Err(MeshError::LengthMismatch {
                positions: self.position.len(),
                texcoords: self.texcoord.len(),
            });
        }
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::IncompleteTriangle {
                len: self.indices.len(),
            });
        }
        match self
            .indices
            .iter()
            .find(|&&i| usize::from(i) >= self.vertex_count())
        {
            Some(&index) => Err(MeshError::IndexOutOfRange {
                index,
                vertices: self.vertex_count(),
            }),
            None => Ok(()),
        }
    }

    /// Re-expand the index buffer into triangles, in index order.
    ///
    /// # Errors
    ///
    /// Any error from [`Self::validate`].
    pub fn triangles(&self) -> Result<impl Iterator<Item = [MeshCorner; 3]> + '_, MeshError> {
        self.validate()?;
        Ok(self.indices.chunks_exact(3).map(|tri| {
            [tri[0], tri[1], tri[2]].map(|i| {
                let i = usize::from(i);
                MeshCorner {
                    position: Vec3::from_array(self.position[i]),
                    uv: Vec2::from_array(self.texcoord[i]),
                }
            })
        }))
    }

    /// Number of distinct positions, ignoring texture coordinates.
    ///
    /// The difference from [`Self::vertex_count`] is the number of vertices
    /// duplicated along the texture seam.
    pub fn unique_position_count(&self) -> usize {
        let mut keys: Vec<[u32; 3]> = self
            .position
            .iter()
            .map(|p| p.map(canonical_bits))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys.len()
    }
}

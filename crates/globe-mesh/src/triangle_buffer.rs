//! Unindexed triangle storage: a flat vertex list read three at a time.

use crate::error::MeshError;

/// A flat, unindexed triangle list.
///
/// Every group of three consecutive vertices is one triangle, in winding order.
/// Vertices are never shared between triangles; sharing only appears after
/// [`crate::weld`].
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleBuffer<T> {
    vertices: Vec<T>,
}

impl<T: Copy> TriangleBuffer<T> {
    /// Wrap a vertex list, rejecting lengths that leave a partial triangle.
    pub fn from_vertices(vertices: Vec<T>) -> Result<Self, MeshError> {
        if vertices.len() % 3 != 0 {
            return Err(MeshError::IncompleteTriangle {
                len: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// Create an empty buffer with room for `triangles` triangles.
    pub(crate) fn with_triangle_capacity(triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangles * 3),
        }
    }

    /// Append one triangle.
    #[inline]
    pub(crate) fn push_triangle(&mut self, triangle: [T; 3]) {
        self.vertices.extend_from_slice(&triangle);
    }

    /// All vertices, three per triangle.
    pub fn vertices(&self) -> &[T] {
        &self.vertices
    }

    /// Iterate over triangles as `[a, b, c]` in stored order.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = [T; 3]> + '_ {
        self.vertices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of vertex slots (three per triangle).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the buffer holds no triangles.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Consume the buffer and return its vertex list.
    pub fn into_vertices(self) -> Vec<T> {
        self.vertices
    }
}

impl<T: Copy> FromIterator<[T; 3]> for TriangleBuffer<T> {
    fn from_iter<I: IntoIterator<Item = [T; 3]>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut buffer = Self::with_triangle_capacity(iter.size_hint().0);
        for triangle in iter {
            buffer.push_triangle(triangle);
        }
        buffer
    }
}

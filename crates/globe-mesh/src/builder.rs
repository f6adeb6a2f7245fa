//! Sphere mesh construction: octahedron seed, subdivision, UV unwrap, welding.

use tracing::{debug, warn};

use crate::error::MeshError;
use crate::sphere_mesh::SphereMesh;
use crate::subdivide::{LodSequence, subdivision_levels};
use crate::uv::triangle_uvs;
use crate::weld::weld;

/// Deepest subdivision whose welded vertex count fits in `u16` indices.
///
/// Depth `d` has `4 * 4^d + 2` distinct positions before seam duplicates,
/// which passes 65536 at `d = 7`.
pub const MAX_DIVISIONS: u32 = 6;

/// Builds a UV-mapped unit sphere by repeatedly subdividing an octahedron.
///
/// The octahedron's `x = 0, z < 0` edges give the longitude seam a clean
/// vertical line, so a single equirectangular texture wraps the sphere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SphereMeshBuilder {
    divisions: u32,
}

impl SphereMeshBuilder {
    /// A builder for `divisions` subdivision passes.
    pub fn new(divisions: u32) -> Self {
        Self { divisions }
    }

    /// Requested number of subdivision passes.
    pub fn divisions(&self) -> u32 {
        self.divisions
    }

    /// Number of triangles the built mesh will have: `8 * 4^divisions`.
    ///
    /// `None` when the count does not fit in `usize`.
    pub fn triangle_count(&self) -> Option<usize> {
        4usize
            .checked_pow(self.divisions)
            .and_then(|n| n.checked_mul(8))
    }

    /// The unindexed triangle buffers for every level up to `divisions`.
    ///
    /// Not bounded by [`MAX_DIVISIONS`]; callers bound the depth.
    pub fn levels(&self) -> LodSequence {
        subdivision_levels(self.divisions)
    }

    /// Build the indexed mesh.
    ///
    /// The result is a pure function of `divisions`: repeated builds are
    /// bit-identical.
    ///
    /// # Errors
    ///
    /// [`MeshError::DivisionsTooLarge`] before any allocation if `divisions`
    /// exceeds [`MAX_DIVISIONS`].
    pub fn build(&self) -> Result<SphereMesh, MeshError> {
        if self.divisions > MAX_DIVISIONS {
            warn!(
                divisions = self.divisions,
                max = MAX_DIVISIONS,
                "rejecting sphere subdivision depth"
            );
            return Err(MeshError::DivisionsTooLarge {
                divisions: self.divisions,
                max: MAX_DIVISIONS,
            });
        }

        let points = self.levels().into_finest();
        let uvs = triangle_uvs(&points);
        let mesh = weld(&points, &uvs)?;

        debug!(
            divisions = self.divisions,
            triangles = mesh.triangle_count(),
            vertices = mesh.vertex_count(),
            "built octahedron sphere"
        );

        Ok(mesh)
    }
}

/// Shorthand for `SphereMeshBuilder::new(divisions).build()`.
pub fn octahedron_sphere(divisions: u32) -> Result<SphereMesh, MeshError> {
    SphereMeshBuilder::new(divisions).build()
}

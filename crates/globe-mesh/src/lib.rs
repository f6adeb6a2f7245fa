//! Octahedron-based UV sphere meshes: subdivision, equirectangular unwrap,
//! seam fix-up, and vertex welding into a 16-bit indexed mesh.

pub mod builder;
pub mod cache;
pub mod elevation;
pub mod error;
pub mod octahedron;
pub mod sphere_mesh;
pub mod subdivide;
pub mod triangle_buffer;
pub mod uv;
pub mod weld;

pub use builder::{MAX_DIVISIONS, SphereMeshBuilder, octahedron_sphere};
pub use cache::SphereMeshCache;
pub use elevation::{fill_elevations, sample_elevation};
pub use error::MeshError;
pub use octahedron::{OCTAHEDRON, octahedron};
pub use sphere_mesh::{MeshCorner, SphereMesh};
pub use subdivide::{LodSequence, subdivide, subdivision_levels};
pub use triangle_buffer::TriangleBuffer;
pub use uv::{equirectangular_uv, fix_seam, triangle_uvs};
pub use weld::{VertexKey, weld};

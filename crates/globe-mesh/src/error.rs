//! Mesh construction error types.

/// Errors returned while building or welding a sphere mesh.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// The requested subdivision depth always produces more vertices than a
    /// 16-bit index buffer can address.
    #[error("subdivision depth {divisions} exceeds the maximum of {max}")]
    DivisionsTooLarge {
        /// Requested depth.
        divisions: u32,
        /// Deepest depth that fits in a `u16` index buffer.
        max: u32,
    },

    /// Welding produced more unique vertices than `u16` indices can reference.
    #[error("mesh needs {vertices} unique vertices, more than 16-bit indices can address")]
    IndexOverflow {
        /// Number of unique vertices at the point of overflow.
        vertices: usize,
    },

    /// An index buffer entry that points past the last vertex.
    #[error("index {index} is out of range for {vertices} vertices")]
    IndexOutOfRange {
        /// Offending index.
        index: u16,
        /// Number of vertices in the mesh.
        vertices: usize,
    },

    /// A triangle buffer whose length is not a multiple of three.
    #[error("triangle buffer length {len} is not a multiple of 3")]
    IncompleteTriangle {
        /// Offending buffer length.
        len: usize,
    },

    /// Position and texture coordinate buffers describe different vertex counts.
    #[error("{positions} positions but {texcoords} texture coordinates")]
    LengthMismatch {
        /// Number of positions.
        positions: usize,
        /// Number of texture coordinates.
        texcoords: usize,
    },

    /// An elevation bitmap with no pixels.
    #[error("heightmap is empty ({width}x{height})")]
    EmptyHeightmap {
        /// Bitmap width in pixels.
        width: u32,
        /// Bitmap height in pixels.
        height: u32,
    },
}

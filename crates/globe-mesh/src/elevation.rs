//! Per-vertex elevation sampled from a grayscale heightmap.
//!
//! The heightmap uses the same equirectangular layout as the mesh's texture
//! coordinates. Each vertex takes the nearest pixel at its `(u, v)`; a luma of
//! 0 maps to `-0.5` and 255 to `+0.5`.

use std::ops::Deref;

use glam::Vec2;
use image::{ImageBuffer, Luma};

use crate::error::MeshError;
use crate::sphere_mesh::SphereMesh;

/// Nearest-pixel elevation at texture coordinate `uv`.
///
/// A coordinate of exactly `1.0` wraps to `0.0` on either axis before
/// scaling, and pixel coordinates are clamped to the image. Returns `None`
/// for an image with no pixels.
pub fn sample_elevation<C>(heightmap: &ImageBuffer<Luma<u8>, C>, uv: Vec2) -> Option<f32>
where
    C: Deref<Target = [u8]>,
{
    let (width, height) = heightmap.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    let x = pixel_coord(uv.x, width - 1);
    let y = pixel_coord(uv.y, height - 1);
    let luma = heightmap.get_pixel(x, y).0[0];

    Some(f32::from(luma) / 255.0 - 0.5)
}

#[inline]
fn pixel_coord(t: f32, max: u32) -> u32 {
    let t = if t == 1.0 { 0.0 } else { t };
    let scaled = (t * max as f32).floor();
    // NaN and negatives saturate to 0 in the cast.
    (scaled as u32).min(max)
}

/// Fill `mesh.elevation` in place from `heightmap`, one sample per vertex.
///
/// Vertex count, texture coordinates and indices are left untouched.
///
/// # Errors
///
/// [`MeshError::EmptyHeightmap`] if the image has no pixels; the mesh is
/// not modified in that case.
pub fn fill_elevations<C>(
    mesh: &mut SphereMesh,
    heightmap: &ImageBuffer<Luma<u8>, C>,
) -> Result<(), MeshError>
where
    C: Deref<Target = [u8]>,
{
    let (width, height) = heightmap.dimensions();
    if width == 0 || height == 0 {
        return Err(MeshError::EmptyHeightmap { width, height });
    }

    let SphereMesh {
        texcoord,
        elevation,
        ..
    } = mesh;

    for (value, uv) in elevation.iter_mut().zip(texcoord.iter()) {
        *value = sample_elevation(heightmap, Vec2::from_array(*uv)).unwrap_or(0.0);
    }

    tracing::debug!(
        vertices = elevation.len(),
        width,
        height,
        "filled sphere elevations"
    );

    Ok(())
}

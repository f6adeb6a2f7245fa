//! Equirectangular texture coordinates and the longitude seam fix-up.
//!
//! `u` is longitude measured with `atan2(x, z)`, so it wraps from 1 back to 0
//! along the `x = 0, z < 0` meridian. `v` is latitude, flipped so the north
//! pole (`+Y`) sits at `v = 0`.

use std::f64::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use crate::triangle_buffer::TriangleBuffer;

/// Longitude/latitude texture coordinate for a point on the unit sphere.
///
/// ```text
/// u = atan2(x, z) / 2π + 0.5
/// v = 1 - (asin(y) / π + 0.5)
/// ```
///
/// The trigonometry runs in `f64` and the result is rounded to `f32` once.
#[inline]
#[must_use]
pub fn equirectangular_uv(p: Vec3) -> Vec2 {
    let [u, v] = uv_f64(p);
    Vec2::new(u as f32, v as f32)
}

#[inline]
fn uv_f64(p: Vec3) -> [f64; 2] {
    let (x, y, z) = (f64::from(p.x), f64::from(p.y), f64::from(p.z));
    let u = x.atan2(z) / TAU + 0.5;
    let v = 1.0 - (y.asin() / PI + 0.5);
    [u, v]
}

/// Pull a seam-straddling triangle back onto the low side of the texture.
///
/// If the three `u` values span more than half the texture, every `u` that is
/// exactly `1.0` becomes `0.0`. Values merely close to 1 are left alone. The
/// fix is local to one triangle, so the same position can end up with `u = 0`
/// here and `u = 1` in a neighbour.
#[must_use]
pub fn fix_seam(uvs: [Vec2; 3]) -> [Vec2; 3] {
    let [a, b, c] = uvs.map(|uv| [f64::from(uv.x), f64::from(uv.y)]);
    let fixed = fix_seam_f64([a, b, c]);
    fixed.map(|[u, v]| Vec2::new(u as f32, v as f32))
}

fn fix_seam_f64(mut uvs: [[f64; 2]; 3]) -> [[f64; 2]; 3] {
    let min = uvs[0][0].min(uvs[1][0]).min(uvs[2][0]);
    let max = uvs[0][0].max(uvs[1][0]).max(uvs[2][0]);

    if max - min > 0.5 {
        for uv in &mut uvs {
            if uv[0] == 1.0 {
                uv[0] = 0.0;
            }
        }
    }

    uvs
}

/// Per-vertex texture coordinates for `points`, seam-fixed triangle by triangle.
///
/// The seam test sees the unrounded `f64` longitudes of each triangle.
pub fn triangle_uvs(points: &TriangleBuffer<Vec3>) -> TriangleBuffer<Vec2> {
    points
        .triangles()
        .map(|tri| {
            let fixed = fix_seam_f64(tri.map(uv_f64));
            fixed.map(|[u, v]| Vec2::new(u as f32, v as f32))
        })
        .collect()
}

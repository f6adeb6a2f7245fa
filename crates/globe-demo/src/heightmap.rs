//! Synthetic equirectangular heightmaps for exercising elevation sampling.

use std::f64::consts::{PI, TAU};

use image::{GrayImage, Luma};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Build a `width` x `height` heightmap of smooth "continents" plus seeded noise.
///
/// Columns run in longitude and rows in latitude with row 0 at the north
/// pole, matching the mesh's texture coordinates.
pub(crate) fn synthetic_heightmap(width: u32, height: u32, seed: u64) -> GrayImage {
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);

    GrayImage::from_fn(width, height, |x, y| {
        let lon = (f64::from(x) + 0.5) / f64::from(width) * TAU;
        let lat = (0.5 - (f64::from(y) + 0.5) / f64::from(height)) * PI;

        let continents = (3.0 * lon).sin() * (2.0 * lat).cos();
        let noise: f64 = rng.gen_range(-0.1..0.1);
        let level = ((continents * 0.8 + noise) * 0.5 + 0.5).clamp(0.0, 1.0);

        Luma([(level * 255.0).round() as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let img = synthetic_heightmap(16, 8, 1);
        assert_eq!(img.dimensions(), (16, 8));
    }

    #[test]
    fn test_seed_is_reproducible() {
        assert_eq!(synthetic_heightmap(32, 16, 7), synthetic_heightmap(32, 16, 7));
        assert_ne!(synthetic_heightmap(32, 16, 7), synthetic_heightmap(32, 16, 8));
    }
}

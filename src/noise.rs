//! Seeded noise primitives shared by the shape and grain renderers.

use image::{GrayImage, Luma};
use rand::rand_core::RngCore;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::spec::Harmonic;

/// Stream tag for the tip-shape sample stream.
pub const SHAPE_STREAM: u64 = 0x53;

/// Stream tag for the grain-texture sample stream.
pub const GRAIN_STREAM: u64 = 0x47;

/// Derive an independent stream seed from a base seed.
///
/// Shape and grain consume separate streams so the two rasters stay
/// decorrelated while both remain reproducible from one document seed.
pub fn stream_seed(base: u64, stream: u64) -> u64 {
    base ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Fresh seed for unseeded runs.
pub fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    nanos ^ nanos.wrapping_mul(0xBF58_476D_1CE4_E5B9).rotate_left(31)
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Single standard-normal sample via the Box-Muller transform.
#[inline]
pub(crate) fn standard_normal(rng: &mut dyn RngCore) -> f32 {
    // 1 - rand01 lies in (0, 1], keeping the log finite.
    let u1 = 1.0 - rand01(rng);
    let u2 = rand01(rng);
    (-2.0 * u1.ln()).sqrt() * (std::f32::consts::TAU * u2).cos()
}

/// A field of independent normal samples, clipped to the 0-255 intensity
/// domain. Reproducible for a given seed.
pub fn gaussian_field(width: u32, height: u32, mean: f32, std: f32, seed: u64) -> GrayImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut field = GrayImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let sample = mean + std * standard_normal(&mut rng);
            field.put_pixel(x, y, Luma([sample.clamp(0.0, 255.0) as u8]));
        }
    }

    field
}

/// Boundary radius of a harmonic curve at the given angle:
/// `base_radius + sum(amp * sin(freq * angle + phase))`.
///
/// Integer frequencies make the curve closed over `[0, 2pi)`.
pub fn harmonic_boundary(base_radius: f32, harmonics: &[Harmonic], angle: f32) -> f32 {
    harmonics.iter().fold(base_radius, |radius, h| {
        radius + h.amp * (h.freq as f32 * angle + h.phase).sin()
    })
}

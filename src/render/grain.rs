//! Paper grain renderer.
//!
//! The grain is a plain gaussian noise field softened by a small blur;
//! the host application tiles and blends it at stroke time.

use image::GrayImage;

use crate::noise::gaussian_field;
use crate::spec::GrainConfig;

use super::soften;

/// Render the grain texture: a `size` x `size` greyscale raster.
pub fn render_grain(config: &GrainConfig, seed: u64) -> GrayImage {
    let field = gaussian_field(config.size, config.size, config.mean, config.std, seed);
    soften(field, config.blur)
}

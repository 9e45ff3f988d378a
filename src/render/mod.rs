//! Rendering module for silica.
//!
//! Turns a completed brush spec into its three rasters: the tip stamp,
//! the paper grain, and the stroke-preview thumbnail.

mod grain;
mod shape;
mod thumbnail;

pub use grain::render_grain;
pub use shape::render_shape;
pub use thumbnail::{render_thumbnail, THUMBNAIL_EDGE};

use image::GrayImage;

/// Apply a gaussian blur unless the sigma is zero.
pub(crate) fn soften(image: GrayImage, sigma: f32) -> GrayImage {
    if sigma > 0.0 {
        image::imageops::blur(&image, sigma)
    } else {
        image
    }
}

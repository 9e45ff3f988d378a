//! Stroke-preview compositor.
//!
//! Repeats the rendered tip along a diagonal arc on a fixed-size white
//! canvas, tinting each copy and blending with alpha-over accumulation
//! so overlapping stamps read as one stroke.

use std::f32::consts::PI;

use image::imageops::{self, FilterType};
use image::{GrayImage, Rgba, RgbaImage};

use crate::spec::ThumbnailConfig;

/// Preview canvas edge length in pixels, fixed by the host application.
pub const THUMBNAIL_EDGE: u32 = 267;

/// Composite the stroke preview from a rendered tip stamp.
///
/// Output dimensions are fixed regardless of the stamp size; the stamp
/// is resampled to the per-position footprint. A zero stamp count
/// yields the bare background.
pub fn render_thumbnail(stamp: &GrayImage, config: &ThumbnailConfig) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(
        THUMBNAIL_EDGE,
        THUMBNAIL_EDGE,
        Rgba([255, 255, 255, 255]),
    );

    let n = config.n_stamps;
    let [r, g, b] = config.stroke_color;

    for i in 0..n {
        // Sweep from lower-left to upper-right, swelling mid-stroke.
        let t = if n > 1 {
            i as f32 / (n - 1) as f32
        } else {
            0.5
        };
        let cx = (20.0 + t * 227.0) as i64;
        let cy = (247.0 - t * 207.0) as i64;
        let edge = ((18.0 + 10.0 * (PI * t).sin()) as i64).max(1) as u32;

        let mask = imageops::resize(stamp, edge, edge, FilterType::Lanczos3);
        let mut dab = RgbaImage::new(edge, edge);
        for (x, y, pixel) in dab.enumerate_pixels_mut() {
            let coverage = u32::from(mask.get_pixel(x, y)[0]);
            let alpha = (u32::from(config.stamp_alpha) * coverage / 255) as u8;
            *pixel = Rgba([r, g, b, alpha]);
        }

        imageops::overlay(
            &mut canvas,
            &dab,
            cx - i64::from(edge / 2),
            cy - i64::from(edge / 2),
        );
    }

    canvas
}

//! Tip stamp renderer.
//!
//! Produces a square single-channel raster where white is full opacity
//! in the host application. The ellipse variant is a padded, blurred
//! disc; the blob variant evaluates a harmonic boundary per pixel and
//! fills the interior, with optional wet-edge pooling near the rim.

use image::{GrayImage, Luma};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::noise::{harmonic_boundary, standard_normal};
use crate::spec::{BlobShape, EllipseShape, ShapeConfig};

use super::soften;

/// Render the tip stamp for a shape config.
///
/// Always yields a `size` x `size` image; the seed feeds the blob
/// variant's roughness noise and is ignored by the ellipse variant.
pub fn render_shape(config: &ShapeConfig, seed: u64) -> GrayImage {
    match config {
        ShapeConfig::Ellipse(ellipse) => render_ellipse(ellipse),
        ShapeConfig::Blob(blob) => render_blob(blob, seed),
    }
}

fn render_ellipse(shape: &EllipseShape) -> GrayImage {
    let size = shape.size;
    let centre = size as f32 / 2.0;
    // Half-extents after insetting each axis; completion guarantees at
    // least one interior pixel.
    let rx = (size as f32 - 2.0 * shape.padding_x as f32) / 2.0;
    let ry = (size as f32 - 2.0 * shape.padding_y as f32) / 2.0;

    let mut image = GrayImage::new(size, size);
    for y in 0..size {
        for x in 0..size {
            let dx = (x as f32 + 0.5 - centre) / rx;
            let dy = (y as f32 + 0.5 - centre) / ry;
            if dx * dx + dy * dy <= 1.0 {
                image.put_pixel(x, y, Luma([255]));
            }
        }
    }

    soften(image, shape.blur_radius)
}

fn render_blob(shape: &BlobShape, seed: u64) -> GrayImage {
    let size = shape.size;
    let centre = (size / 2) as f32;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut image = GrayImage::new(size, size);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - centre;
            let dy = y as f32 - centre;
            let angle = dy.atan2(dx);
            let dist = (dx * dx + dy * dy).sqrt();

            let radius = harmonic_boundary(shape.base_radius, &shape.harmonics, angle)
                + shape.roughness * standard_normal(&mut rng);
            let nd = dist / radius.max(1.0);

            let alpha = if nd > 1.0 {
                0.0
            } else if shape.wet_edge {
                let inner = (1.0 - nd * 0.55).clamp(0.0, 1.0);
                let ring = ((nd - 0.65) / 0.35).clamp(0.0, 1.0) * 0.55;
                (inner + ring).clamp(0.0, 1.0)
            } else {
                (1.0 - nd).clamp(0.0, 1.0)
            };

            image.put_pixel(x, y, Luma([(alpha * 255.0) as u8]));
        }
    }

    soften(image, shape.blur_radius)
}

//! Completed brush model and document completion.

use super::raw::{RawBrushSpec, RawHarmonic, RawShapeConfig};
use super::shape::{default_harmonics, BlobShape, EllipseShape, Harmonic, ShapeConfig};
use super::{GrainConfig, ThumbnailConfig};

/// Upper bound on any canvas edge, applied before allocation.
pub const MAX_CANVAS_EDGE: u32 = 4096;

/// Upper bound on a gaussian blur sigma; beyond this the kernel cost
/// dwarfs any visible difference.
pub const MAX_BLUR_SIGMA: f32 = 64.0;

/// Upper bound on preview stamp count.
const MAX_PREVIEW_STAMPS: i64 = 512;

/// Default values for brush parameters.
pub struct BrushDefaults;

impl BrushDefaults {
    pub const NAME: &'static str = "Untitled Brush";
    pub const UUID: &'static str = "brush-001";

    pub const SPACING: f64 = 0.08;
    pub const STREAM_LINE: f64 = 0.30;
    pub const JITTER: f64 = 0.015;
    pub const TIP_TYPE: i64 = 1;
    pub const GRAIN_DEPTH: f64 = 0.60;
    pub const OPACITY: f64 = 0.85;
    pub const FLOW: f64 = 0.50;
    pub const PRESSURE_SIZE: f64 = 0.65;
    pub const PRESSURE_OPACITY: f64 = 0.45;
    pub const MAXIMUM_SIZE: f64 = 0.15;
    pub const MINIMUM_SIZE: f64 = 0.02;

    pub const SHAPE_SIZE: i64 = 256;
    pub const PADDING: i64 = 16;
    pub const ELLIPSE_BLUR: f64 = 10.0;
    pub const BASE_RADIUS: f64 = 88.0;
    pub const ROUGHNESS: f64 = 4.0;
    pub const BLOB_BLUR: f64 = 5.0;

    pub const GRAIN_SIZE: i64 = 512;
    pub const GRAIN_MEAN: f64 = 220.0;
    pub const GRAIN_STD: f64 = 25.0;
    pub const GRAIN_BLUR: f64 = 0.7;

    pub const STROKE_COLOR: [u8; 3] = [58, 58, 58];
    pub const STAMP_ALPHA: i64 = 200;
    pub const N_STAMPS: i64 = 12;
}

/// A fully defaulted, clamped brush definition.
///
/// Every field is populated; the renderers and the archive builder never
/// see a missing or out-of-range value.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushSpec {
    /// Display name shown by the host application.
    pub name: String,
    /// Output bundle filename.
    pub output: String,
    /// Random seed; `None` means fresh entropy per run.
    pub seed: Option<u64>,
    pub shape: ShapeConfig,
    pub grain: GrainConfig,
    pub thumbnail: ThumbnailConfig,
    pub stroke: StrokeBehaviour,
}

/// Stroke-time behaviour parameters carried into the bundle metadata.
///
/// Fractional fields are clamped to [0, 1] during completion.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeBehaviour {
    pub spacing: f64,
    pub stream_line: f64,
    pub jitter: f64,
    pub tip_type: i64,
    pub head_taper: bool,
    pub tail_taper: bool,
    pub grain_depth: f64,
    pub grain_mode: i64,
    pub blend_mode: i64,
    pub opacity: f64,
    pub flow: f64,
    pub wet_edges: bool,
    pub pressure_size: f64,
    pub pressure_opacity: f64,
    pub maximum_size: f64,
    pub minimum_size: f64,
    pub uuid: String,
}

impl RawBrushSpec {
    /// Complete a raw document into a renderable spec.
    ///
    /// Total: missing fields take their defaults, out-of-range numbers
    /// are clamped. Type errors were already rejected at parse time.
    pub fn complete(self) -> BrushSpec {
        let name = self.name.unwrap_or_else(|| BrushDefaults::NAME.to_string());
        let output = self
            .output
            .unwrap_or_else(|| format!("{}.brush", name.to_lowercase()));

        let shape = match self.shape {
            Some(raw) => complete_shape(raw),
            None => ShapeConfig::default(),
        };

        let grain = GrainConfig {
            size: clamp_edge(self.grain.size),
            mean: clamp_range(self.grain.mean, 0.0, 255.0) as f32,
            std: clamp_range(self.grain.std, 0.0, 1024.0) as f32,
            blur: clamp_sigma(self.grain.blur),
        };

        let thumbnail = ThumbnailConfig {
            stroke_color: complete_colour(&self.thumbnail.stroke_color),
            stamp_alpha: clamp_byte(self.thumbnail.stamp_alpha),
            n_stamps: self.thumbnail.n_stamps.clamp(0, MAX_PREVIEW_STAMPS) as u32,
        };

        let stroke = StrokeBehaviour {
            spacing: clamp01(self.spacing),
            stream_line: clamp01(self.stream_line),
            jitter: clamp01(self.jitter),
            tip_type: self.tip_type,
            head_taper: self.head_taper,
            tail_taper: self.tail_taper,
            grain_depth: clamp01(self.grain_depth),
            grain_mode: self.grain_mode,
            blend_mode: self.blend_mode,
            opacity: clamp01(self.opacity),
            flow: clamp01(self.flow),
            wet_edges: self.wet_edges,
            pressure_size: clamp01(self.pressure_size),
            pressure_opacity: clamp01(self.pressure_opacity),
            maximum_size: clamp01(self.maximum_size),
            minimum_size: clamp01(self.minimum_size),
            uuid: self.uuid,
        };

        BrushSpec {
            name,
            output,
            seed: self.seed,
            shape,
            grain,
            thumbnail,
            stroke,
        }
    }
}

fn complete_shape(raw: RawShapeConfig) -> ShapeConfig {
    match raw {
        RawShapeConfig::Ellipse(e) => {
            let size = clamp_edge(e.size);
            let pad_x = e.padding_x.unwrap_or(e.padding);
            let pad_y = e.padding_y.unwrap_or(e.padding);
            ShapeConfig::Ellipse(EllipseShape {
                size,
                padding_x: clamp_padding(pad_x, size),
                padding_y: clamp_padding(pad_y, size),
                blur_radius: clamp_sigma(e.blur_radius),
            })
        }
        RawShapeConfig::Blob(b) => {
            let size = clamp_edge(b.size);
            let harmonics = match b.harmonics {
                Some(list) => list.iter().map(complete_harmonic).collect(),
                None => default_harmonics(),
            };
            ShapeConfig::Blob(BlobShape {
                size,
                base_radius: clamp_range(b.base_radius, 0.0, radius_cap()) as f32,
                harmonics,
                roughness: clamp_range(b.roughness, 0.0, radius_cap()) as f32,
                wet_edge: b.wet_edge,
                blur_radius: clamp_sigma(b.blur_radius),
            })
        }
    }
}

fn complete_harmonic(raw: &RawHarmonic) -> Harmonic {
    Harmonic {
        freq: raw.freq.clamp(0, u32::MAX as i64) as u32,
        amp: raw.amp as f32,
        phase: raw.phase as f32,
    }
}

fn complete_colour(raw: &[i64]) -> [u8; 3] {
    let mut colour = BrushDefaults::STROKE_COLOR;
    for (slot, &value) in colour.iter_mut().zip(raw) {
        *slot = clamp_byte(value);
    }
    colour
}

fn clamp_edge(size: i64) -> u32 {
    size.clamp(1, MAX_CANVAS_EDGE as i64) as u32
}

/// Boundary radii beyond twice the maximum canvas never intersect it.
fn radius_cap() -> f64 {
    f64::from(MAX_CANVAS_EDGE) * 2.0
}

/// Per-axis inset must leave at least one pixel of interior.
fn clamp_padding(pad: i64, size: u32) -> u32 {
    let max = (i64::from(size) - 1) / 2;
    pad.clamp(0, max) as u32
}

fn clamp_sigma(v: f64) -> f32 {
    clamp_range(v, 0.0, f64::from(MAX_BLUR_SIGMA)) as f32
}

fn clamp_byte(v: i64) -> u8 {
    v.clamp(0, 255) as u8
}

fn clamp01(v: f64) -> f64 {
    clamp_range(v, 0.0, 1.0)
}

fn clamp_range(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() {
        lo
    } else {
        v.clamp(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{parse_spec, SpecFormat};
    use pretty_assertions::assert_eq;

    fn complete(json: &str) -> BrushSpec {
        parse_spec(json, SpecFormat::Json).unwrap().complete()
    }

    #[test]
    fn test_empty_document_completes_to_defaults() {
        let spec = complete("{}");

        assert_eq!(spec.name, "Untitled Brush");
        assert_eq!(spec.output, "untitled brush.brush");
        assert_eq!(spec.seed, None);
        assert_eq!(
            spec.shape,
            ShapeConfig::Ellipse(EllipseShape {
                size: 256,
                padding_x: 16,
                padding_y: 16,
                blur_radius: 10.0,
            })
        );
        assert_eq!(spec.grain, GrainConfig::default());
        assert_eq!(spec.thumbnail, ThumbnailConfig::default());
        assert_eq!(spec.stroke.spacing, 0.08);
        assert_eq!(spec.stroke.stream_line, 0.30);
        assert_eq!(spec.stroke.jitter, 0.015);
        assert_eq!(spec.stroke.grain_depth, 0.60);
        assert_eq!(spec.stroke.opacity, 0.85);
        assert_eq!(spec.stroke.flow, 0.50);
        assert_eq!(spec.stroke.maximum_size, 0.15);
        assert_eq!(spec.stroke.minimum_size, 0.02);
        assert_eq!(spec.stroke.uuid, "brush-001");
        assert!(spec.stroke.head_taper);
        assert!(spec.stroke.tail_taper);
        assert!(!spec.stroke.wet_edges);
    }

    #[test]
    fn test_output_derived_from_name() {
        let spec = complete(r#"{"name": "Soft Pastel"}"#);
        assert_eq!(spec.output, "soft pastel.brush");
    }

    #[test]
    fn test_explicit_output_wins() {
        let spec = complete(r#"{"name": "Soft Pastel", "output": "pastel.brush"}"#);
        assert_eq!(spec.output, "pastel.brush");
    }

    #[test]
    fn test_fractions_clamped_not_rejected() {
        let spec = complete(r#"{"opacity": 1.5, "flow": -0.2, "spacing": 2.0}"#);
        assert_eq!(spec.stroke.opacity, 1.0);
        assert_eq!(spec.stroke.flow, 0.0);
        assert_eq!(spec.stroke.spacing, 1.0);
    }

    #[test]
    fn test_canvas_edges_clamped() {
        let spec = complete(r#"{"shape": {"size": 0}, "grain": {"size": 1000000}}"#);
        assert_eq!(spec.shape.size(), 1);
        assert_eq!(spec.grain.size, MAX_CANVAS_EDGE);
    }

    #[test]
    fn test_negative_shape_size_clamped_to_single_pixel() {
        let spec = complete(r#"{"shape": {"size": -40, "padding": 16}}"#);
        match spec.shape {
            ShapeConfig::Ellipse(e) => {
                assert_eq!(e.size, 1);
                assert_eq!(e.padding_x, 0);
                assert_eq!(e.padding_y, 0);
            }
            other => panic!("expected ellipse, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_padding_clamped() {
        let spec = complete(r#"{"shape": {"size": 256, "padding": 300}}"#);
        match spec.shape {
            ShapeConfig::Ellipse(e) => {
                // At most (size - 1) / 2, leaving interior pixels.
                assert_eq!(e.padding_x, 127);
                assert_eq!(e.padding_y, 127);
            }
            other => panic!("expected ellipse, got {:?}", other),
        }
    }

    #[test]
    fn test_padding_axis_overrides() {
        let spec = complete(r#"{"shape": {"size": 256, "padding": 16, "padding_x": 96}}"#);
        match spec.shape {
            ShapeConfig::Ellipse(e) => {
                assert_eq!(e.padding_x, 96);
                assert_eq!(e.padding_y, 16);
            }
            other => panic!("expected ellipse, got {:?}", other),
        }
    }

    #[test]
    fn test_blob_defaults_filled() {
        let spec = complete(r#"{"shape": {"type": "blob"}}"#);
        match spec.shape {
            ShapeConfig::Blob(b) => {
                assert_eq!(b.base_radius, 88.0);
                assert_eq!(b.harmonics.len(), 4);
                assert_eq!(b.roughness, 4.0);
                assert!(b.wet_edge);
                assert_eq!(b.blur_radius, 5.0);
            }
            other => panic!("expected blob, got {:?}", other),
        }
    }

    #[test]
    fn test_blob_empty_harmonics_preserved() {
        let spec = complete(r#"{"shape": {"type": "blob", "harmonics": []}}"#);
        match spec.shape {
            ShapeConfig::Blob(b) => assert!(b.harmonics.is_empty()),
            other => panic!("expected blob, got {:?}", other),
        }
    }

    #[test]
    fn test_thumbnail_clamps() {
        let spec = complete(
            r#"{"thumbnail": {"stroke_color": [300, -5], "stamp_alpha": 400, "n_stamps": -3}}"#,
        );
        // Missing third component keeps its default.
        assert_eq!(spec.thumbnail.stroke_color, [255, 0, 58]);
        assert_eq!(spec.thumbnail.stamp_alpha, 255);
        assert_eq!(spec.thumbnail.n_stamps, 0);
    }

    #[test]
    fn test_grain_mean_clamped_to_intensity_domain() {
        let spec = complete(r#"{"grain": {"mean": 400.0, "std": -10.0}}"#);
        assert_eq!(spec.grain.mean, 255.0);
        assert_eq!(spec.grain.std, 0.0);
    }

    #[test]
    fn test_blur_sigma_bounded() {
        let spec = complete(r#"{"shape": {"blur_radius": 1e9}}"#);
        match spec.shape {
            ShapeConfig::Ellipse(e) => assert_eq!(e.blur_radius, MAX_BLUR_SIGMA),
            other => panic!("expected ellipse, got {:?}", other),
        }
    }

    #[test]
    fn test_seed_carried_through() {
        let spec = complete(r#"{"seed": 1234}"#);
        assert_eq!(spec.seed, Some(1234));
    }
}

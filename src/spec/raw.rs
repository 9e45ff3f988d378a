//! Serde document model for brush definitions.
//!
//! Raw types mirror the document schema one-to-one: optional where
//! presence matters (an absent `output` is derived from the name, an
//! absent `padding_x` falls back to `padding`), defaulted otherwise.
//! Values are kept wide (`i64`/`f64`) so out-of-range numbers survive
//! deserialization and can be clamped during completion instead of
//! rejected.

use serde::de::{self, Deserializer};
use serde::Deserialize;

use super::brush::BrushDefaults;

/// A brush definition as written, before defaulting and clamping.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBrushSpec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub shape: Option<RawShapeConfig>,
    #[serde(default)]
    pub grain: RawGrainConfig,
    #[serde(default)]
    pub thumbnail: RawThumbnailConfig,
    #[serde(default = "d_spacing")]
    pub spacing: f64,
    #[serde(default = "d_stream_line", alias = "smoothing")]
    pub stream_line: f64,
    #[serde(default = "d_jitter")]
    pub jitter: f64,
    #[serde(default = "d_tip_type")]
    pub tip_type: i64,
    #[serde(default = "d_true")]
    pub head_taper: bool,
    #[serde(default = "d_true")]
    pub tail_taper: bool,
    #[serde(default = "d_grain_depth")]
    pub grain_depth: f64,
    #[serde(default)]
    pub grain_mode: i64,
    #[serde(default)]
    pub blend_mode: i64,
    #[serde(default = "d_opacity")]
    pub opacity: f64,
    #[serde(default = "d_flow")]
    pub flow: f64,
    #[serde(default)]
    pub wet_edges: bool,
    #[serde(default = "d_pressure_size")]
    pub pressure_size: f64,
    #[serde(default = "d_pressure_opacity")]
    pub pressure_opacity: f64,
    #[serde(default = "d_maximum_size")]
    pub maximum_size: f64,
    #[serde(default = "d_minimum_size")]
    pub minimum_size: f64,
    #[serde(default = "d_uuid")]
    pub uuid: String,
}

impl Default for RawBrushSpec {
    fn default() -> Self {
        Self {
            name: None,
            output: None,
            seed: None,
            shape: None,
            grain: RawGrainConfig::default(),
            thumbnail: RawThumbnailConfig::default(),
            spacing: d_spacing(),
            stream_line: d_stream_line(),
            jitter: d_jitter(),
            tip_type: d_tip_type(),
            head_taper: true,
            tail_taper: true,
            grain_depth: d_grain_depth(),
            grain_mode: 0,
            blend_mode: 0,
            opacity: d_opacity(),
            flow: d_flow(),
            wet_edges: false,
            pressure_size: d_pressure_size(),
            pressure_opacity: d_pressure_opacity(),
            maximum_size: d_maximum_size(),
            minimum_size: d_minimum_size(),
            uuid: d_uuid(),
        }
    }
}

/// Raw tip shape, dispatched on the `type` discriminant.
///
/// The discriminant defaults to `ellipse` when absent; an unrecognized
/// value is a hard validation error. Fields belonging to the other
/// variant are ignored.
#[derive(Debug, Clone)]
pub enum RawShapeConfig {
    Ellipse(RawEllipseShape),
    Blob(RawBlobShape),
}

impl<'de> Deserialize<'de> for RawShapeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;

        let kind = match value.get("type") {
            None => "ellipse".to_string(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "shape.type must be a string, got {}",
                    other
                )))
            }
        };

        match kind.as_str() {
            "ellipse" => serde_json::from_value(value)
                .map(RawShapeConfig::Ellipse)
                .map_err(|e| de::Error::custom(format!("shape: {}", e))),
            "blob" => serde_json::from_value(value)
                .map(RawShapeConfig::Blob)
                .map_err(|e| de::Error::custom(format!("shape: {}", e))),
            other => Err(de::Error::custom(format!(
                "unknown shape.type '{}': expected 'ellipse' or 'blob'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEllipseShape {
    #[serde(default = "d_shape_size")]
    pub size: i64,
    #[serde(default = "d_padding")]
    pub padding: i64,
    #[serde(default)]
    pub padding_x: Option<i64>,
    #[serde(default)]
    pub padding_y: Option<i64>,
    #[serde(default = "d_ellipse_blur")]
    pub blur_radius: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBlobShape {
    #[serde(default = "d_shape_size")]
    pub size: i64,
    #[serde(default = "d_base_radius")]
    pub base_radius: f64,
    #[serde(default)]
    pub harmonics: Option<Vec<RawHarmonic>>,
    #[serde(default = "d_roughness")]
    pub roughness: f64,
    #[serde(default = "d_true")]
    pub wet_edge: bool,
    #[serde(default = "d_blob_blur")]
    pub blur_radius: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawHarmonic {
    #[serde(default)]
    pub freq: i64,
    #[serde(default)]
    pub amp: f64,
    #[serde(default)]
    pub phase: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGrainConfig {
    #[serde(default = "d_grain_size")]
    pub size: i64,
    #[serde(default = "d_grain_mean")]
    pub mean: f64,
    #[serde(default = "d_grain_std")]
    pub std: f64,
    #[serde(default = "d_grain_blur")]
    pub blur: f64,
}

impl Default for RawGrainConfig {
    fn default() -> Self {
        Self {
            size: d_grain_size(),
            mean: d_grain_mean(),
            std: d_grain_std(),
            blur: d_grain_blur(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawThumbnailConfig {
    #[serde(default = "d_stroke_color")]
    pub stroke_color: Vec<i64>,
    #[serde(default = "d_stamp_alpha")]
    pub stamp_alpha: i64,
    #[serde(default = "d_n_stamps")]
    pub n_stamps: i64,
}

impl Default for RawThumbnailConfig {
    fn default() -> Self {
        Self {
            stroke_color: d_stroke_color(),
            stamp_alpha: d_stamp_alpha(),
            n_stamps: d_n_stamps(),
        }
    }
}

fn d_true() -> bool {
    true
}

fn d_spacing() -> f64 {
    BrushDefaults::SPACING
}

fn d_stream_line() -> f64 {
    BrushDefaults::STREAM_LINE
}

fn d_jitter() -> f64 {
    BrushDefaults::JITTER
}

fn d_tip_type() -> i64 {
    BrushDefaults::TIP_TYPE
}

fn d_grain_depth() -> f64 {
    BrushDefaults::GRAIN_DEPTH
}

fn d_opacity() -> f64 {
    BrushDefaults::OPACITY
}

fn d_flow() -> f64 {
    BrushDefaults::FLOW
}

fn d_pressure_size() -> f64 {
    BrushDefaults::PRESSURE_SIZE
}

fn d_pressure_opacity() -> f64 {
    BrushDefaults::PRESSURE_OPACITY
}

fn d_maximum_size() -> f64 {
    BrushDefaults::MAXIMUM_SIZE
}

fn d_minimum_size() -> f64 {
    BrushDefaults::MINIMUM_SIZE
}

fn d_uuid() -> String {
    BrushDefaults::UUID.to_string()
}

fn d_shape_size() -> i64 {
    BrushDefaults::SHAPE_SIZE
}

fn d_padding() -> i64 {
    BrushDefaults::PADDING
}

fn d_ellipse_blur() -> f64 {
    BrushDefaults::ELLIPSE_BLUR
}

fn d_base_radius() -> f64 {
    BrushDefaults::BASE_RADIUS
}

fn d_roughness() -> f64 {
    BrushDefaults::ROUGHNESS
}

fn d_blob_blur() -> f64 {
    BrushDefaults::BLOB_BLUR
}

fn d_grain_size() -> i64 {
    BrushDefaults::GRAIN_SIZE
}

fn d_grain_mean() -> f64 {
    BrushDefaults::GRAIN_MEAN
}

fn d_grain_std() -> f64 {
    BrushDefaults::GRAIN_STD
}

fn d_grain_blur() -> f64 {
    BrushDefaults::GRAIN_BLUR
}

fn d_stroke_color() -> Vec<i64> {
    BrushDefaults::STROKE_COLOR.iter().map(|&c| c as i64).collect()
}

fn d_stamp_alpha() -> i64 {
    BrushDefaults::STAMP_ALPHA
}

fn d_n_stamps() -> i64 {
    BrushDefaults::N_STAMPS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RawBrushSpec {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_document_gets_defaults() {
        let raw = parse("{}");
        assert_eq!(raw.spacing, BrushDefaults::SPACING);
        assert_eq!(raw.stream_line, BrushDefaults::STREAM_LINE);
        assert_eq!(raw.uuid, BrushDefaults::UUID);
        assert!(raw.head_taper);
        assert!(raw.tail_taper);
        assert!(!raw.wet_edges);
        assert_eq!(raw.grain.size, 512);
        assert_eq!(raw.thumbnail.n_stamps, 12);
    }

    #[test]
    fn test_smoothing_alias() {
        let raw = parse(r#"{"smoothing": 0.5}"#);
        assert_eq!(raw.stream_line, 0.5);
        let raw = parse(r#"{"stream_line": 0.7}"#);
        assert_eq!(raw.stream_line, 0.7);
    }

    #[test]
    fn test_shape_type_defaults_to_ellipse() {
        let raw = parse(r#"{"shape": {"size": 64}}"#);
        match raw.shape {
            Some(RawShapeConfig::Ellipse(e)) => assert_eq!(e.size, 64),
            other => panic!("expected ellipse, got {:?}", other),
        }
    }

    #[test]
    fn test_blob_shape_parses() {
        let raw = parse(
            r#"{"shape": {"type": "blob", "base_radius": 40.0,
                "harmonics": [{"freq": 3, "amp": 2.0, "phase": 0.5}],
                "roughness": 1.0, "wet_edge": false}}"#,
        );
        match raw.shape {
            Some(RawShapeConfig::Blob(b)) => {
                assert_eq!(b.base_radius, 40.0);
                assert_eq!(b.harmonics.as_ref().map(Vec::len), Some(1));
                assert!(!b.wet_edge);
            }
            other => panic!("expected blob, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_shape_type_rejected() {
        let err = serde_json::from_str::<RawBrushSpec>(r#"{"shape": {"type": "square"}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("square"));
    }

    #[test]
    fn test_non_string_shape_type_rejected() {
        let err =
            serde_json::from_str::<RawBrushSpec>(r#"{"shape": {"type": 7}}"#).unwrap_err();
        assert!(err.to_string().contains("must be a string"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let raw = parse(r#"{"favourite_animal": "wombat", "opacity": 0.4}"#);
        assert_eq!(raw.opacity, 0.4);
    }

    #[test]
    fn test_inactive_variant_fields_ignored() {
        // Blob-only keys on an ellipse document are simply dropped.
        let raw = parse(r#"{"shape": {"type": "ellipse", "base_radius": 1000.0}}"#);
        match raw.shape {
            Some(RawShapeConfig::Ellipse(e)) => assert_eq!(e.size, BrushDefaults::SHAPE_SIZE),
            other => panic!("expected ellipse, got {:?}", other),
        }
    }
}

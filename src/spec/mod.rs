//! Brush definition documents.
//!
//! A brush is described by a single JSON or YAML document. Parsing is
//! two-stage: the text is first read into a generic value (failures here
//! are parse errors), then deserialized into [`RawBrushSpec`] (failures
//! here are validation errors: a wrong type for a field, or an unknown
//! `shape.type`). [`RawBrushSpec::complete`] then fills every missing
//! field with its documented default and clamps out-of-range numbers,
//! producing the [`BrushSpec`] the renderers consume.

mod brush;
mod grain;
mod raw;
mod shape;
mod thumbnail;

pub use brush::{BrushDefaults, BrushSpec, StrokeBehaviour, MAX_BLUR_SIGMA, MAX_CANVAS_EDGE};
pub use grain::GrainConfig;
pub use raw::{
    RawBlobShape, RawBrushSpec, RawEllipseShape, RawGrainConfig, RawHarmonic, RawShapeConfig,
    RawThumbnailConfig,
};
pub use shape::{BlobShape, EllipseShape, Harmonic, ShapeConfig};
pub use thumbnail::ThumbnailConfig;

use std::fs;
use std::path::Path;

use crate::error::{Result, SilicaError};

/// Source format of a brush definition document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Json,
    Yaml,
}

impl SpecFormat {
    /// Pick a format from a file extension. Anything that isn't YAML is
    /// treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => SpecFormat::Yaml,
            _ => SpecFormat::Json,
        }
    }
}

/// Parse a brush definition from source text.
pub fn parse_spec(source: &str, format: SpecFormat) -> Result<RawBrushSpec> {
    let value: serde_json::Value = match format {
        SpecFormat::Json => serde_json::from_str(source).map_err(|e| SilicaError::Parse {
            message: format!("Invalid JSON: {}", e),
            help: None,
        })?,
        SpecFormat::Yaml => serde_yaml::from_str(source).map_err(|e| SilicaError::Parse {
            message: format!("Invalid YAML: {}", e),
            help: None,
        })?,
    };

    serde_json::from_value(value).map_err(|e| SilicaError::Validation {
        message: e.to_string(),
        help: Some("Check field types against the brush spec schema".to_string()),
    })
}

/// Load a brush definition from a file, picking the format by extension.
pub fn load_spec(path: &Path) -> Result<RawBrushSpec> {
    let source = fs::read_to_string(path).map_err(|e| SilicaError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    parse_spec(&source, SpecFormat::from_path(path))
}

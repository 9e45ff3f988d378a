//! silica - Procreate brush bundle generator
//!
//! A library for turning declarative brush definitions into `.brush`
//! bundles: a procedurally rendered tip stamp, paper grain, and stroke
//! preview packed alongside binary SilicaBrush metadata.

pub mod archive;
pub mod cli;
pub mod error;
pub mod noise;
pub mod output;
pub mod render;
pub mod spec;
pub mod validation;

pub use archive::{brush_archive, BrushBundle};
pub use error::{Result, SilicaError};
pub use noise::{entropy_seed, gaussian_field, harmonic_boundary, stream_seed, GRAIN_STREAM, SHAPE_STREAM};
pub use render::{render_grain, render_shape, render_thumbnail, THUMBNAIL_EDGE};
pub use spec::{
    load_spec, parse_spec, BlobShape, BrushDefaults, BrushSpec, EllipseShape, GrainConfig,
    Harmonic, RawBrushSpec, ShapeConfig, SpecFormat, StrokeBehaviour, ThumbnailConfig,
    MAX_CANVAS_EDGE,
};
pub use validation::{lint_spec, Diagnostic, Severity, ValidationResult};

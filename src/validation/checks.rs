//! Lint checks for raw brush definitions.
//!
//! Each check takes a `&RawBrushSpec` and returns a `ValidationResult`.
//! Checks never fail a build: completion clamps everything they flag.
//! They exist so authors learn what the pipeline adjusted.

use crate::spec::{RawBrushSpec, RawShapeConfig, MAX_CANVAS_EDGE};

use super::warning::{Diagnostic, ValidationResult};

/// Flag fractional parameters outside [0, 1].
pub fn check_fraction_ranges(raw: &RawBrushSpec) -> ValidationResult {
    let mut result = ValidationResult::new();

    let fractions = [
        ("spacing", raw.spacing),
        ("stream_line", raw.stream_line),
        ("jitter", raw.jitter),
        ("grain_depth", raw.grain_depth),
        ("opacity", raw.opacity),
        ("flow", raw.flow),
        ("pressure_size", raw.pressure_size),
        ("pressure_opacity", raw.pressure_opacity),
        ("maximum_size", raw.maximum_size),
        ("minimum_size", raw.minimum_size),
    ];

    for (name, value) in fractions {
        if !(0.0..=1.0).contains(&value) {
            result.push(Diagnostic::warning(
                "silica::lint::clamped-range",
                format!("'{}' is {}, outside [0, 1]; it will be clamped", name, value),
            ));
        }
    }

    result
}

/// Flag canvas edges the pipeline will clamp before allocating.
pub fn check_canvas_bounds(raw: &RawBrushSpec) -> ValidationResult {
    let mut result = ValidationResult::new();

    let mut check_edge = |field: &str, size: i64| {
        if size < 1 || size > i64::from(MAX_CANVAS_EDGE) {
            result.push(
                Diagnostic::warning(
                    "silica::lint::canvas-bounds",
                    format!(
                        "'{}' is {}, outside [1, {}]; it will be clamped",
                        field, size, MAX_CANVAS_EDGE
                    ),
                )
                .with_help("Typical tips are 256, grains 512".to_string()),
            );
        }
    };

    match &raw.shape {
        Some(RawShapeConfig::Ellipse(e)) => check_edge("shape.size", e.size),
        Some(RawShapeConfig::Blob(b)) => check_edge("shape.size", b.size),
        None => {}
    }
    check_edge("grain.size", raw.grain.size);

    result
}

/// Flag ellipse insets that collapse the footprint.
pub fn check_ellipse_geometry(raw: &RawBrushSpec) -> ValidationResult {
    let mut result = ValidationResult::new();

    let Some(RawShapeConfig::Ellipse(e)) = &raw.shape else {
        return result;
    };

    let pads = [
        ("padding_x", e.padding_x.unwrap_or(e.padding)),
        ("padding_y", e.padding_y.unwrap_or(e.padding)),
    ];
    for (axis, pad) in pads {
        if e.size > 0 && pad * 2 >= e.size {
            result.push(
                Diagnostic::warning(
                    "silica::lint::degenerate-footprint",
                    format!(
                        "'{}' of {} leaves no interior on a {} px canvas; the inset will be reduced",
                        axis, pad, e.size
                    ),
                )
                .with_help("Keep padding below half the canvas edge".to_string()),
            );
        }
    }

    result
}

/// Flag blob boundaries that degenerate to a circle or outgrow the canvas.
pub fn check_blob_boundary(raw: &RawBrushSpec) -> ValidationResult {
    let mut result = ValidationResult::new();

    let Some(RawShapeConfig::Blob(b)) = &raw.shape else {
        return result;
    };

    if b.harmonics.as_ref().is_some_and(|h| h.is_empty()) && b.roughness <= 0.0 {
        result.push(Diagnostic::warning(
            "silica::lint::flat-boundary",
            "blob has no harmonics and no roughness; the tip will be a plain disc",
        ));
    }

    if b.base_radius * 2.0 > b.size.max(1) as f64 {
        result.push(Diagnostic::warning(
            "silica::lint::boundary-overflow",
            format!(
                "base_radius {} does not fit a {} px canvas; the boundary will be cropped",
                b.base_radius, b.size
            ),
        ));
    }

    result
}

/// Flag preview settings that produce an empty or clamped thumbnail.
pub fn check_thumbnail(raw: &RawBrushSpec) -> ValidationResult {
    let mut result = ValidationResult::new();
    let thumb = &raw.thumbnail;

    if thumb.n_stamps <= 0 {
        result.push(Diagnostic::warning(
            "silica::lint::blank-preview",
            format!(
                "n_stamps is {}; the preview will show only the background",
                thumb.n_stamps
            ),
        ));
    }

    if !(0..=255).contains(&thumb.stamp_alpha) {
        result.push(Diagnostic::warning(
            "silica::lint::clamped-range",
            format!(
                "stamp_alpha is {}, outside [0, 255]; it will be clamped",
                thumb.stamp_alpha
            ),
        ));
    }

    if thumb.stroke_color.len() != 3 {
        result.push(Diagnostic::warning(
            "silica::lint::stroke-colour",
            format!(
                "stroke_color has {} components, expected 3; missing ones keep their defaults",
                thumb.stroke_color.len()
            ),
        ));
    }

    result
}

/// Flag output names the host application will not recognize.
pub fn check_output_name(raw: &RawBrushSpec) -> ValidationResult {
    let mut result = ValidationResult::new();

    if let Some(output) = &raw.output {
        if !output.ends_with(".brush") {
            result.push(
                Diagnostic::warning(
                    "silica::lint::output-extension",
                    format!("output '{}' does not end in .brush", output),
                )
                .with_help("The host application imports .brush bundles".to_string()),
            );
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{parse_spec, SpecFormat};

    fn raw(json: &str) -> RawBrushSpec {
        parse_spec(json, SpecFormat::Json).unwrap()
    }

    #[test]
    fn test_clean_spec_passes_all_checks() {
        let spec = raw(r#"{"name": "Pencil", "output": "pencil.brush"}"#);
        assert!(check_fraction_ranges(&spec).is_ok());
        assert!(check_canvas_bounds(&spec).is_ok());
        assert!(check_ellipse_geometry(&spec).is_ok());
        assert!(check_blob_boundary(&spec).is_ok());
        assert!(check_thumbnail(&spec).is_ok());
        assert!(check_output_name(&spec).is_ok());
    }

    #[test]
    fn test_out_of_range_fraction_flagged() {
        let spec = raw(r#"{"opacity": 1.5, "flow": -0.2}"#);
        let result = check_fraction_ranges(&spec);
        assert_eq!(result.warning_count(), 2);
    }

    #[test]
    fn test_oversized_canvas_flagged() {
        let spec = raw(r#"{"shape": {"size": 100000}}"#);
        let result = check_canvas_bounds(&spec);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_degenerate_padding_flagged() {
        let spec = raw(r#"{"shape": {"size": 64, "padding": 32}}"#);
        let result = check_ellipse_geometry(&spec);
        assert_eq!(result.warning_count(), 2);
    }

    #[test]
    fn test_padding_override_checked_per_axis() {
        let spec = raw(r#"{"shape": {"size": 64, "padding": 8, "padding_y": 40}}"#);
        let result = check_ellipse_geometry(&spec);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_featureless_blob_flagged() {
        let spec = raw(r#"{"shape": {"type": "blob", "harmonics": [], "roughness": 0}}"#);
        let result = check_blob_boundary(&spec);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_blob_default_harmonics_not_flagged() {
        let spec = raw(r#"{"shape": {"type": "blob", "roughness": 0}}"#);
        assert!(check_blob_boundary(&spec).is_ok());
    }

    #[test]
    fn test_overflowing_base_radius_flagged() {
        let spec = raw(r#"{"shape": {"type": "blob", "size": 128, "base_radius": 100.0}}"#);
        let result = check_blob_boundary(&spec);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_blank_preview_flagged() {
        let spec = raw(r#"{"thumbnail": {"n_stamps": 0}}"#);
        let result = check_thumbnail(&spec);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_short_stroke_colour_flagged() {
        let spec = raw(r#"{"thumbnail": {"stroke_color": [1, 2]}}"#);
        let result = check_thumbnail(&spec);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_odd_output_extension_flagged() {
        let spec = raw(r#"{"output": "pencil.zip"}"#);
        let result = check_output_name(&spec);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_derived_output_not_flagged() {
        let spec = raw(r#"{"name": "Pencil"}"#);
        assert!(check_output_name(&spec).is_ok());
    }
}

//! Lint system for brush definitions.
//!
//! Runs a suite of checks against a parsed (pre-completion) definition
//! and reports what completion will adjust. Used by both `silica
//! validate` and `silica build`; warnings never block a build.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::Printer;
use crate::spec::RawBrushSpec;

/// Run all lint checks against a raw brush definition.
pub fn lint_spec(raw: &RawBrushSpec) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_fraction_ranges(raw));
    result.merge(checks::check_canvas_bounds(raw));
    result.merge(checks::check_ellipse_geometry(raw));
    result.merge(checks::check_blob_boundary(raw));
    result.merge(checks::check_thumbnail(raw));
    result.merge(checks::check_output_name(raw));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let is_error = d.severity == Severity::Error;
        let label = printer.severity(&d.severity.to_string(), is_error);
        eprintln!("  {}[{}]: {}", label, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{parse_spec, SpecFormat};

    #[test]
    fn test_default_spec_lints_clean() {
        let raw = RawBrushSpec::default();
        assert!(lint_spec(&raw).is_ok());
    }

    #[test]
    fn test_lint_aggregates_across_checks() {
        let raw = parse_spec(
            r#"{
                "opacity": 2.0,
                "output": "pencil.zip",
                "shape": {"size": 100000},
                "thumbnail": {"n_stamps": 0}
            }"#,
            SpecFormat::Json,
        )
        .unwrap();

        let result = lint_spec(&raw);
        assert!(result.has_warnings());
        assert!(result.warning_count() >= 4);
        assert!(!result.has_errors());
    }
}

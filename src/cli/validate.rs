//! Validate command implementation.
//!
//! Parses and lints definition files without rendering anything.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, SilicaError};
use crate::output::{display_path, plural, Printer};
use crate::spec::load_spec;
use crate::validation::{lint_spec, print_diagnostics};

/// Validate definition files without rendering
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Definition files to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let mut failures = 0;
    let mut warnings = 0;

    for file in &args.files {
        match load_spec(file) {
            Ok(raw) => {
                let lint = lint_spec(&raw);
                let spec = raw.complete();
                printer.status(
                    "Validated",
                    &format!("{} ({})", display_path(file), spec.name),
                );
                if !lint.is_ok() {
                    print_diagnostics(&lint, printer);
                    warnings += lint.warning_count();
                }
            }
            Err(err) => {
                failures += 1;
                printer.error("Invalid", &format!("{}: {}", display_path(file), err));
            }
        }
    }

    if failures > 0 {
        return Err(SilicaError::Validation {
            message: format!(
                "{} failed validation",
                plural(failures, "definition", "definitions")
            ),
            help: None,
        });
    }

    if warnings > 0 {
        printer.warning(
            "Passed",
            &format!("with {}", plural(warnings, "warning", "warnings")),
        );
    } else {
        printer.success("Passed", &plural(args.files.len(), "definition", "definitions"));
    }

    Ok(())
}

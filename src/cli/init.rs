//! Init command implementation.
//!
//! Writes a starter brush definition to build on.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, SilicaError};
use crate::output::{display_path, Printer};

/// Filename written by `silica init`.
pub const STARTER_FILENAME: &str = "brush.json";

/// A soft graphite pencil: ellipse tip, papery grain.
const STARTER_SPEC: &str = r#"{
  "name": "Pencil",
  "output": "pencil.brush",
  "shape": { "type": "ellipse", "size": 256, "padding": 16, "blur_radius": 10 },
  "grain": { "size": 512, "mean": 220, "std": 25, "blur": 0.7 },
  "thumbnail": { "stroke_color": [58, 58, 58], "stamp_alpha": 200, "n_stamps": 12 },
  "spacing": 0.08,
  "stream_line": 0.3,
  "jitter": 0.015,
  "grain_depth": 0.6,
  "opacity": 0.85,
  "flow": 0.5,
  "pressure_size": 0.65,
  "pressure_opacity": 0.45,
  "maximum_size": 0.15,
  "minimum_size": 0.02
}
"#;

/// Write a starter brush definition
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the definition into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing definition
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let spec_path = args.path.join(STARTER_FILENAME);

    if spec_path.exists() && !args.force {
        return Err(SilicaError::Io {
            path: spec_path,
            message: format!("{} already exists (use --force to overwrite)", STARTER_FILENAME),
        });
    }

    fs::write(&spec_path, STARTER_SPEC).map_err(|e| SilicaError::Io {
        path: spec_path.clone(),
        message: format!("Failed to write definition: {}", e),
    })?;

    printer.success("Created", &display_path(&spec_path));
    printer.info("Next", &format!("silica build {}", display_path(&spec_path)));

    Ok(())
}

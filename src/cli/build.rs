//! Build command implementation.
//!
//! Runs the full pipeline per definition file: load and complete the
//! document, render the three rasters, and package the bundle.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::archive::BrushBundle;
use crate::error::{Result, SilicaError};
use crate::noise::{entropy_seed, stream_seed, GRAIN_STREAM, SHAPE_STREAM};
use crate::output::{display_path, plural, Printer};
use crate::render::{render_grain, render_shape, render_thumbnail};
use crate::spec::load_spec;
use crate::validation::{lint_spec, print_diagnostics};

/// Build .brush bundles from brush definition files
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Definition files to process (JSON or YAML)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output directory for bundles
    #[arg(long, short, default_value = ".")]
    pub output: PathBuf,

    /// Override the random seed for reproducible bundles
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| SilicaError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    for file in &args.files {
        build_one(file, &args, printer)?;
    }

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(args.files.len(), "brush", "brushes"),
            display_path(&args.output)
        ),
    );

    Ok(())
}

fn build_one(file: &Path, args: &BuildArgs, printer: &Printer) -> Result<()> {
    let raw = load_spec(file)?;

    let lint = lint_spec(&raw);
    if !lint.is_ok() {
        printer.warning("Adjusting", &display_path(file));
        print_diagnostics(&lint, printer);
    }

    let spec = raw.complete();
    let seed = args.seed.or(spec.seed).unwrap_or_else(entropy_seed);

    printer.status(
        "Rendering",
        &format!(
            "{} ({} tip, {}x{} px)",
            spec.name,
            spec.shape.type_name(),
            spec.shape.size(),
            spec.shape.size()
        ),
    );
    let shape = render_shape(&spec.shape, stream_seed(seed, SHAPE_STREAM));
    let grain = render_grain(&spec.grain, stream_seed(seed, GRAIN_STREAM));
    let thumbnail = render_thumbnail(&shape, &spec.thumbnail);

    let bundle = BrushBundle::assemble(&spec, &shape, &grain, &thumbnail)?;
    let dest = args.output.join(&spec.output);
    bundle.write_to(&dest)?;

    printer.status(
        "Packaged",
        &format!(
            "{} ({} bytes uncompressed)",
            display_path(&dest),
            bundle.uncompressed_len()
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn quiet() -> Printer {
        Printer::new()
    }

    #[test]
    fn test_build_writes_bundle() {
        let dir = tempdir().unwrap();
        let spec_path = dir.path().join("pencil.json");
        let output_dir = dir.path().join("out");

        fs::write(
            &spec_path,
            r#"{
                "name": "Pencil",
                "output": "pencil.brush",
                "seed": 7,
                "shape": {"type": "ellipse", "size": 64, "padding": 8, "blur_radius": 2},
                "grain": {"size": 64, "mean": 220, "std": 25, "blur": 0.5}
            }"#,
        )
        .unwrap();

        let args = BuildArgs {
            files: vec![spec_path],
            output: output_dir.clone(),
            seed: None,
        };

        run(args, &quiet()).unwrap();

        assert!(output_dir.join("pencil.brush").exists());
    }

    #[test]
    fn test_build_derives_output_from_name() {
        let dir = tempdir().unwrap();
        let spec_path = dir.path().join("spec.json");

        fs::write(
            &spec_path,
            r#"{"name": "Marker", "seed": 1,
                "shape": {"size": 32, "padding": 4, "blur_radius": 1},
                "grain": {"size": 32}}"#,
        )
        .unwrap();

        let args = BuildArgs {
            files: vec![spec_path],
            output: dir.path().join("out"),
            seed: None,
        };

        run(args, &quiet()).unwrap();

        assert!(dir.path().join("out").join("marker.brush").exists());
    }

    #[test]
    fn test_build_seed_override_is_reproducible() {
        let dir = tempdir().unwrap();
        let spec_path = dir.path().join("spec.json");
        fs::write(
            &spec_path,
            r#"{"name": "Chalk",
                "shape": {"type": "blob", "size": 48},
                "grain": {"size": 48}}"#,
        )
        .unwrap();

        let build = |out: PathBuf| {
            let args = BuildArgs {
                files: vec![spec_path.clone()],
                output: out,
                seed: Some(99),
            };
            run(args, &quiet()).unwrap();
        };

        build(dir.path().join("a"));
        build(dir.path().join("b"));

        let a = fs::read(dir.path().join("a").join("chalk.brush")).unwrap();
        let b = fs::read(dir.path().join("b").join("chalk.brush")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_build_accepts_yaml_definition() {
        let dir = tempdir().unwrap();
        let spec_path = dir.path().join("crayon.yaml");
        fs::write(
            &spec_path,
            "name: Crayon\nseed: 3\nshape:\n  size: 32\ngrain:\n  size: 32\n",
        )
        .unwrap();

        let args = BuildArgs {
            files: vec![spec_path],
            output: dir.path().join("out"),
            seed: None,
        };

        run(args, &quiet()).unwrap();
        assert!(dir.path().join("out").join("crayon.brush").exists());
    }

    #[test]
    fn test_build_missing_file_fails() {
        let dir = tempdir().unwrap();
        let args = BuildArgs {
            files: vec![dir.path().join("absent.json")],
            output: dir.path().to_path_buf(),
            seed: None,
        };

        let err = run(args, &quiet()).unwrap_err();
        assert!(matches!(err, SilicaError::Io { .. }));
    }

    #[test]
    fn test_build_malformed_spec_fails_without_output() {
        let dir = tempdir().unwrap();
        let spec_path = dir.path().join("broken.json");
        fs::write(&spec_path, "{nope").unwrap();

        let out = dir.path().join("out");
        let args = BuildArgs {
            files: vec![spec_path],
            output: out.clone(),
            seed: None,
        };

        let err = run(args, &quiet()).unwrap_err();
        assert!(matches!(err, SilicaError::Parse { .. }));
        let entries: Vec<_> = fs::read_dir(&out).unwrap().collect();
        assert!(entries.is_empty());
    }
}

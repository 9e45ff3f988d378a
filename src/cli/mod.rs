pub mod build;
pub mod init;
pub mod validate;

use clap::{Parser, Subcommand};

/// silica - Procreate brush bundle generator
#[derive(Parser, Debug)]
#[command(name = "silica")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build .brush bundles from brush definition files
    Build(build::BuildArgs),

    /// Write a starter brush definition
    Init(init::InitArgs),

    /// Validate definition files without rendering
    Validate(validate::ValidateArgs),
}

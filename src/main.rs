use clap::Parser;
use miette::Result;
use silica::cli::{Cli, Commands};
use silica::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => silica::cli::build::run(args, &printer)?,
        Commands::Init(args) => silica::cli::init::run(args, &printer)?,
        Commands::Validate(args) => silica::cli::validate::run(args, &printer)?,
    }

    Ok(())
}

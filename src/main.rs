use anyhow::{bail, Context, Result};
use clap::Parser;
use pysig::log_error;
use pysig::utils::logging::{self, Verbosity};
use std::path::PathBuf;
use std::process;

/// Print the signature of a Python source file without executing it
#[derive(Parser)]
#[command(name = "pysig", version, about)]
struct Cli {
    /// Path to the Python file to analyze
    file: PathBuf,

    /// Emit the signature as JSON instead of the human-readable dump
    #[arg(long)]
    json: bool,

    /// Show verbose progress output
    #[arg(short, long)]
    verbose: bool,

    /// Show debug output
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.debug));

    if let Err(err) = run(&cli) {
        log_error!("{err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.file.is_file() {
        bail!("file does not exist: {}", cli.file.display());
    }

    let result = pysig::analyze_file(&cli.file)
        .with_context(|| format!("failed to analyze {}", cli.file.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result.signature)?);
        return Ok(());
    }

    println!("Imports:");
    println!("{:#?}", result.signature.imports);
    println!("---");
    println!("Functions:");
    println!("{:#?}", result.signature.functions);
    println!("---");
    println!("Classes:");
    println!("{:#?}", result.signature.classes);

    Ok(())
}

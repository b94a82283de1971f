//! Cobotics: static site build for the Cobotics4All page.
//!
//! # Usage
//!
//! ```text
//! cobotics                      # same as `cobotics build`
//! cobotics build [--dry-run]
//! cobotics check [--json]
//! cobotics diff
//!
//! global: [--root <dir>] [--data-dir <dir>] [--template-dir <dir>]
//!         [--template <name>] [--output <file>] [-v]
//! ```

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use cobotics_core::DataError;
use commands::{build::BuildArgs, check::CheckArgs, diff::DiffArgs, PathArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "cobotics",
    version,
    about = "Render the Cobotics4All site from YAML content",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    paths: PathArgs,

    /// Log pipeline detail to stderr (same as RUST_LOG=debug).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load data, render the template and write the page (default).
    Build(BuildArgs),

    /// Validate data files and template without writing the page.
    Check(CheckArgs),

    /// Show a unified diff of what build would change in the page.
    Diff(DiffArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.paths.to_config();
    let result = match cli.command {
        None => BuildArgs::default().run(&config),
        Some(Commands::Build(args)) => args.run(&config),
        Some(Commands::Check(args)) => args.run(&config),
        Some(Commands::Diff(args)) => args.run(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "❌ Error:".red().bold(), error_message(&err));
            ExitCode::FAILURE
        }
    }
}

/// A missing data file gets the dedicated message; everything else prints the
/// full cause chain.
fn error_message(err: &anyhow::Error) -> String {
    let missing = err.chain().find_map(|e| match e.downcast_ref::<DataError>() {
        Some(DataError::NotFound { path }) => Some(path.display().to_string()),
        _ => None,
    });
    match missing {
        Some(path) => format!("Could not find data file: {path}"),
        None => format!("{err:#}"),
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

//! Migration checker CLI - validates Rails-style migrations in CI
//!
//! Behaviour is driven by environment variables (see `migcheck_core::config`);
//! flags only change where the check runs and how the result is printed.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

/// Exit code for failures that stop the run before a verdict
const FATAL_EXIT_CODE: u8 = 2;

/// Check migration files, run migrations and verify the schema was committed
#[derive(Parser)]
#[command(name = "migcheck", version, about, long_about = None)]
struct Cli {
    /// Project directory to check
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Output the report as JSON
    #[arg(long)]
    json: bool,

    /// List discovered migrations and enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match commands::check::run(&cli.root, cli.json, cli.verbose) {
        Ok(code) => code,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::from(FATAL_EXIT_CODE)
        }
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

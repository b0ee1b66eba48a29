//! disktop — concurrent disk usage scanner.
//!
//! Thin binary entry point. All logic lives in the `disktop-core`
//! and `disktop-cli` crates.

use clap::Parser;
use disktop_cli::CliArgs;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    setup_logging(args.verbose);

    match disktop_cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Structured logging on stderr so log lines never mix into the report.
/// `RUST_LOG` overrides the level picked by `--verbose`.
fn setup_logging(verbose: bool) {
    let default = if verbose {
        "disktop_core=debug,disktop_cli=debug,warn"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// disktop CLI — argument parsing and console rendering.
///
/// All scanning lives in `disktop-core`; this crate turns flags into a
/// `ScanConfig` and prints the finished report.
pub mod cli;
pub mod report;

pub use cli::CliArgs;

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::time::Instant;

/// Resolve configuration, run one scan, and print the report to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let config = args.to_config()?;
    config.validate().context("invalid configuration")?;

    let mut out = io::stdout().lock();
    report::write_header(&mut out, &config)?;
    out.flush()?;

    let start = Instant::now();
    let scan = disktop_core::scan(&config).context("scan failed")?;
    report::write_report(&mut out, config.top_n, &scan)?;
    report::write_duration(&mut out, start.elapsed())?;
    out.flush()?;

    Ok(())
}

//! Console rendering of the scan configuration and results.

use disktop_core::model::size::{format_count, format_size};
use disktop_core::{ScanConfig, ScanReport};
use std::io::{self, Write};
use std::time::Duration;

/// The line printed before scanning starts.
pub fn write_header(out: &mut impl Write, config: &ScanConfig) -> io::Result<()> {
    match config.max_depth {
        Some(depth) => writeln!(
            out,
            "Scanning Directory: {} (depth: {depth})",
            config.root.display()
        ),
        None => writeln!(out, "Scanning Directory: {} (depth: ∞)", config.root.display()),
    }
}

/// Ranked largest files followed by the aggregate counters.
pub fn write_report(out: &mut impl Write, top_n: usize, report: &ScanReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Top {top_n} largest files:")?;
    for (rank, file) in report.largest.iter().enumerate() {
        writeln!(
            out,
            "{:2}. {:<10} {}",
            rank + 1,
            format_size(file.size),
            file.path.display()
        )?;
    }

    let stats = &report.stats;
    writeln!(out)?;
    writeln!(out, "Scanned {} directories", format_count(stats.dirs_scanned))?;
    writeln!(out, "Scanned {} files", format_count(stats.files_scanned))?;
    writeln!(out, "Total disk space scanned {}", format_size(stats.total_size))
}

pub fn write_duration(out: &mut impl Write, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "Scan Duration: {elapsed:?}")
}

/// Scanner module — orchestrates a concurrent scan.
///
/// [`scan`] builds a dedicated `rayon` pool, runs the [`walker`] inside it,
/// waits for every task to join, and returns the counters plus the largest
/// files in one [`ScanReport`].
pub mod config;
pub mod depth;
pub mod limiter;
pub mod stats;
pub(crate) mod walker;

pub use config::{ScanConfig, DEFAULT_MAX_TASKS, DEFAULT_TOP_N};
pub use depth::relative_depth;
pub use limiter::{Permit, TaskLimiter};
pub use stats::ScanCounters;

use crate::error::ScanError;
use crate::model::ScanReport;
use crate::platform::FileSizeResolver;
use std::time::Instant;
use tracing::info;
use walker::Walk;

/// Stack size for pool threads. Subdirectories that find no free task slot
/// are walked by plain recursion, so stack use grows with tree depth.
const WORKER_STACK_SIZE: usize = 16 * 1024 * 1024;

/// Scan `config.root` using the size resolver selected by `config.size_mode`.
pub fn scan(config: &ScanConfig) -> Result<ScanReport, ScanError> {
    scan_with_resolver(config, config.size_mode.resolver())
}

/// Scan `config.root`, sizing every regular file with `sizer`.
///
/// Blocks until the whole tree has been walked. Unreadable directories and
/// entries are logged and skipped; they never fail the scan.
///
/// # Panics
///
/// If the walker produces a path outside the scan root. That is an internal
/// invariant break, not an environmental condition.
pub fn scan_with_resolver(
    config: &ScanConfig,
    sizer: &dyn FileSizeResolver,
) -> Result<ScanReport, ScanError> {
    config.validate()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .stack_size(WORKER_STACK_SIZE)
        .thread_name(|i| format!("disktop-walker-{i}"))
        .build()?;

    info!(
        "Starting scan of {} (max depth: {:?}, top: {}, tasks: {}, threads: {})",
        config.root.display(),
        config.max_depth,
        config.top_n,
        config.max_tasks,
        config.threads
    );

    let start = Instant::now();
    let walk = Walk::new(config, sizer);
    pool.install(|| walk.run());
    let (stats, largest) = walk.finish();
    let duration = start.elapsed();

    info!(
        "Scan complete: {} files, {} dirs, {} bytes in {duration:?}",
        stats.files_scanned, stats.dirs_scanned, stats.total_size
    );

    Ok(ScanReport {
        stats,
        largest,
        duration,
    })
}

//! Scan configuration.

use crate::error::ScanError;
use crate::platform::SizeMode;
use std::path::PathBuf;

/// Default capacity of the concurrency limiter: in-flight directory tasks,
/// the root task included.
pub const DEFAULT_MAX_TASKS: usize = 64;

/// Default number of largest files to keep.
pub const DEFAULT_TOP_N: usize = 10;

/// Parameters for one scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory the walk starts from. Depth is measured relative to it.
    pub root: PathBuf,
    /// Deepest directory level to descend into. `None` means unbounded;
    /// `Some(0)` lists only the root's immediate entries.
    pub max_depth: Option<usize>,
    /// How many of the largest files to report.
    pub top_n: usize,
    /// Capacity of the concurrency limiter. With 1 the root holds the only
    /// slot and the whole walk runs synchronously in one task.
    pub max_tasks: usize,
    /// Worker threads in the scan pool.
    pub threads: usize,
    /// Which size accounting the built-in resolver uses.
    pub size_mode: SizeMode,
}

impl ScanConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: None,
            top_n: DEFAULT_TOP_N,
            max_tasks: DEFAULT_MAX_TASKS,
            threads: num_cpus::get(),
            size_mode: SizeMode::default(),
        }
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_max_tasks(mut self, max_tasks: usize) -> Self {
        self.max_tasks = max_tasks;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_size_mode(mut self, size_mode: SizeMode) -> Self {
        self.size_mode = size_mode;
        self
    }

    /// Reject values that cannot drive a scan.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.max_tasks == 0 {
            return Err(ScanError::InvalidConfig(
                "max_tasks must be at least 1 (the root task needs a slot)".into(),
            ));
        }
        if self.threads == 0 {
            return Err(ScanError::InvalidConfig(
                "threads must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

//! Error type for the scanning library.
//!
//! Per-directory and per-entry I/O failures are not errors at this level:
//! the walker absorbs and logs them so one unreadable path never aborts a
//! scan. Only configuration problems, pool setup, and internal invariant
//! breaks surface here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    /// A `ScanConfig` value that cannot drive a scan.
    #[error("invalid scan configuration: {0}")]
    InvalidConfig(String),

    /// A path handed to depth calculation does not live under the scan root.
    #[error("path {} is not under scan root {}", .path.display(), .root.display())]
    OutsideRoot { root: PathBuf, path: PathBuf },

    /// The worker pool could not be started.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

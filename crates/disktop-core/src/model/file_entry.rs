//! A single regular file observed during a scan.
use std::path::PathBuf;

/// A file path together with its resolved size.
///
/// Created once when the walker visits a regular file and never mutated
/// afterwards. Only the largest-files selector keeps these around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path (root joined with every component down to the file).
    pub path: PathBuf,
    /// Size in bytes as reported by the active `FileSizeResolver`.
    pub size: u64,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }
}

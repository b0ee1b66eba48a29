//! Aggregate results of one scan.
use crate::model::FileEntry;
use std::time::Duration;

/// Final counter values, read after every walker task has finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Regular, non-symlink files visited.
    pub files_scanned: u64,
    /// Directories visited, root included. Unreadable directories count;
    /// directories pruned by the depth limit do not.
    pub dirs_scanned: u64,
    /// Sum of the sizes of every visited file.
    pub total_size: u64,
}

/// Everything a caller gets back from [`crate::scan`].
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub stats: ScanStats,
    /// The N largest files, sorted descending by size.
    pub largest: Vec<FileEntry>,
    /// Wall-clock time spent walking, excluding report rendering.
    pub duration: Duration,
}

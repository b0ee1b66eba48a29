//! File size resolution.
//!
//! The walker never looks at platform specifics itself; it hands each
//! file's `Metadata` to a [`FileSizeResolver`] and counts whatever comes
//! back. One implementation per accounting mode, with the per-target
//! details kept behind `cfg` inside each.

use std::fs::Metadata;

/// Turns a file's metadata into the byte count the scan should record.
///
/// Called concurrently from every walker task, hence `Send + Sync`.
pub trait FileSizeResolver: Send + Sync {
    fn resolve(&self, meta: &Metadata) -> u64;
}

/// Which built-in resolver a scan uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizeMode {
    /// Logical file length.
    #[default]
    Logical,
    /// Space allocated on disk (block/cluster rounded, sparse-aware).
    Allocated,
}

impl SizeMode {
    /// The resolver for this mode.
    pub fn resolver(self) -> &'static dyn FileSizeResolver {
        match self {
            Self::Logical => &LogicalSize,
            Self::Allocated => &AllocatedSize,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Logical => "logical",
            Self::Allocated => "allocated",
        }
    }
}

/// Logical size: the byte length a reader of the file would see.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogicalSize;

impl FileSizeResolver for LogicalSize {
    #[cfg(windows)]
    fn resolve(&self, meta: &Metadata) -> u64 {
        // nFileSizeHigh/nFileSizeLow from the Win32 attribute data.
        use std::os::windows::fs::MetadataExt;
        meta.file_size()
    }

    #[cfg(not(windows))]
    fn resolve(&self, meta: &Metadata) -> u64 {
        meta.len()
    }
}

/// Allocated size: what the file actually costs on disk.
///
/// On Unix this is `st_blocks * 512`, which accounts for block rounding
/// and sparse files. Targets without block counts fall back to the
/// logical length.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllocatedSize;

/// `st_blocks` is always expressed in 512-byte units, regardless of `st_blksize`.
#[cfg(unix)]
const STAT_BLOCK_SIZE: u64 = 512;

impl FileSizeResolver for AllocatedSize {
    #[cfg(unix)]
    fn resolve(&self, meta: &Metadata) -> u64 {
        use std::os::unix::fs::MetadataExt;
        meta.blocks() * STAT_BLOCK_SIZE
    }

    #[cfg(not(unix))]
    fn resolve(&self, meta: &Metadata) -> u64 {
        LogicalSize.resolve(meta)
    }
}

//! Lock-free scan counters.

use crate::model::ScanStats;
use std::sync::atomic::{AtomicU64, Ordering};

/// Three independent monotonically increasing counters shared by every
/// walker task. No ordering between them is needed: they are only read
/// after the scan scope has joined, which synchronises all prior writes.
#[derive(Debug, Default)]
pub struct ScanCounters {
    files_scanned: AtomicU64,
    dirs_scanned: AtomicU64,
    total_size: AtomicU64,
}

impl ScanCounters {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_dir(&self) {
        self.dirs_scanned.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_file(&self, size: u64) {
        self.files_scanned.fetch_add(1, Ordering::Relaxed);
        self.total_size.fetch_add(size, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ScanStats {
        ScanStats {
            files_scanned: self.files_scanned.load(Ordering::Relaxed),
            dirs_scanned: self.dirs_scanned.load(Ordering::Relaxed),
            total_size: self.total_size.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_from_many_threads() {
        let counters = ScanCounters::new();
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..1_000 {
                        counters.record_file(3);
                        counters.record_dir();
                    }
                });
            }
        });
        let stats = counters.snapshot();
        assert_eq!(stats.files_scanned, 8_000);
        assert_eq!(stats.dirs_scanned, 8_000);
        assert_eq!(stats.total_size, 24_000);
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(ScanCounters::new().snapshot(), ScanStats::default());
    }
}

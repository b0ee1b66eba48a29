//! Bounded-parallel recursive directory walker.
//!
//! Every directory visit lists its entries, feeds regular files into the
//! shared counters and largest-files selector, and fans out into its
//! subdirectories. A subdirectory becomes a new pool task when the
//! [`TaskLimiter`] has a free slot; otherwise the current task walks it
//! inline. Tasks are spawned into one `rayon::Scope`, which is the join
//! barrier: it returns only after every transitively spawned task has
//! finished.
//!
//! # Shared state
//!
//! - [`ScanCounters`]: atomics, no lock.
//! - [`TopFiles`]: one `parking_lot::Mutex`, held for a single `offer`
//!   and never across directory I/O.
//! - [`TaskLimiter`]: the only input to spawn decisions.

use crate::analysis::TopFiles;
use crate::model::{FileEntry, ScanStats};
use crate::platform::FileSizeResolver;
use crate::scanner::config::ScanConfig;
use crate::scanner::depth::relative_depth;
use crate::scanner::limiter::TaskLimiter;
use crate::scanner::stats::ScanCounters;
use parking_lot::Mutex;
use rayon::Scope;
use std::fs::{self, DirEntry};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// State shared by all tasks of one scan. Lives exactly as long as the scan.
pub(crate) struct Walk<'a> {
    root: &'a Path,
    max_depth: Option<usize>,
    counters: ScanCounters,
    top: Mutex<TopFiles>,
    limiter: TaskLimiter,
    sizer: &'a dyn FileSizeResolver,
}

impl<'a> Walk<'a> {
    pub(crate) fn new(config: &'a ScanConfig, sizer: &'a dyn FileSizeResolver) -> Self {
        Self {
            root: &config.root,
            max_depth: config.max_depth,
            counters: ScanCounters::new(),
            top: Mutex::new(TopFiles::new(config.top_n)),
            limiter: TaskLimiter::new(config.max_tasks),
            sizer,
        }
    }

    /// Walk the whole tree and block until every task has completed.
    ///
    /// Must be called from inside the scan's thread pool.
    pub(crate) fn run(&self) {
        rayon::scope(|scope| {
            // The root always runs as a task so the join has one shape.
            // A fresh limiter with capacity >= 1 always has a slot.
            match self.limiter.try_acquire() {
                Some(permit) => scope.spawn(move |scope| {
                    let _permit = permit;
                    self.walk_dir(scope, self.root);
                }),
                None => self.walk_dir(scope, self.root),
            }
        });
        debug_assert_eq!(self.limiter.in_flight(), 0, "permit leaked past join");
    }

    /// Final counters and the largest files, largest first.
    pub(crate) fn finish(self) -> (ScanStats, Vec<FileEntry>) {
        let stats = self.counters.snapshot();
        let largest = self.top.into_inner().into_sorted_desc();
        (stats, largest)
    }

    fn walk_dir<'s>(&'s self, scope: &Scope<'s>, dir: &Path) {
        self.counters.record_dir();

        let entries = match list_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                if dir == self.root {
                    warn!("Cannot read scan root {}: {err}", dir.display());
                } else {
                    debug!("Skipping unreadable directory {}: {err}", dir.display());
                }
                return;
            }
        };

        for entry in entries {
            let path = entry.path();
            // `DirEntry::metadata` does not follow symlinks.
            let meta = match entry.metadata() {
                Ok(meta) => meta,
                Err(err) => {
                    warn!("Could not get info for {}: {err}", path.display());
                    continue;
                }
            };
            let file_type = meta.file_type();

            if file_type.is_symlink() {
                trace!("Skipping symlink {}", path.display());
            } else if file_type.is_dir() {
                self.descend(scope, path);
            } else if file_type.is_file() {
                let size = self.sizer.resolve(&meta);
                self.counters.record_file(size);
                self.top.lock().offer(FileEntry { path, size });
            } else {
                trace!("Skipping special file {}", path.display());
            }
        }
    }

    fn descend<'s>(&'s self, scope: &Scope<'s>, path: PathBuf) {
        // Every path here is built by joining names onto the root, so a
        // prefix mismatch means the walker itself is broken.
        let depth = relative_depth(self.root, &path)
            .unwrap_or_else(|err| panic!("walker invariant violated: {err}"));
        if self.max_depth.is_some_and(|max| depth > max) {
            trace!("Depth {depth} past limit, not descending into {}", path.display());
            return;
        }

        // Never wait for a slot: a task blocked on the limiter could be
        // waiting on tasks that are themselves blocked.
        match self.limiter.try_acquire() {
            Some(permit) => scope.spawn(move |scope| {
                let _permit = permit;
                self.walk_dir(scope, &path);
            }),
            None => self.walk_dir(scope, &path),
        }
    }
}

/// Read every entry of `dir` up front so the directory handle is closed
/// before recursing. Entries that fail to read are logged and dropped.
fn list_dir(dir: &Path) -> std::io::Result<Vec<DirEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(err) => warn!("Could not read an entry of {}: {err}", dir.display()),
        }
    }
    Ok(entries)
}

//! Top-N largest files selection.
//!
//! A fixed-capacity min-heap: the root is always the smallest of the files
//! currently retained, so most candidates are rejected with a single
//! comparison once the heap is full.

use crate::model::FileEntry;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::path::PathBuf;

/// Upper bound on up-front heap allocation; larger selectors grow on demand.
const PREALLOC_LIMIT: usize = 1_024;

/// Retains the `capacity` largest files offered so far.
///
/// Not synchronised; the walker keeps it behind a mutex and holds the lock
/// only for one [`offer`](Self::offer).
#[derive(Debug)]
pub struct TopFiles {
    /// `Reverse` turns std's max-heap into a min-heap keyed on size.
    /// The path only orders entries of equal size inside the heap.
    heap: BinaryHeap<Reverse<(u64, PathBuf)>>,
    capacity: usize,
}

impl TopFiles {
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity.min(PREALLOC_LIMIT)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Size of the smallest retained file, if any.
    pub fn min_size(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse((size, _))| *size)
    }

    /// Offer a file; returns `true` if it was retained.
    ///
    /// Below capacity every entry is kept. At capacity the entry replaces
    /// the current minimum only if it is strictly larger, so on a tie the
    /// file seen first stays.
    pub fn offer(&mut self, entry: FileEntry) -> bool {
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse((entry.size, entry.path)));
            return true;
        }
        match self.min_size() {
            Some(min) if entry.size > min => {
                self.heap.pop();
                self.heap.push(Reverse((entry.size, entry.path)));
                true
            }
            _ => false,
        }
    }

    /// Consume the selector, returning the retained files largest first.
    pub fn into_sorted_desc(self) -> Vec<FileEntry> {
        // Ascending order of `Reverse` is descending order of the inner key.
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse((size, path))| FileEntry { path, size })
            .collect()
    }
}

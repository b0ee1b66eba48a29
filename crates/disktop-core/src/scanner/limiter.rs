//! Concurrency limiter — a fixed pool of task slots.
//!
//! Backed by a bounded `crossbeam-channel`: a slot is taken by pushing a
//! token into the channel and given back by pulling one out. Acquisition is
//! strictly non-blocking. A walker that cannot get a slot recurses in its
//! own task instead of waiting, so slot exhaustion can never deadlock the
//! pool.

use crossbeam_channel::{Receiver, Sender, TrySendError};

#[derive(Debug)]
pub struct TaskLimiter {
    tx: Sender<()>,
    rx: Receiver<()>,
    capacity: usize,
}

/// A held slot. Returned to the pool on drop.
#[derive(Debug)]
#[must_use = "dropping a permit releases its slot immediately"]
pub struct Permit<'a> {
    limiter: &'a TaskLimiter,
}

impl TaskLimiter {
    /// Panics if `capacity` is 0; `ScanConfig::validate` rules that out.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "TaskLimiter capacity must be at least 1");
        let (tx, rx) = crossbeam_channel::bounded(capacity);
        Self { tx, rx, capacity }
    }

    /// Take a slot if one is free, without waiting.
    pub fn try_acquire(&self) -> Option<Permit<'_>> {
        match self.tx.try_send(()) {
            Ok(()) => Some(Permit { limiter: self }),
            // Both channel ends live in `self`, so only `Full` can occur.
            Err(TrySendError::Full(())) | Err(TrySendError::Disconnected(())) => None,
        }
    }

    /// Slots currently held.
    pub fn in_flight(&self) -> usize {
        self.tx.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Drop for Permit<'_> {
    fn drop(&mut self) {
        // A permit only exists after a successful send, so a token is there.
        let _ = self.limiter.rx.try_recv();
    }
}

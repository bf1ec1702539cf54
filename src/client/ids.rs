//! Request id allocation

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of request ids for a client
#[cfg_attr(test, mockall::automock)]
pub trait IdSource: Send + Sync {
    /// Allocate the id for the next request
    fn next_id(&self) -> u64;
}

/// Strictly increasing ids starting at 1
///
/// Each client owns its own sequence, so independent clients in one
/// process never share or race on ids.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// The same id for every request
#[derive(Debug, Clone, Copy)]
pub struct FixedId(pub u64);

impl IdSource for FixedId {
    fn next_id(&self) -> u64 {
        self.0
    }
}

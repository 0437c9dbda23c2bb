//! Id Generation
//!
//! Injectable id source so item creation stays deterministic in tests.

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of unique item ids
pub trait IdSource: Send + Sync {
    /// Next id, unique for the lifetime of this source
    fn next_id(&self) -> u64;
}

/// Wall-clock id source used in the browser
///
/// Ids are epoch milliseconds. Two items added within the same
/// millisecond would collide, so the last issued id is remembered and
/// bumped past when needed.
#[derive(Default)]
pub struct SystemIdSource {
    last: AtomicU64,
}

impl SystemIdSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SystemIdSource {
    fn next_id(&self) -> u64 {
        // Single-threaded WASM; relaxed ordering suffices.
        let now = js_sys::Date::now() as u64;
        let last = self.last.load(Ordering::Relaxed);
        let id = if now > last { now } else { last + 1 };
        self.last.store(id, Ordering::Relaxed);
        id
    }
}

/// Deterministic counting id source for tests
pub struct SequenceIdSource {
    next: AtomicU64,
}

impl SequenceIdSource {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequenceIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequenceIdSource {
    fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_ids_are_unique_and_increasing() {
        let ids = SequenceIdSource::new();
        let first = ids.next_id();
        let second = ids.next_id();
        let third = ids.next_id();
        assert_eq!(first, 1);
        assert!(first < second && second < third);
    }
}

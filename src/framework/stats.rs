//! Process-wide count of constructed records.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter of successful record constructions.
///
/// There is no reset and no decrement. The increment is atomic, so the
/// "one increment per construction" rule also holds if records are ever
/// built from several threads.
#[derive(Debug, Default)]
pub struct StatisticsCounter {
    total: AtomicU64,
}

impl StatisticsCounter {
    /// Creates an isolated counter starting at zero.
    pub const fn new() -> Self {
        Self {
            total: AtomicU64::new(0),
        }
    }

    /// The single counter shared by the whole process.
    pub fn global() -> &'static StatisticsCounter {
        static GLOBAL: StatisticsCounter = StatisticsCounter::new();
        &GLOBAL
    }

    /// Records one successful construction and returns the new total.
    pub fn increment_total(&self) -> u64 {
        self.total.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Number of records constructed so far.
    pub fn total_entities(&self) -> u64 {
        self.total.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_counts_up() {
        let stats = StatisticsCounter::new();
        assert_eq!(stats.total_entities(), 0);
        assert_eq!(stats.increment_total(), 1);
        assert_eq!(stats.increment_total(), 2);
        assert_eq!(stats.total_entities(), 2);
    }

    #[test]
    fn global_is_a_single_instance() {
        let a = StatisticsCounter::global() as *const _;
        let b = StatisticsCounter::global() as *const _;
        assert_eq!(a, b);
    }
}

//! Match events and per-invocation statistics.

use std::fmt;

/// A single matched pair, reported in discovery order.
///
/// Indices refer to positions in the caller's *input* collections; `slot` is
/// the position the pair occupies in the matched output. A presentation layer
/// can animate nut `nut` and bolt `bolt` towards column `slot`.
///
/// ## Example
///
/// ```
/// use nuts_bolts::MatchEvent;
///
/// let event = MatchEvent::new(3, 0, 1);
/// assert_eq!(event.to_string(), "nut #3 <-> bolt #0 at slot 1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchEvent {
    /// Index of the nut in the input nut collection
    pub nut: usize,

    /// Index of the bolt in the input bolt collection
    pub bolt: usize,

    /// Output position of the pair
    pub slot: usize,
}

impl MatchEvent {
    /// Create a new match event
    pub fn new(nut: usize, bolt: usize, slot: usize) -> Self {
        Self { nut, bolt, slot }
    }
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nut #{} <-> bolt #{} at slot {}", self.nut, self.bolt, self.slot)
    }
}

/// Work counters collected while matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchStats {
    /// Number of comparator calls
    pub comparisons: u64,

    /// Number of pivot partitions performed (size-1 sub-problems excluded)
    pub partitions: u64,

    /// Number of pairs reported
    pub pairs: u64,

    /// Deepest sub-problem visited (the whole input is depth 0)
    pub max_depth: usize,
}

impl MatchStats {
    /// Average comparisons per matched pair
    ///
    /// Returns None if nothing was matched.
    pub fn comparisons_per_pair(&self) -> Option<f64> {
        if self.pairs == 0 {
            None
        } else {
            Some(self.comparisons as f64 / self.pairs as f64)
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_new() {
        let event = MatchEvent::new(4, 2, 0);
        assert_eq!(event.nut, 4);
        assert_eq!(event.bolt, 2);
        assert_eq!(event.slot, 0);
    }

    #[test]
    fn test_stats_default_is_zero() {
        let stats = MatchStats::default();
        assert_eq!(stats.comparisons, 0);
        assert_eq!(stats.partitions, 0);
        assert_eq!(stats.pairs, 0);
        assert_eq!(stats.max_depth, 0);
        assert!(stats.comparisons_per_pair().is_none());
    }

    #[test]
    fn test_comparisons_per_pair() {
        let stats = MatchStats { comparisons: 30, partitions: 4, pairs: 10, max_depth: 3 };
        assert_eq!(stats.comparisons_per_pair(), Some(3.0));
    }
}

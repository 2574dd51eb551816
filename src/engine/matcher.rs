//! The nuts & bolts matcher.
//!
//! [`MatchEvents`] does the actual work: it keeps the unsolved sub-problems on
//! a work stack and resolves one pivot each time the consumer asks for the next
//! event. [`Matcher::run`] and [`match_pieces`] simply drain that stream and
//! assemble the two output sequences.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::iter::FusedIterator;

use log::{debug, trace};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::config::{MatcherConfig, PivotRule};
use crate::engine::Partition;
use crate::error::MatchError;
use crate::types::{Bolt, MatchEvent, MatchStats, Matched, Nut, Side};

// ============================================================================
// Matcher
// ============================================================================

/// Matcher with an injected source of pivot randomness.
///
/// ## Example
///
/// ```
/// use nuts_bolts::{by_size, Bolt, Matcher, Nut};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut matcher = Matcher::with_rng(ChaCha8Rng::seed_from_u64(7));
/// let matched = matcher
///     .run(Nut::from_sizes([5, 5, 10]), Bolt::from_sizes([10, 5, 5]), by_size)
///     .unwrap();
///
/// assert_eq!(matched.nut_sizes(), vec![5, 5, 10]);
/// assert_eq!(matched.bolt_sizes(), vec![5, 5, 10]);
/// ```
#[derive(Debug, Clone)]
pub struct Matcher<R> {
    config: MatcherConfig,
    rng: R,
}

impl Default for Matcher<ThreadRng> {
    fn default() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl<R: Rng> Matcher<R> {
    /// Create a matcher with an explicit configuration
    pub fn new(config: MatcherConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Create a matcher with the default configuration (random pivots)
    pub fn with_rng(rng: R) -> Self {
        Self::new(MatcherConfig::default(), rng)
    }

    /// Get the configuration
    #[inline]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Start matching, returning a lazy stream of discovered pairs.
    ///
    /// No comparison happens until the first event is requested.
    pub fn events<T, F>(
        &mut self,
        nuts: Vec<Nut<T>>,
        bolts: Vec<Bolt<T>>,
        compare: F,
    ) -> MatchEvents<'_, T, F, R>
    where
        F: FnMut(&Nut<T>, &Bolt<T>) -> Ordering,
    {
        MatchEvents::new(nuts, bolts, compare, self.config.pivot, &mut self.rng)
    }

    /// Match `nuts` to `bolts`, blocking until every pair is found.
    ///
    /// # Errors
    ///
    /// Returns a [`MatchError`] if the collections are not a true match.
    pub fn run<T, F>(
        &mut self,
        nuts: Vec<Nut<T>>,
        bolts: Vec<Bolt<T>>,
        compare: F,
    ) -> Result<Matched<T>, MatchError>
    where
        F: FnMut(&Nut<T>, &Bolt<T>) -> Ordering,
    {
        self.events(nuts, bolts, compare).finish()
    }
}

/// Match `nuts` to `bolts` using thread-local randomness for pivots.
///
/// ```
/// use nuts_bolts::{match_pieces, by_size, Bolt, MatchError, Nut};
///
/// let err = match_pieces(Nut::from_sizes([1, 2, 3]), Bolt::from_sizes([1, 2, 99]), by_size)
///     .unwrap_err();
/// assert!(matches!(err, MatchError::Unmatched { .. }));
/// ```
pub fn match_pieces<T, F>(
    nuts: Vec<Nut<T>>,
    bolts: Vec<Bolt<T>>,
    compare: F,
) -> Result<Matched<T>, MatchError>
where
    F: FnMut(&Nut<T>, &Bolt<T>) -> Ordering,
{
    Matcher::default().run(nuts, bolts, compare)
}

// ============================================================================
// Event stream
// ============================================================================

/// An unsolved slice of the problem: indices into the input collections plus
/// the output slot its first pair will occupy.
#[derive(Debug)]
struct Subproblem {
    nuts: Vec<usize>,
    bolts: Vec<usize>,
    offset: usize,
    depth: usize,
}

/// Lazy stream of [`MatchEvent`]s.
///
/// Yields one `Ok` per matched pair in discovery order: the pivot pair of a
/// sub-problem first, then any other pairs of the same size, then everything
/// in the smaller half, then everything in the larger half. On failure it
/// yields a single `Err` and is exhausted afterwards.
pub struct MatchEvents<'r, T, F, R> {
    nuts: Vec<Nut<T>>,
    bolts: Vec<Bolt<T>>,
    compare: F,
    pivot: PivotRule,
    rng: &'r mut R,

    /// Pending sub-problems; the top is solved next
    stack: Vec<Subproblem>,

    /// Pairs found by the last resolution, not yet handed out
    ready: VecDeque<MatchEvent>,

    /// `(nut, bolt)` input indices by output slot
    placement: Vec<Option<(usize, usize)>>,

    stats: MatchStats,
    failure: Option<MatchError>,
    done: bool,
}

impl<'r, T, F, R> MatchEvents<'r, T, F, R>
where
    F: FnMut(&Nut<T>, &Bolt<T>) -> Ordering,
    R: Rng,
{
    fn new(
        nuts: Vec<Nut<T>>,
        bolts: Vec<Bolt<T>>,
        compare: F,
        pivot: PivotRule,
        rng: &'r mut R,
    ) -> Self {
        let root = Subproblem {
            nuts: (0..nuts.len()).collect(),
            bolts: (0..bolts.len()).collect(),
            offset: 0,
            depth: 0,
        };
        let slots = nuts.len().min(bolts.len());

        Self {
            nuts,
            bolts,
            compare,
            pivot,
            rng,
            stack: vec![root],
            ready: VecDeque::new(),
            placement: vec![None; slots],
            stats: MatchStats::default(),
            failure: None,
            done: false,
        }
    }

    /// Counters accumulated so far
    #[inline]
    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    /// Check if the stream has finished (successfully or not)
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done && self.ready.is_empty()
    }

    /// Drain the remaining events and assemble the matched sequences.
    ///
    /// # Errors
    ///
    /// Returns the first [`MatchError`] encountered, including one already
    /// handed out by the iterator.
    pub fn finish(mut self) -> Result<Matched<T>, MatchError> {
        while let Some(event) = self.next() {
            event?;
        }
        if let Some(err) = self.failure {
            return Err(err);
        }
        Ok(self.assemble())
    }

    /// Move every item into its output slot.
    fn assemble(self) -> Matched<T> {
        let mut nuts: Vec<Option<Nut<T>>> = self.nuts.into_iter().map(Some).collect();
        let mut bolts: Vec<Option<Bolt<T>>> = self.bolts.into_iter().map(Some).collect();

        let mut out_nuts = Vec::with_capacity(self.placement.len());
        let mut out_bolts = Vec::with_capacity(self.placement.len());

        for (nut, bolt) in self.placement.into_iter().flatten() {
            if let (Some(nut), Some(bolt)) = (nuts[nut].take(), bolts[bolt].take()) {
                out_nuts.push(nut);
                out_bolts.push(bolt);
            }
        }

        debug!(
            "matched {} pairs with {} comparisons (max depth {})",
            out_nuts.len(),
            self.stats.comparisons,
            self.stats.max_depth
        );

        Matched {
            nuts: out_nuts,
            bolts: out_bolts,
            stats: self.stats,
        }
    }

    #[inline]
    fn compare_pair(&mut self, nut: usize, bolt: usize) -> Ordering {
        self.stats.comparisons += 1;
        (self.compare)(&self.nuts[nut], &self.bolts[bolt])
    }

    fn pick_pivot(&mut self, len: usize) -> usize {
        match self.pivot {
            PivotRule::Random => self.rng.gen_range(0..len),
            PivotRule::First => 0,
        }
    }

    fn emit(&mut self, nut: usize, bolt: usize, slot: usize) {
        self.placement[slot] = Some((nut, bolt));
        self.stats.pairs += 1;
        self.ready.push_back(MatchEvent::new(nut, bolt, slot));
    }

    /// Solve one sub-problem: report its pairs and schedule its halves.
    fn resolve(&mut self, problem: Subproblem) -> Result<(), MatchError> {
        let Subproblem { nuts, bolts, offset, depth } = problem;

        if nuts.len() != bolts.len() {
            let (nuts, bolts) = (nuts.len(), bolts.len());
            return Err(if depth == 0 {
                MatchError::SizeMismatch { nuts, bolts }
            } else {
                MatchError::Unbalanced { nuts, bolts }
            });
        }
        self.stats.max_depth = self.stats.max_depth.max(depth);

        match (nuts.as_slice(), bolts.as_slice()) {
            ([], []) => return Ok(()),
            ([nut], [bolt]) => {
                let (nut, bolt) = (*nut, *bolt);
                if self.compare_pair(nut, bolt) != Ordering::Equal {
                    return Err(MatchError::Unmatched { side: Side::Bolt, index: bolt });
                }
                self.emit(nut, bolt, offset);
                return Ok(());
            }
            _ => {}
        }

        let pivot_bolt = bolts[self.pick_pivot(bolts.len())];
        let width = nuts.len();

        // Nuts against the pivot bolt
        let by_nut = Partition::split(nuts, |nut| self.compare_pair(nut, pivot_bolt));
        let Some(&pivot_nut) = by_nut.equal.first() else {
            return Err(MatchError::Unmatched { side: Side::Bolt, index: pivot_bolt });
        };

        // Bolts against the pivot nut; the comparator is nut-first, so a bolt
        // ranks below the pivot when the nut compares Greater.
        let mut by_bolt =
            Partition::split(bolts, |bolt| self.compare_pair(pivot_nut, bolt).reverse());
        debug_assert_eq!(by_nut.len(), width);
        debug_assert_eq!(by_bolt.len(), width);

        if by_nut.equal.len() != by_bolt.equal.len() {
            return Err(MatchError::Multiplicity {
                nuts: by_nut.equal.len(),
                bolts: by_bolt.equal.len(),
            });
        }
        if let Some(pos) = by_bolt.equal.iter().position(|&bolt| bolt == pivot_bolt) {
            let pivot = by_bolt.equal.remove(pos);
            by_bolt.equal.insert(0, pivot);
        }

        trace!(
            "depth {}: pivot bolt #{} split nuts {}/{}/{} and bolts {}/{}/{}",
            depth,
            pivot_bolt,
            by_nut.smaller.len(),
            by_nut.equal.len(),
            by_nut.larger.len(),
            by_bolt.smaller.len(),
            by_bolt.equal.len(),
            by_bolt.larger.len()
        );

        let middle = offset + by_nut.smaller.len();
        for (k, (&nut, &bolt)) in by_nut.equal.iter().zip(&by_bolt.equal).enumerate() {
            self.emit(nut, bolt, middle + k);
        }
        self.stats.partitions += 1;

        debug!(
            "pivot bolt #{} fits nut #{} at slot {} ({} of that size)",
            pivot_bolt,
            pivot_nut,
            middle,
            by_nut.equal.len()
        );

        // Larger half goes underneath so the smaller half is solved first.
        self.stack.push(Subproblem {
            nuts: by_nut.larger,
            bolts: by_bolt.larger,
            offset: middle + by_nut.equal.len(),
            depth: depth + 1,
        });
        self.stack.push(Subproblem {
            nuts: by_nut.smaller,
            bolts: by_bolt.smaller,
            offset,
            depth: depth + 1,
        });

        Ok(())
    }
}

impl<T, F, R> Iterator for MatchEvents<'_, T, F, R>
where
    F: FnMut(&Nut<T>, &Bolt<T>) -> Ordering,
    R: Rng,
{
    type Item = Result<MatchEvent, MatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(event) = self.ready.pop_front() {
                return Some(Ok(event));
            }
            if self.done {
                return None;
            }

            let Some(problem) = self.stack.pop() else {
                self.done = true;
                return None;
            };

            if let Err(err) = self.resolve(problem) {
                debug!("matching aborted: {}", err);
                self.done = true;
                self.stack.clear();
                self.failure = Some(err);
                return Some(Err(err));
            }
        }
    }
}

impl<T, F, R> FusedIterator for MatchEvents<'_, T, F, R>
where
    F: FnMut(&Nut<T>, &Bolt<T>) -> Ordering,
    R: Rng,
{
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::by_size;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn first_pivot() -> Matcher<StepRng> {
        Matcher::new(
            MatcherConfig::new().with_pivot(PivotRule::First),
            StepRng::new(0, 1),
        )
    }

    fn seeded(seed: u64) -> Matcher<ChaCha8Rng> {
        Matcher::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn run(nuts: &[i32], bolts: &[i32], seed: u64) -> Result<Matched<i32>, MatchError> {
        seeded(seed).run(
            Nut::from_sizes(nuts.iter().copied()),
            Bolt::from_sizes(bolts.iter().copied()),
            by_size,
        )
    }

    #[test]
    fn test_empty_input() {
        let matched = run(&[], &[], 1).unwrap();
        assert!(matched.is_empty());
        assert_eq!(matched.stats.comparisons, 0);
    }

    #[test]
    fn test_single_pair() {
        let matched = run(&[5], &[5], 1).unwrap();
        assert_eq!(matched.nut_sizes(), vec![5]);
        assert_eq!(matched.bolt_sizes(), vec![5]);
        assert_eq!(matched.stats.comparisons, 1);
    }

    #[test]
    fn test_single_pair_mismatch() {
        let err = run(&[5], &[6], 1).unwrap_err();
        assert_eq!(err, MatchError::Unmatched { side: Side::Bolt, index: 0 });
    }

    #[test]
    fn test_concrete_scenario_sorted_output() {
        for seed in 0..20 {
            let matched = run(&[30, 10, 50, 20, 40], &[40, 20, 10, 50, 30], seed).unwrap();
            assert_eq!(matched.nut_sizes(), vec![10, 20, 30, 40, 50]);
            assert_eq!(matched.bolt_sizes(), vec![10, 20, 30, 40, 50]);
        }
    }

    #[test]
    fn test_duplicate_sizes() {
        for seed in 0..20 {
            let matched = run(&[5, 5, 10], &[5, 5, 10], seed).unwrap();
            assert_eq!(matched.nut_sizes(), vec![5, 5, 10]);
            assert_eq!(matched.bolt_sizes(), vec![5, 5, 10]);
        }
    }

    #[test]
    fn test_missing_size_always_fails() {
        for seed in 0..50 {
            let err = run(&[1, 2, 3], &[1, 2, 99], seed).unwrap_err();
            assert!(matches!(err, MatchError::Unmatched { side: Side::Bolt, .. }));
        }
    }

    #[test]
    fn test_length_mismatch() {
        let err = run(&[1, 2], &[1], 1).unwrap_err();
        assert_eq!(err, MatchError::SizeMismatch { nuts: 2, bolts: 1 });
    }

    #[test]
    fn test_asymmetric_duplicates() {
        // Two nuts of size 5, one bolt of size 5: the pivot is deterministic.
        let err = first_pivot()
            .run(Nut::from_sizes([5, 5, 10]), Bolt::from_sizes([5, 6, 10]), by_size)
            .unwrap_err();
        assert_eq!(err, MatchError::Multiplicity { nuts: 2, bolts: 1 });
    }

    #[test]
    fn test_unbalanced_halves() {
        // Pivot 6 leaves nuts {1,2} against bolt {5} below it: the inputs
        // have equal length, so this is not a length error.
        let err = first_pivot()
            .run(Nut::from_sizes([1, 2, 6, 9]), Bolt::from_sizes([6, 5, 7, 9]), by_size)
            .unwrap_err();
        assert_eq!(err, MatchError::Unbalanced { nuts: 2, bolts: 1 });
    }

    #[test]
    fn test_config_accessor() {
        assert_eq!(first_pivot().config().pivot, PivotRule::First);
        assert_eq!(seeded(0).config(), &MatcherConfig::default());
    }

    #[test]
    fn test_first_pivot_event_order() {
        let mut matcher = first_pivot();
        let events: Vec<MatchEvent> = matcher
            .events(
                Nut::from_sizes([3, 1, 2]),
                Bolt::from_sizes([2, 3, 1]),
                by_size,
            )
            .collect::<Result<_, _>>()
            .unwrap();

        // Root pivot: bolt #0 (2) fits nut #2. Left half {1}, right half {3}.
        assert_eq!(
            events,
            vec![
                MatchEvent::new(2, 0, 1),
                MatchEvent::new(1, 2, 0),
                MatchEvent::new(0, 1, 2),
            ]
        );
    }

    #[test]
    fn test_stream_fuses_after_error() {
        let mut matcher = first_pivot();
        let mut events = matcher.events(
            Nut::from_sizes([1, 2]),
            Bolt::from_sizes([7, 1]),
            by_size,
        );

        assert!(matches!(events.next(), Some(Err(MatchError::Unmatched { .. }))));
        assert!(events.next().is_none());
        assert!(events.next().is_none());
        assert!(events.is_done());
    }

    #[test]
    fn test_finish_after_observed_error() {
        let mut matcher = first_pivot();
        let mut events = matcher.events(
            Nut::from_sizes([1, 2]),
            Bolt::from_sizes([7, 1]),
            by_size,
        );

        assert!(events.next().unwrap().is_err());
        let err = events.finish().unwrap_err();
        assert_eq!(err, MatchError::Unmatched { side: Side::Bolt, index: 0 });
    }

    #[test]
    fn test_stream_is_lazy() {
        let mut matcher = first_pivot();
        let mut events = matcher.events(
            Nut::from_sizes([2, 1]),
            Bolt::from_sizes([1, 2]),
            by_size,
        );
        assert_eq!(events.stats().comparisons, 0);

        events.next();
        assert!(events.stats().comparisons > 0);
        assert!(!events.is_done());
    }

    #[test]
    fn test_stats() {
        let matched = first_pivot()
            .run(Nut::from_sizes([1, 2, 3, 4]), Bolt::from_sizes([1, 2, 3, 4]), by_size)
            .unwrap();

        // Sorted bolts with first-element pivots: one long chain.
        assert_eq!(matched.stats.pairs, 4);
        assert_eq!(matched.stats.partitions, 3);
        assert_eq!(matched.stats.max_depth, 3);
    }

    #[test]
    fn test_no_clone_needed() {
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
        struct Size(u8);

        let nuts = vec![Nut(Size(2)), Nut(Size(1))];
        let bolts = vec![Bolt(Size(1)), Bolt(Size(2))];
        let matched = seeded(3).run(nuts, bolts, by_size).unwrap();

        assert_eq!(matched.nuts, vec![Nut(Size(1)), Nut(Size(2))]);
        assert_eq!(matched.bolts, vec![Bolt(Size(1)), Bolt(Size(2))]);
    }

    #[test]
    fn test_custom_comparator() {
        // Nut is a diameter in mm, bolt a label; compare across types.
        let nuts = vec![Nut(("m8", 8u32)), Nut(("m3", 3)), Nut(("m5", 5))];
        let bolts = vec![Bolt(("m5", 5u32)), Bolt(("m8", 8)), Bolt(("m3", 3))];

        let matched = seeded(9)
            .run(nuts, bolts, |nut, bolt| nut.size().1.cmp(&bolt.size().1))
            .unwrap();

        let labels: Vec<&str> = matched.bolts.iter().map(|b| b.size().0).collect();
        assert_eq!(labels, vec!["m3", "m5", "m8"]);
        assert!(matched.pairs().all(|(n, b)| n.size().0 == b.size().0));
    }

    #[test]
    fn test_match_pieces_default_rng() {
        let matched = match_pieces(
            Nut::from_sizes([4, 2, 3, 1]),
            Bolt::from_sizes([1, 3, 4, 2]),
            by_size,
        )
        .unwrap();
        assert!(matched.is_paired_by(by_size));
    }
}

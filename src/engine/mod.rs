//! Matching engine for nuts and bolts.
//!
//! ## Algorithm
//!
//! Randomized divide and conquer, quickselect-style, over two collections at
//! once:
//!
//! 1. Pick a pivot bolt (uniformly at random by default)
//! 2. Partition the nuts against it; one of the equal nuts becomes the pivot nut
//! 3. Partition the bolts against the pivot nut
//! 4. Pair up the two equal groups, then solve the smaller halves and the
//!    larger halves independently
//!
//! The result is both collections in ascending size order, aligned pairwise.
//! Expected comparisons are O(n log n); the worst case is O(n^2).
//!
//! ## Failure
//!
//! Any size present on one side but not on the other (or present a different
//! number of times) aborts the whole invocation with a [`MatchError`].
//!
//! ## Example
//!
//! ```
//! use nuts_bolts::{by_size, Bolt, Matcher, MatcherConfig, Nut, PivotRule};
//! use rand::rngs::mock::StepRng;
//!
//! let config = MatcherConfig::new().with_pivot(PivotRule::First);
//! let mut matcher = Matcher::new(config, StepRng::new(0, 1));
//!
//! let events: Vec<_> = matcher
//!     .events(Nut::from_sizes([2, 1]), Bolt::from_sizes([1, 2]), by_size)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! // Root pivot is bolt #0 (size 1), which fits nut #1.
//! assert_eq!((events[0].nut, events[0].bolt, events[0].slot), (1, 0, 0));
//! assert_eq!((events[1].nut, events[1].bolt, events[1].slot), (0, 1, 1));
//! ```
//!
//! [`MatchError`]: crate::MatchError

pub mod partition;
pub mod matcher;

pub use partition::Partition;
pub use matcher::{match_pieces, MatchEvents, Matcher};

//! # Nuts & Bolts
//!
//! Randomized divide-and-conquer matching of nuts to bolts.
//!
//! Given a collection of nuts and a collection of bolts of the same sizes, and a
//! comparator that can only tell whether a nut is smaller than, equal to, or
//! larger than a bolt, the matcher reorders both collections so that position
//! `i` of the nut sequence fits position `i` of the bolt sequence.
//!
//! ## Architecture
//!
//! - **Types**: `Nut`, `Bolt`, match events, output and statistics
//! - **Engine**: three-way partition and the matcher (blocking and streaming)
//! - **Config**: pivot selection rule
//! - **Error**: `MatchError`, raised when the inputs are not a true match
//!
//! ## Design Principles
//!
//! 1. **No sizes**: the engine never looks inside an item, only at the comparator
//! 2. **Injected randomness**: pivots come from a caller-supplied `rand::Rng`
//! 3. **No recursion on the call stack**: pending sub-problems live on a work stack
//! 4. **Streaming**: every matched pair is reported as it is discovered
//!
//! ## Example
//!
//! ```
//! use nuts_bolts::{match_pieces, by_size, Bolt, Nut};
//!
//! let nuts = Nut::from_sizes([30, 10, 50, 20, 40]);
//! let bolts = Bolt::from_sizes([40, 20, 10, 50, 30]);
//!
//! let matched = match_pieces(nuts, bolts, by_size).unwrap();
//!
//! assert_eq!(matched.nut_sizes(), vec![10, 20, 30, 40, 50]);
//! assert_eq!(matched.bolt_sizes(), vec![10, 20, 30, 40, 50]);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Nut, Bolt, MatchEvent, Matched
pub mod types;

/// Matcher configuration
pub mod config;

/// Error type for failed matches
pub mod error;

/// Matching engine: partitioning and the matcher itself
pub mod engine;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{by_size, Bolt, MatchEvent, MatchStats, Matched, Nut, Side};
pub use config::{MatcherConfig, PivotRule};
pub use error::MatchError;
pub use engine::{match_pieces, MatchEvents, Matcher};

//! Core data types for the nuts & bolts matcher
//!
//! Items are opaque: the engine never inspects a size, it only asks the
//! comparator how a nut relates to a bolt.
//!
//! ## Types
//!
//! - [`Nut`] / [`Bolt`]: tagged wrappers over the caller's item type
//! - [`Side`]: which collection an element belongs to
//! - [`MatchEvent`]: one discovered pair, reported by the event stream
//! - [`MatchStats`]: work counters for a single invocation
//! - [`Matched`]: the two correspondingly-ordered output sequences

mod piece;
mod event;
mod matched;

// Re-export all types at module level
pub use piece::{by_size, Bolt, Nut, Side};
pub use event::{MatchEvent, MatchStats};
pub use matched::Matched;

//! Error type for failed matches.
//!
//! Every variant means the same thing to a caller: the two collections are not
//! a true mutual match, so no pairing exists. Retrying cannot help.

use thiserror::Error;

use crate::types::Side;

/// Why a nut/bolt matching could not be completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// An element has no counterpart of equal size in its sub-problem
    #[error("no matching {} found for {side} #{index}", .side.opposite())]
    Unmatched {
        /// Side of the element that could not be matched
        side: Side,
        /// Index of that element in the input collection
        index: usize,
    },

    /// The input collections have different lengths
    #[error("cannot match {nuts} nuts against {bolts} bolts")]
    SizeMismatch {
        /// Number of nuts
        nuts: usize,
        /// Number of bolts
        bolts: usize,
    },

    /// Equal-length inputs, but the sizes between two matched pivots differ:
    /// some nut or bolt in that range has no counterpart
    #[error("sizes differ between sides: {nuts} nuts but {bolts} bolts fall between the same matched pairs")]
    Unbalanced {
        /// Nuts in the sub-range
        nuts: usize,
        /// Bolts in the sub-range
        bolts: usize,
    },

    /// One size occurs a different number of times on each side
    #[error("size occurs {nuts} times among nuts but {bolts} times among bolts")]
    Multiplicity {
        /// Count on the nut side
        nuts: usize,
        /// Count on the bolt side
        bolts: usize,
    },
}

impl MatchError {
    /// Whether the error was caused by malformed input.
    ///
    /// The comparator is the only other collaborator and cannot fail, so this
    /// holds for every current variant.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            MatchError::Unmatched { .. }
                | MatchError::SizeMismatch { .. }
                | MatchError::Unbalanced { .. }
                | MatchError::Multiplicity { .. }
        )
    }
}

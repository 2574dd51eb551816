//! Output of a successful match.

use std::cmp::Ordering;

use crate::types::{Bolt, MatchStats, Nut};

/// Two correspondingly-ordered sequences: `nuts[i]` fits `bolts[i]`.
///
/// Both sequences are permutations of the inputs and come out in ascending
/// size order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matched<T> {
    /// Nuts in output order
    pub nuts: Vec<Nut<T>>,

    /// Bolts in output order, aligned with `nuts`
    pub bolts: Vec<Bolt<T>>,

    /// Work performed to produce this result
    pub stats: MatchStats,
}

impl<T> Matched<T> {
    /// Number of matched pairs
    #[inline]
    pub fn len(&self) -> usize {
        self.nuts.len()
    }

    /// Check if nothing was matched
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nuts.is_empty()
    }

    /// Iterate over the matched pairs in output order
    pub fn pairs(&self) -> impl Iterator<Item = (&Nut<T>, &Bolt<T>)> {
        self.nuts.iter().zip(self.bolts.iter())
    }

    /// Split into the nut and bolt sequences
    pub fn into_parts(self) -> (Vec<Nut<T>>, Vec<Bolt<T>>) {
        (self.nuts, self.bolts)
    }

    /// Check that every position holds a fitting pair under `compare`
    pub fn is_paired_by<F>(&self, mut compare: F) -> bool
    where
        F: FnMut(&Nut<T>, &Bolt<T>) -> Ordering,
    {
        self.nuts.len() == self.bolts.len()
            && self.pairs().all(|(nut, bolt)| compare(nut, bolt) == Ordering::Equal)
    }
}

impl<T: Clone> Matched<T> {
    /// Raw nut items in output order
    pub fn nut_sizes(&self) -> Vec<T> {
        self.nuts.iter().map(|nut| nut.size().clone()).collect()
    }

    /// Raw bolt items in output order
    pub fn bolt_sizes(&self) -> Vec<T> {
        self.bolts.iter().map(|bolt| bolt.size().clone()).collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

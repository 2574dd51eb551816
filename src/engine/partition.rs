//! Three-way partition of one collection around a pivot.
//!
//! The engine partitions *indices* into the owned input collections, so the
//! items themselves never move until the final output is assembled.

use std::cmp::Ordering;

/// Indices split into smaller / equal / larger groups relative to a pivot.
///
/// Input order is preserved inside each group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Elements ranked below the pivot
    pub smaller: Vec<usize>,

    /// Elements of the same size as the pivot
    pub equal: Vec<usize>,

    /// Elements ranked above the pivot
    pub larger: Vec<usize>,
}

impl Partition {
    /// Split `indices` using `rank`, which reports how each element relates to
    /// the pivot (`Less` = smaller than the pivot).
    ///
    /// ## Example
    ///
    /// ```
    /// use nuts_bolts::engine::partition::Partition;
    ///
    /// let sizes = [7, 3, 5, 9, 5];
    /// let p = Partition::split(0..sizes.len(), |i| sizes[i].cmp(&5));
    ///
    /// assert_eq!(p.smaller, vec![1]);
    /// assert_eq!(p.equal, vec![2, 4]);
    /// assert_eq!(p.larger, vec![0, 3]);
    /// ```
    pub fn split<I, F>(indices: I, mut rank: F) -> Self
    where
        I: IntoIterator<Item = usize>,
        F: FnMut(usize) -> Ordering,
    {
        let mut partition = Self::default();
        for index in indices {
            match rank(index) {
                Ordering::Less => partition.smaller.push(index),
                Ordering::Equal => partition.equal.push(index),
                Ordering::Greater => partition.larger.push(index),
            }
        }
        partition
    }

    /// Total number of partitioned elements
    #[inline]
    pub fn len(&self) -> usize {
        self.smaller.len() + self.equal.len() + self.larger.len()
    }

    /// Check if nothing was partitioned
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

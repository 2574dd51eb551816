//! Nut and bolt wrappers.
//!
//! A nut and a bolt may wrap the same item type, but they live in disjoint
//! collections and are only ever compared across sides: nut against bolt,
//! never nut against nut.

use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// Side enum
// ============================================================================

/// Which collection an element belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The nut collection
    Nut,
    /// The bolt collection
    Bolt,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Nut => Side::Bolt,
            Side::Bolt => Side::Nut,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Nut => f.write_str("nut"),
            Side::Bolt => f.write_str("bolt"),
        }
    }
}

// ============================================================================
// Nut / Bolt
// ============================================================================

/// A nut of some (hidden) size.
///
/// ## Example
///
/// ```
/// use nuts_bolts::Nut;
///
/// let nuts = Nut::from_sizes([3, 1, 2]);
/// assert_eq!(nuts.len(), 3);
/// assert_eq!(*nuts[0].size(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nut<T>(pub T);

/// A bolt of some (hidden) size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bolt<T>(pub T);

impl<T> Nut<T> {
    /// Wrap an item as a nut
    pub fn new(size: T) -> Self {
        Self(size)
    }

    /// Borrow the wrapped item
    #[inline]
    pub fn size(&self) -> &T {
        &self.0
    }

    /// Unwrap the item
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Build a nut collection from raw items
    pub fn from_sizes<I: IntoIterator<Item = T>>(sizes: I) -> Vec<Self> {
        sizes.into_iter().map(Self).collect()
    }
}

impl<T> Bolt<T> {
    /// Wrap an item as a bolt
    pub fn new(size: T) -> Self {
        Self(size)
    }

    /// Borrow the wrapped item
    #[inline]
    pub fn size(&self) -> &T {
        &self.0
    }

    /// Unwrap the item
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Build a bolt collection from raw items
    pub fn from_sizes<I: IntoIterator<Item = T>>(sizes: I) -> Vec<Self> {
        sizes.into_iter().map(Self).collect()
    }
}

impl<T: fmt::Display> fmt::Display for Nut<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: fmt::Display> fmt::Display for Bolt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Three-way comparator for items with a natural order.
///
/// `Less` means the nut is too small for the bolt, `Greater` too large,
/// `Equal` means they fit.
///
/// ```
/// use std::cmp::Ordering;
/// use nuts_bolts::{by_size, Bolt, Nut};
///
/// assert_eq!(by_size(&Nut(4), &Bolt(7)), Ordering::Less);
/// assert_eq!(by_size(&Nut(7), &Bolt(7)), Ordering::Equal);
/// ```
pub fn by_size<T: Ord>(nut: &Nut<T>, bolt: &Bolt<T>) -> Ordering {
    nut.0.cmp(&bolt.0)
}

// ============================================================================
// Unit Tests
// ============================================================================

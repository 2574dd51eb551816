//! Matcher configuration.

/// How the pivot bolt of each sub-problem is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PivotRule {
    /// Uniformly random over the current bolts.
    ///
    /// Expected O(n log n) comparisons regardless of input order.
    #[default]
    Random,

    /// Always the first bolt of the current sub-problem.
    ///
    /// Fully deterministic and never touches the RNG, but degrades to O(n^2)
    /// comparisons on already-sorted bolts.
    First,
}

/// Matcher configuration
///
/// ## Example
///
/// ```
/// use nuts_bolts::{MatcherConfig, PivotRule};
///
/// let config = MatcherConfig::new().with_pivot(PivotRule::First);
/// assert_eq!(config.pivot, PivotRule::First);
/// assert_eq!(MatcherConfig::default().pivot, PivotRule::Random);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatcherConfig {
    /// Pivot selection rule
    pub pivot: PivotRule,
}

impl MatcherConfig {
    /// Create the default configuration (random pivots)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pivot rule
    pub fn with_pivot(mut self, pivot: PivotRule) -> Self {
        self.pivot = pivot;
        self
    }
}

use std::ops::Range;

/// A resolved half-open field interval `[lo, hi)`.
///
/// Both ends are already within `0..=field_count`. `lo >= hi` is a valid,
/// empty selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// Inclusive start field index.
    pub lo: usize,
    /// Exclusive end field index.
    pub hi: usize,
}

impl Interval {
    #[must_use]
    pub fn new(lo: usize, hi: usize) -> Self {
        Self { lo, hi }
    }

    /// Returns the number of selected fields. Uses saturating subtraction
    /// since `lo` may exceed `hi`.
    #[must_use]
    pub fn len(self) -> usize {
        self.hi.saturating_sub(self.lo)
    }

    /// Returns true if no field is selected (`lo >= hi`).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// The interval as an index range, collapsed to `lo..lo` when empty so it
    /// can always be used to slice.
    #[must_use]
    pub fn as_range(self) -> Range<usize> {
        self.lo..self.hi.max(self.lo)
    }
}

use super::{Interval, RangeSpec};
use crate::error::RangeError;

/// Resolves one range endpoint against `field_count`.
///
/// Negative indices count back from the end, so `-1` is the position one
/// before the end. Indices below `-field_count` or above `field_count` are
/// rejected.
pub fn resolve_index(index: isize, field_count: usize) -> Result<usize, RangeError> {
    let magnitude = index.unsigned_abs();
    if index < 0 {
        field_count
            .checked_sub(magnitude)
            .ok_or(RangeError::Underflow { index, field_count })
    } else if magnitude > field_count {
        Err(RangeError::Overflow { index, field_count })
    } else {
        Ok(magnitude)
    }
}

/// Parses `range_spec` and resolves it against `field_count`.
pub fn normalize(range_spec: &str, field_count: usize) -> Result<Interval, RangeError> {
    range_spec.parse::<RangeSpec>()?.normalize(field_count)
}

impl RangeSpec {
    /// Resolves both endpoints against `field_count`. A missing start means
    /// `0`, a missing end means `field_count`.
    pub fn normalize(&self, field_count: usize) -> Result<Interval, RangeError> {
        let lo = match self.start {
            Some(index) => resolve_index(index, field_count)?,
            None => 0,
        };
        let hi = match self.end {
            Some(index) => resolve_index(index, field_count)?,
            None => field_count,
        };
        Ok(Interval::new(lo, hi))
    }
}

use std::num::ParseIntError;

/// Failures while parsing a `start:end` range or resolving it against a line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("invalid value for range_str: delimiter (':') not found")]
    MissingDelimiter,
    #[error("invalid value for range_str: more than one occurence of delimiter (':')")]
    MultipleDelimiters,
    #[error("invalid value for range_str: '{text}' is not a decimal integer")]
    InvalidEndpoint {
        text: String,
        #[source]
        source: ParseIntError,
    },
    #[error("index {index} is out of range: underflow for {field_count} fields")]
    Underflow { index: isize, field_count: usize },
    #[error("index {index} is out of range: overflow for {field_count} fields")]
    Overflow { index: isize, field_count: usize },
}

impl RangeError {
    /// True for errors that depend on the line being processed rather than
    /// on the range text itself.
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::Underflow { .. } | Self::Overflow { .. })
    }
}

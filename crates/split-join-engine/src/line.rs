use crate::error::RangeError;
use crate::fields::{join, split_with};
use crate::range::RangeSpec;

/// Applies one delimiter and range to any number of lines.
///
/// The range is parsed once up front, so only out-of-bounds errors can occur
/// per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineProcessor {
    delimiter: char,
    range: RangeSpec,
}

impl LineProcessor {
    #[must_use]
    pub fn new(delimiter: char, range: RangeSpec) -> Self {
        Self { delimiter, range }
    }

    /// Builds a processor from the textual `start:end` form.
    pub fn parse(delimiter: char, range_spec: &str) -> Result<Self, RangeError> {
        Ok(Self::new(delimiter, range_spec.parse()?))
    }

    #[must_use]
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    #[must_use]
    pub fn range(&self) -> RangeSpec {
        self.range
    }

    /// Splits `line`, selects the configured range of fields and joins them.
    pub fn process(&self, line: &str) -> Result<String, RangeError> {
        let fields = split_with(line, self.delimiter, |field| field);
        let interval = self.range.normalize(fields.len())?;
        Ok(join(&fields, self.delimiter, interval))
    }
}

/// Slices the `delimiter`-separated fields of `line` by `range_spec`.
///
/// ```text
/// process("a,b,c", ',', "1:")    == "b,c"
/// process("a,b,c", ',', "-2:-1") == "b"
/// ```
pub fn process(line: &str, delimiter: char, range_spec: &str) -> Result<String, RangeError> {
    LineProcessor::parse(delimiter, range_spec)?.process(line)
}

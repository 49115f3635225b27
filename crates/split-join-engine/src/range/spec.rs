use std::fmt;
use std::str::FromStr;

use crate::error::RangeError;

/// An unresolved `start:end` range as given on the command line.
///
/// `None` stands for an omitted endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeSpec {
    pub start: Option<isize>,
    pub end: Option<isize>,
}

impl RangeSpec {
    #[must_use]
    pub fn new(start: Option<isize>, end: Option<isize>) -> Self {
        Self { start, end }
    }
}

impl FromStr for RangeSpec {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s.split_once(':').ok_or(RangeError::MissingDelimiter)?;
        if end.contains(':') {
            return Err(RangeError::MultipleDelimiters);
        }

        Ok(Self {
            start: parse_endpoint(start)?,
            end: parse_endpoint(end)?,
        })
    }
}

fn parse_endpoint(text: &str) -> Result<Option<isize>, RangeError> {
    if text.is_empty() {
        return Ok(None);
    }
    text.parse()
        .map(Some)
        .map_err(|source| RangeError::InvalidEndpoint {
            text: text.to_string(),
            source,
        })
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{start}")?;
        }
        f.write_str(":")?;
        if let Some(end) = self.end {
            write!(f, "{end}")?;
        }
        Ok(())
    }
}

use split_join_engine::LineProcessor;

use crate::error::CliError;

/// Where input lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// The optional third argument, split on `\n`.
    Text(String),
    Stdin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub processor: LineProcessor,
    pub input: Input,
}

/// Interprets `<delimiter-char> <range-spec> [input-text]`, program name
/// excluded.
///
/// Arguments are taken positionally so that ranges such as `-2:` and a `-`
/// delimiter are never mistaken for options.
pub fn parse(args: &[String]) -> Result<Invocation, CliError> {
    let (delimiter, range_spec, text) = match args {
        [delimiter, range_spec] => (delimiter, range_spec, None),
        [delimiter, range_spec, text] => (delimiter, range_spec, Some(text)),
        _ => return Err(CliError::ArgumentCount(args.len())),
    };

    // Only the first character of the delimiter argument is used.
    let delimiter = delimiter.chars().next().ok_or(CliError::EmptyDelimiter)?;
    let processor = LineProcessor::parse(delimiter, range_spec)?;

    let input = match text {
        Some(text) => Input::Text(text.clone()),
        None => Input::Stdin,
    };

    Ok(Invocation { processor, input })
}

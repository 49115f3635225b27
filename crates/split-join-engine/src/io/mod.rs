use std::io::BufRead;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Splits an in-memory payload into lines on `\n`.
///
/// A trailing newline does not start another line and an empty payload has
/// no lines, so `"a\nb\n"` and `"a\nb"` both give `["a", "b"]`.
pub fn text_lines(text: &str) -> impl Iterator<Item = &str> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    (!text.is_empty())
        .then(|| body.split('\n'))
        .into_iter()
        .flatten()
}

/// Reads `\n`-terminated lines from `reader` with the same rules as
/// [`text_lines`]. Invalid UTF-8 is replaced rather than rejected.
pub fn read_lines<R: BufRead>(reader: R) -> impl Iterator<Item = Result<String, InputError>> {
    reader.split(b'\n').map(|line| -> Result<String, InputError> {
        let bytes = line?;
        Ok(String::from_utf8(bytes)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
    })
}

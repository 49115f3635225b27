/// Splits `line` at every occurrence of `delimiter`.
///
/// Text after the last delimiter always forms a final field, so an empty line
/// gives one empty field and `N` bare delimiters give `N + 1` empty fields.
#[must_use]
pub fn split(line: &str, delimiter: char) -> Vec<String> {
    split_with(line, delimiter, str::to_owned)
}

/// Splits `line` like [`split`], passing each field through `convert`.
///
/// Fields borrow from `line`, so `|field| field` yields a zero-copy
/// `Vec<&str>`.
pub fn split_with<'a, T, F>(line: &'a str, delimiter: char, convert: F) -> Vec<T>
where
    F: FnMut(&'a str) -> T,
{
    line.split(delimiter).map(convert).collect()
}

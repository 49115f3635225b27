use std::borrow::Cow;

use crate::range::Interval;

/// Joins the fields selected by `interval`, with `delimiter` between
/// consecutive fields only.
///
/// An empty interval (`lo >= hi`) gives an empty string.
///
/// # Panics
///
/// Panics if `interval.hi` is greater than `fields.len()`. Intervals produced
/// by [`crate::normalize`] for the same field count never are.
#[must_use]
pub fn join<S: AsRef<str>>(fields: &[S], delimiter: char, interval: Interval) -> String {
    concat(
        fields[interval.as_range()].iter().map(AsRef::<str>::as_ref),
        delimiter,
    )
}

/// Joins like [`join`], rendering each selected field with `convert`.
///
/// # Panics
///
/// Panics if `interval.hi` is greater than `fields.len()`.
pub fn join_with<T, F>(fields: &[T], delimiter: char, interval: Interval, convert: F) -> String
where
    F: FnMut(&T) -> Cow<'_, str>,
{
    concat(fields[interval.as_range()].iter().map(convert), delimiter)
}

fn concat<I>(parts: I, delimiter: char) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        out.push_str(part.as_ref());
    }
    out
}

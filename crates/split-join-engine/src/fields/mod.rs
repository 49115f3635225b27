//! Splitting a line into fields and joining a selection of them back.
//!
//! Both directions come in two flavours: the plain string versions used by
//! the line processor, and `_with` versions that take a conversion closure
//! so callers can work with typed fields (numbers, paths, ...) directly.

mod join;
mod split;

pub use join::{join, join_with};
pub use split::{split, split_with};

//! Python-style `start:end` ranges over a field sequence.

mod interval;
mod normalize;
mod spec;

pub use interval::Interval;
pub use normalize::{normalize, resolve_index};
pub use spec::RangeSpec;

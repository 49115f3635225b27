pub mod error;
pub mod fields;
pub mod io;
pub mod line;
pub mod range;

// Re-export key types for easier usage
pub use error::RangeError;
pub use fields::{join, join_with, split, split_with};
pub use line::{LineProcessor, process};
pub use range::{Interval, RangeSpec, normalize, resolve_index};

//! Streaming added/removed line counts for unified diff output

mod buffer;
mod sink;
mod stat;

pub use sink::{ScanError, SinkOptions, StatSink, count_diff, count_diff_bytes};
pub use stat::{DiffStat, StatFormatter};

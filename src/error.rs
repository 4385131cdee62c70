//! Error types for sequence scans.

use thiserror::Error;

/// Result type alias using the crate's [`StatsError`].
pub type Result<T> = std::result::Result<T, StatsError>;

/// Failures a scan can report.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// The statistic is undefined for a zero-length sequence.
    #[error("empty input: statistic is undefined for a zero-length sequence")]
    EmptyInput,

    /// The exact total does not fit in the output integer type.
    #[error("integer overflow: exact sum does not fit in i64")]
    Overflow,

    /// A scan engine was configured with a zero block size.
    #[error("invalid block size {0}: must be positive")]
    InvalidBlockSize(usize),
}

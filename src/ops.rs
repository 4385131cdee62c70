//! Free-function entry points over slices.
//!
//! Each function wraps the matching problem in a [`ScanEngine`] with the
//! default block size.

use std::fmt;

use crate::error::Result;
use crate::problems::{
    lis::{self, LisProblem},
    lis_patience::LisPatienceProblem,
    max::MaxProblem,
    sum::{OverflowPolicy, SumProblem},
};
use crate::ScanEngine;

/// Sum of `seq` with two's-complement wrapping on overflow. Empty input
/// sums to 0.
pub fn sum(seq: &[i64]) -> i64 {
    ScanEngine::new(SumProblem::new(seq))
        .run_detached()
        .expect("wrapping sum is defined for every input")
}

/// Sum of `seq`, failing with [`StatsError::Overflow`](crate::StatsError::Overflow)
/// if the exact total does not fit in `i64`.
pub fn checked_sum(seq: &[i64]) -> Result<i64> {
    ScanEngine::new(SumProblem::with_policy(seq, OverflowPolicy::Checked)).run_detached()
}

/// Largest element of `seq`.
///
/// Fails with [`StatsError::EmptyInput`](crate::StatsError::EmptyInput) for
/// an empty slice.
pub fn max<T: Ord + Copy>(seq: &[T]) -> Result<T> {
    ScanEngine::new(MaxProblem::new(seq)).run()
}

/// Length of the longest strictly increasing subsequence (quadratic DP).
pub fn lis_length<T: Ord>(seq: &[T]) -> usize {
    ScanEngine::new(LisProblem::new(seq))
        .run()
        .expect("LIS length is defined for every input")
}

/// Same result as [`lis_length`] in O(n log n).
pub fn lis_length_fast<T: Ord>(seq: &[T]) -> usize {
    ScanEngine::new(LisPatienceProblem::new(seq))
        .run()
        .expect("LIS length is defined for every input")
}

/// Indices of one longest strictly increasing subsequence.
pub fn lis_indices<T: Ord>(seq: &[T]) -> Vec<usize> {
    lis::lis_indices(seq)
}

/// The three statistics of one sequence.
///
/// Displays as three lines: sum, max, LIS length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArraySummary {
    pub sum: i64,
    pub max: i64,
    pub lis_length: usize,
}

impl ArraySummary {
    /// Compute all three statistics; fails on empty input because the
    /// maximum is undefined.
    pub fn of(seq: &[i64]) -> Result<Self> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("array_summary", len = seq.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        Ok(Self {
            sum: sum(seq),
            max: max(seq)?,
            lis_length: lis_length(seq),
        })
    }
}

impl fmt::Display for ArraySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.sum)?;
        writeln!(f, "{}", self.max)?;
        writeln!(f, "{}", self.lis_length)
    }
}

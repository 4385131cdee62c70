//! Array statistics as layered scans.
//!
//! This crate computes three statistics over integer sequences: the sum, the
//! maximum and the length of the longest strictly increasing subsequence
//! (LIS). Each one is modelled as a layered scan so a single engine can
//! drive all of them.
//!
//! ## Core idea
//! 1. Model the statistic as a scan: layer `i` consumes element `i` and maps
//!    a frontier to the next frontier.
//! 2. Implement the [`ScanProblem`] trait for that scan.
//! 3. Let [`ScanEngine`] walk the layers block by block and extract the
//!    answer. Problems whose blocks are independent ([`traits::DetachedBlocks`])
//!    can also be summarized block-parallel with the `parallel` feature.
//!
//! ## Quick start
//! ```
//! use array_stats::{lis_length, max, sum, StatsError};
//!
//! let nums = [2, 7, 11, 15];
//! assert_eq!(sum(&nums), 35);
//! assert_eq!(max(&nums), Ok(15));
//! assert_eq!(lis_length(&nums), 4);
//!
//! assert_eq!(max::<i64>(&[]), Err(StatsError::EmptyInput));
//! ```
//!
//! ## Built-in problems
//! The `problems` module contains:
//! - Sum (wrapping or checked narrowing to `i64`)
//! - Maximum (fails on empty input)
//! - LIS length, quadratic reference DP with witness reconstruction
//! - LIS length, patience sorting

pub mod blocks;
pub mod builder;
pub mod engine;
pub mod error;
pub mod ops;
pub mod problems;
pub mod traits;
pub mod utils;

pub use crate::builder::ScanEngineBuilder;
pub use crate::engine::ScanEngine;
pub use crate::error::{Result, StatsError};
pub use crate::ops::{
    checked_sum, lis_indices, lis_length, lis_length_fast, max, sum, ArraySummary,
};
pub use crate::traits::ScanProblem;

//! Statistics implemented as [`ScanProblem`](crate::traits::ScanProblem)s.
//!
//! - [`sum`]          : arithmetic sum with a wrapping or checked policy.
//! - [`max`]          : maximum element; undefined for empty input.
//! - [`lis`]          : longest strictly increasing subsequence, O(n²) DP.
//! - [`lis_patience`] : the same length via patience sorting, O(n log n).

pub mod lis;
pub mod lis_patience;
pub mod max;
pub mod sum;

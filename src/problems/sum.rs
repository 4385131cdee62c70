//! Sum of an `i64` sequence as a layered scan.
//!
//! The frontier carries the exact running total in `i128`, which cannot
//! overflow for any slice that fits in memory. The [`OverflowPolicy`] only
//! decides how that exact total is narrowed back to `i64` at the end:
//! - [`OverflowPolicy::Wrapping`]: two's-complement wrap, i.e. the total
//!   modulo 2⁶⁴. This is what repeated native `i64` addition would produce.
//! - [`OverflowPolicy::Checked`]: [`StatsError::Overflow`] if the total is
//!   out of range. Intermediate prefix sums are never checked, so
//!   `[i64::MAX, 1, -1]` sums to `i64::MAX`.
//!
//! Block summaries are partial totals and do not depend on the incoming
//! frontier, so the problem implements [`DetachedBlocks`].

use crate::error::{Result, StatsError};
use crate::traits::{DetachedBlocks, ScanProblem, SummaryApply};

/// How the exact total is narrowed to `i64`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    #[default]
    Wrapping,
    Checked,
}

#[derive(Clone)]
pub struct SumProblem<'a> {
    pub seq: &'a [i64],
    pub overflow: OverflowPolicy,
}

/// Exact running total after a prefix of the sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SumFrontier {
    pub total: i128,
}

/// Σ[a,b]: exact total of `seq[a..b]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SumSummary {
    pub partial: i128,
}

impl<'a> SumProblem<'a> {
    /// Wrapping sum over `seq`.
    pub fn new(seq: &'a [i64]) -> Self {
        Self::with_policy(seq, OverflowPolicy::Wrapping)
    }

    pub fn with_policy(seq: &'a [i64], overflow: OverflowPolicy) -> Self {
        Self { seq, overflow }
    }

    fn block_total(&self, a: usize, b: usize) -> i128 {
        self.seq[a..b].iter().map(|&x| i128::from(x)).sum()
    }
}

impl SummaryApply<SumFrontier> for SumSummary {
    fn apply(&self, frontier: &SumFrontier) -> SumFrontier {
        SumFrontier {
            total: frontier.total + self.partial,
        }
    }
}

impl<'a> ScanProblem for SumProblem<'a> {
    type Frontier = SumFrontier;
    type Summary = SumSummary;
    type Cost = i64;

    fn num_layers(&self) -> usize {
        self.seq.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        SumFrontier { total: 0 }
    }

    fn forward_step(&self, layer: usize, frontier_i: &Self::Frontier) -> Self::Frontier {
        SumFrontier {
            total: frontier_i.total + i128::from(self.seq[layer]),
        }
    }

    fn summarize_block(
        &self,
        a: usize,
        b: usize,
        frontier_a: &Self::Frontier,
    ) -> (Self::Frontier, Self::Summary) {
        let sigma = SumSummary {
            partial: self.block_total(a, b),
        };
        (sigma.apply(frontier_a), sigma)
    }

    fn merge_summary(&self, left: &Self::Summary, right: &Self::Summary) -> Self::Summary {
        SumSummary {
            partial: left.partial + right.partial,
        }
    }

    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Result<Self::Cost> {
        match self.overflow {
            // Truncating an i128 keeps the low 64 bits: the total modulo 2^64.
            OverflowPolicy::Wrapping => Ok(frontier_t.total as i64),
            OverflowPolicy::Checked => {
                i64::try_from(frontier_t.total).map_err(|_| StatsError::Overflow)
            }
        }
    }
}

impl<'a> DetachedBlocks for SumProblem<'a> {
    fn summarize_detached(&self, a: usize, b: usize) -> Self::Summary {
        SumSummary {
            partial: self.block_total(a, b),
        }
    }
}

//! Maximum element as a layered scan.
//!
//! The frontier is the largest element seen so far, `None` before the first
//! element. An empty sequence has no maximum: [`extract_cost`] fails with
//! [`StatsError::EmptyInput`] rather than returning a sentinel such as
//! `i64::MIN`, which could not be told apart from a real element.
//!
//! [`extract_cost`]: crate::traits::ScanProblem::extract_cost

use crate::error::{Result, StatsError};
use crate::traits::{DetachedBlocks, ScanProblem, SummaryApply};

#[derive(Clone)]
pub struct MaxProblem<'a, T> {
    pub seq: &'a [T],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxFrontier<T> {
    pub best: Option<T>,
}

/// Σ[a,b]: largest element of `seq[a..b]`, `None` for an empty block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxSummary<T> {
    pub best: Option<T>,
}

impl<'a, T: Ord + Copy> MaxProblem<'a, T> {
    pub fn new(seq: &'a [T]) -> Self {
        Self { seq }
    }

    fn block_max(&self, a: usize, b: usize) -> Option<T> {
        self.seq[a..b].iter().copied().max()
    }
}

fn max_opt<T: Ord>(left: Option<T>, right: Option<T>) -> Option<T> {
    match (left, right) {
        (Some(l), Some(r)) => Some(l.max(r)),
        (l, None) => l,
        (None, r) => r,
    }
}

impl<T: Ord + Copy> SummaryApply<MaxFrontier<T>> for MaxSummary<T> {
    fn apply(&self, frontier: &MaxFrontier<T>) -> MaxFrontier<T> {
        MaxFrontier {
            best: max_opt(frontier.best, self.best),
        }
    }
}

impl<'a, T: Ord + Copy> ScanProblem for MaxProblem<'a, T> {
    type Frontier = MaxFrontier<T>;
    type Summary = MaxSummary<T>;
    type Cost = T;

    fn num_layers(&self) -> usize {
        self.seq.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        MaxFrontier { best: None }
    }

    fn forward_step(&self, layer: usize, frontier_i: &Self::Frontier) -> Self::Frontier {
        MaxFrontier {
            best: max_opt(frontier_i.best, Some(self.seq[layer])),
        }
    }

    fn summarize_block(
        &self,
        a: usize,
        b: usize,
        frontier_a: &Self::Frontier,
    ) -> (Self::Frontier, Self::Summary) {
        let sigma = MaxSummary {
            best: self.block_max(a, b),
        };
        (sigma.apply(frontier_a), sigma)
    }

    fn merge_summary(&self, left: &Self::Summary, right: &Self::Summary) -> Self::Summary {
        MaxSummary {
            best: max_opt(left.best, right.best),
        }
    }

    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Result<Self::Cost> {
        frontier_t.best.ok_or(StatsError::EmptyInput)
    }
}

impl<'a, T: Ord + Copy> DetachedBlocks for MaxProblem<'a, T> {
    fn summarize_detached(&self, a: usize, b: usize) -> Self::Summary {
        MaxSummary {
            best: self.block_max(a, b),
        }
    }
}

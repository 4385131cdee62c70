//! LIS length in O(n log n) via patience sorting.
//!
//! The frontier keeps `tails`, where `tails[k]` is the index of the smallest
//! element that ends some strictly increasing subsequence of length `k + 1`
//! seen so far. The values `seq[tails[k]]` are strictly increasing in `k`, so
//! each step is one binary search:
//! - find the first tail whose value is `>= seq[i]` (lower bound);
//! - replace it with `i`, or push `i` if every tail is smaller.
//!
//! Using the lower bound (not the upper bound) makes equal elements replace
//! rather than extend, matching the strict quadratic reference in
//! [`super::lis`]. The answer is `tails.len()`.

use crate::error::Result;
use crate::traits::ScanProblem;

#[derive(Clone)]
pub struct LisPatienceProblem<'a, T> {
    pub seq: &'a [T],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatienceFrontier {
    pub tails: Vec<usize>,
}

#[derive(Clone, Debug)]
pub struct PatienceSummary {
    pub end_frontier: PatienceFrontier,
}

impl<'a, T: Ord> LisPatienceProblem<'a, T> {
    pub fn new(seq: &'a [T]) -> Self {
        Self { seq }
    }

    fn place(&self, layer: usize, frontier: &mut PatienceFrontier) {
        let x = &self.seq[layer];
        let pos = frontier.tails.partition_point(|&t| self.seq[t] < *x);
        if pos == frontier.tails.len() {
            frontier.tails.push(layer);
        } else {
            frontier.tails[pos] = layer;
        }
    }
}

impl<'a, T: Ord> ScanProblem for LisPatienceProblem<'a, T> {
    type Frontier = PatienceFrontier;
    type Summary = PatienceSummary;
    type Cost = usize;

    fn num_layers(&self) -> usize {
        self.seq.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        PatienceFrontier { tails: Vec::new() }
    }

    fn forward_step(&self, layer: usize, frontier_i: &Self::Frontier) -> Self::Frontier {
        let mut next = frontier_i.clone();
        self.place(layer, &mut next);
        next
    }

    fn summarize_block(
        &self,
        a: usize,
        b: usize,
        frontier_a: &Self::Frontier,
    ) -> (Self::Frontier, Self::Summary) {
        let f = self.advance_block(a, b, frontier_a.clone());
        (f.clone(), PatienceSummary { end_frontier: f })
    }

    fn advance_block(&self, a: usize, b: usize, frontier_a: Self::Frontier) -> Self::Frontier {
        let mut f = frontier_a;
        for layer in a..b {
            self.place(layer, &mut f);
        }
        f
    }

    fn merge_summary(&self, _left: &Self::Summary, right: &Self::Summary) -> Self::Summary {
        right.clone()
    }

    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Result<Self::Cost> {
        Ok(frontier_t.tails.len())
    }
}

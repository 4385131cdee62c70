//! Longest strictly increasing subsequence (LIS) length, quadratic DP.
//!
//! Layers are positions in the sequence. The frontier at layer `i` holds the
//! DP prefix `dp[0..i]`, where `dp[k]` is the length of the longest strictly
//! increasing subsequence ending at index `k`:
//!
//! ```text
//! dp[i] = 1 + max { dp[j] : j < i, seq[j] < seq[i] }    (or 1 if no such j)
//! ```
//!
//! The answer is `max(dp)`, or 0 for an empty sequence. Equal elements never
//! extend a subsequence.
//!
//! Every step reads the whole prefix, so block summaries cannot be computed
//! in isolation: Σ[a,b] just records the frontier at `b`.

use crate::error::Result;
use crate::traits::ScanProblem;

#[derive(Clone)]
pub struct LisProblem<'a, T> {
    pub seq: &'a [T],
}

/// DP prefix plus its running maximum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LisFrontier {
    pub dp: Vec<usize>,
    pub best: usize,
}

/// Summary Σ[a,b]: the frontier at layer b.
#[derive(Clone, Debug)]
pub struct LisSummary {
    pub end_frontier: LisFrontier,
}

impl<'a, T: Ord> LisProblem<'a, T> {
    pub fn new(seq: &'a [T]) -> Self {
        Self { seq }
    }

    /// Append `dp[layer]` to a prefix holding `dp[0..layer]`.
    fn extend(&self, layer: usize, frontier: &mut LisFrontier) {
        debug_assert_eq!(frontier.dp.len(), layer);
        let x = &self.seq[layer];
        let mut len = 1;
        for (j, &dj) in frontier.dp.iter().enumerate() {
            if self.seq[j] < *x {
                len = len.max(dj + 1);
            }
        }
        frontier.dp.push(len);
        frontier.best = frontier.best.max(len);
    }

    /// The full `dp` table for the sequence.
    pub fn dp_table(&self) -> Vec<usize> {
        self.advance_block(0, self.seq.len(), self.init_frontier()).dp
    }

    /// Indices of one longest strictly increasing subsequence.
    ///
    /// Backtracks over [`dp_table`](Self::dp_table): ends at the earliest
    /// index whose `dp` value is maximal, and each predecessor is the
    /// earliest `j` with `seq[j] < seq[i]` and `dp[j] + 1 == dp[i]`. Empty for
    /// an empty sequence.
    pub fn witness(&self) -> Vec<usize> {
        let dp = self.dp_table();
        let mut end = None;
        for (i, &d) in dp.iter().enumerate() {
            if end.map_or(true, |e: usize| d > dp[e]) {
                end = Some(i);
            }
        }

        let mut rev_path = Vec::with_capacity(end.map_or(0, |e| dp[e]));
        let mut cur = end;
        while let Some(i) = cur {
            rev_path.push(i);
            cur = (0..i).find(|&j| self.seq[j] < self.seq[i] && dp[j] + 1 == dp[i]);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(len = rev_path.len(), "reconstructed increasing subsequence");

        rev_path.reverse();
        rev_path
    }
}

impl<'a, T: Ord> ScanProblem for LisProblem<'a, T> {
    type Frontier = LisFrontier;
    type Summary = LisSummary;
    type Cost = usize;

    fn num_layers(&self) -> usize {
        self.seq.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        LisFrontier {
            dp: Vec::with_capacity(self.seq.len()),
            best: 0,
        }
    }

    fn forward_step(&self, layer: usize, frontier_i: &Self::Frontier) -> Self::Frontier {
        let mut next = frontier_i.clone();
        self.extend(layer, &mut next);
        next
    }

    fn summarize_block(
        &self,
        a: usize,
        b: usize,
        frontier_a: &Self::Frontier,
    ) -> (Self::Frontier, Self::Summary) {
        let f = self.advance_block(a, b, frontier_a.clone());
        (f.clone(), LisSummary { end_frontier: f })
    }

    fn advance_block(&self, a: usize, b: usize, frontier_a: Self::Frontier) -> Self::Frontier {
        let mut f = frontier_a;
        for layer in a..b {
            self.extend(layer, &mut f);
        }
        f
    }

    fn merge_summary(&self, _left: &Self::Summary, right: &Self::Summary) -> Self::Summary {
        // Σ[a,c].end_frontier is the frontier at c, which Σ[b,c] already holds.
        right.clone()
    }

    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Result<Self::Cost> {
        Ok(frontier_t.best)
    }
}

/// Indices of one longest strictly increasing subsequence of `seq`.
///
/// See [`LisProblem::witness`] for the tie-breaking rule.
pub fn lis_indices<T: Ord>(seq: &[T]) -> Vec<usize> {
    LisProblem::new(seq).witness()
}

//! Generic block-wise scan engine.
//!
//! The engine walks the layers of a [`ScanProblem`] in consecutive blocks:
//! 1. Each block [a, b) is summarized from the frontier at `a`, producing the
//!    frontier at `b` and Σ[a,b].
//! 2. The cost is read off the frontier at layer T.
//!
//! Problems implementing [`DetachedBlocks`] can additionally be run with
//! [`ScanEngine::run_detached`], which summarizes blocks independently (on
//! the rayon pool with the `parallel` feature) and folds the merged summary
//! onto the initial frontier.

use std::ops::Range;

use crate::blocks::BlockSummary;
use crate::error::Result;
use crate::traits::{DetachedBlocks, ScanProblem, SummaryApply};
use crate::utils::{block_ranges, default_block_size};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Block-wise scan engine for a given problem instance `P`.
///
/// ```
/// use array_stats::{problems::lis::LisProblem, ScanEngine};
///
/// let seq = [10, 9, 2, 5, 3, 7, 101, 18];
/// let engine = ScanEngine::new(LisProblem::new(&seq));
/// assert_eq!(engine.run().unwrap(), 4);
/// ```
pub struct ScanEngine<P: ScanProblem> {
    problem: P,
    block_size: usize,
}

impl<P: ScanProblem> ScanEngine<P> {
    /// Create a new engine with a heuristic block size (≈ √T).
    pub fn new(problem: P) -> Self {
        let b = default_block_size(problem.num_layers());
        Self::with_block_size(problem, b)
    }

    /// Create a new engine with an explicit block size.
    ///
    /// # Panics
    /// Panics if `block_size == 0`. Use
    /// [`ScanEngineBuilder::try_build`](crate::builder::ScanEngineBuilder::try_build)
    /// for a fallible variant.
    pub fn with_block_size(problem: P, block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        Self {
            problem,
            block_size,
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Consume the engine, returning the wrapped problem.
    pub fn into_problem(self) -> P {
        self.problem
    }

    /// Thread the frontier through consecutive blocks covering [0, T).
    ///
    /// `step` receives each block's layers and the frontier at its start, and
    /// returns the frontier at its end.
    fn scan_frontier<F>(&self, mut step: F) -> P::Frontier
    where
        F: FnMut(Range<usize>, P::Frontier) -> P::Frontier,
    {
        let mut frontier = self.problem.init_frontier();
        for layers in block_ranges(self.problem.num_layers(), self.block_size) {
            #[cfg(feature = "tracing")]
            let span =
                tracing::trace_span!("scan_block", start = layers.start, end = layers.end);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            frontier = step(layers, frontier);
        }
        frontier
    }

    /// Summarize consecutive blocks covering [0, T), threading the frontier.
    ///
    /// Returns the per-block summaries and the frontier at layer T.
    fn build_block_summaries(&self) -> (Vec<BlockSummary<P::Summary>>, P::Frontier) {
        let t = self.problem.num_layers();
        let mut blocks = Vec::with_capacity(t.div_ceil(self.block_size));
        let frontier_t = self.scan_frontier(|layers, frontier| {
            let (frontier_end, sigma) =
                self.problem.summarize_block(layers.start, layers.end, &frontier);
            blocks.push(BlockSummary::new(layers, sigma));
            frontier_end
        });
        (blocks, frontier_t)
    }

    /// Run the scan and return its cost.
    ///
    /// Fails only when the problem's cost is undefined for its input (for
    /// example the maximum of an empty sequence).
    ///
    /// Only the current frontier is kept alive; no block summaries are built.
    pub fn run(&self) -> Result<P::Cost> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "scan_run",
            layers = self.problem.num_layers(),
            block_size = self.block_size
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let frontier_t = self.scan_frontier(|layers, frontier| {
            self.problem.advance_block(layers.start, layers.end, frontier)
        });
        self.problem.extract_cost(&frontier_t)
    }

    /// Run the scan, also returning the block summaries it produced.
    ///
    /// The blocks are adjacent, in layer order, and cover [0, T) exactly.
    pub fn run_with_blocks(&self) -> Result<(P::Cost, Vec<BlockSummary<P::Summary>>)> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "scan_run_with_blocks",
            layers = self.problem.num_layers(),
            block_size = self.block_size
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (blocks, frontier_t) = self.build_block_summaries();
        let cost = self.problem.extract_cost(&frontier_t)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(blocks = blocks.len(), "scan complete");

        Ok((cost, blocks))
    }

    fn fold_detached(&self, merged: Option<P::Summary>) -> Result<P::Cost>
    where
        P::Summary: SummaryApply<P::Frontier>,
    {
        let frontier_0 = self.problem.init_frontier();
        let frontier_t = match merged {
            Some(sigma) => sigma.apply(&frontier_0),
            None => frontier_0,
        };
        self.problem.extract_cost(&frontier_t)
    }
}

#[cfg(not(feature = "parallel"))]
impl<P> ScanEngine<P>
where
    P: DetachedBlocks,
    P::Summary: SummaryApply<P::Frontier>,
{
    /// Summarize every block independently, merge left to right, and apply
    /// the merged summary to the initial frontier.
    ///
    /// Always agrees with [`run`](Self::run).
    pub fn run_detached(&self) -> Result<P::Cost> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("scan_run_detached", block_size = self.block_size);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let merged = block_ranges(self.problem.num_layers(), self.block_size)
            .map(|layers| self.problem.summarize_detached(layers.start, layers.end))
            .reduce(|left, right| self.problem.merge_summary(&left, &right));
        self.fold_detached(merged)
    }
}

#[cfg(feature = "parallel")]
impl<P> ScanEngine<P>
where
    P: DetachedBlocks + Sync,
    P::Summary: SummaryApply<P::Frontier> + Send,
{
    /// Summarize every block independently on the rayon pool, merge in layer
    /// order, and apply the merged summary to the initial frontier.
    ///
    /// Always agrees with [`run`](Self::run).
    pub fn run_detached(&self) -> Result<P::Cost> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("scan_run_detached", block_size = self.block_size);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let problem = &self.problem;
        let ranges: Vec<_> = block_ranges(problem.num_layers(), self.block_size).collect();
        let merged = ranges
            .into_par_iter()
            .map(|layers| problem.summarize_detached(layers.start, layers.end))
            .reduce_with(|left, right| problem.merge_summary(&left, &right));
        self.fold_detached(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts consumed layers; undefined on zero layers.
    struct CountProblem {
        t: usize,
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Count(usize);

    impl SummaryApply<Count> for Count {
        fn apply(&self, frontier: &Count) -> Count {
            Count(frontier.0 + self.0)
        }
    }

    impl ScanProblem for CountProblem {
        type Frontier = Count;
        type Summary = Count;
        type Cost = usize;

        fn num_layers(&self) -> usize {
            self.t
        }
        fn init_frontier(&self) -> Self::Frontier {
            Count(0)
        }
        fn forward_step(&self, _layer: usize, f: &Self::Frontier) -> Self::Frontier {
            Count(f.0 + 1)
        }
        fn summarize_block(
            &self,
            a: usize,
            b: usize,
            frontier_a: &Self::Frontier,
        ) -> (Self::Frontier, Self::Summary) {
            (Count(frontier_a.0 + (b - a)), Count(b - a))
        }
        fn merge_summary(&self, left: &Self::Summary, right: &Self::Summary) -> Self::Summary {
            Count(left.0 + right.0)
        }
        fn extract_cost(&self, frontier_t: &Self::Frontier) -> Result<Self::Cost> {
            if frontier_t.0 == 0 {
                Err(StatsError::EmptyInput)
            } else {
                Ok(frontier_t.0)
            }
        }
    }

    impl DetachedBlocks for CountProblem {
        fn summarize_detached(&self, a: usize, b: usize) -> Self::Summary {
            Count(b - a)
        }
    }

    #[test]
    fn block_summaries_cover_all_layers() {
        let engine = ScanEngine::with_block_size(CountProblem { t: 10 }, 4);
        let (cost, blocks) = engine.run_with_blocks().unwrap();
        assert_eq!(cost, 10);
        let spans: Vec<_> = blocks.iter().map(|b| b.layers.clone()).collect();
        assert_eq!(spans, vec![0..4, 4..8, 8..10]);
        assert!(blocks.windows(2).all(|w| w[0].is_adjacent_to(&w[1])));
    }

    #[test]
    fn default_block_size_is_sqrt() {
        let engine = ScanEngine::new(CountProblem { t: 50 });
        assert_eq!(engine.block_size(), 8);
    }

    #[test]
    fn zero_layers_reach_extract_cost() {
        let engine = ScanEngine::new(CountProblem { t: 0 });
        assert_eq!(engine.run(), Err(StatsError::EmptyInput));
        assert_eq!(engine.run_detached(), Err(StatsError::EmptyInput));
    }

    #[test]
    fn detached_matches_sequential() {
        for b in 1..6 {
            let engine = ScanEngine::with_block_size(CountProblem { t: 13 }, b);
            assert_eq!(engine.run(), engine.run_detached());
        }
    }

    /// Live and peak counts of outstanding summaries.
    #[derive(Default)]
    struct Counters {
        live: Cell<usize>,
        peak: Cell<usize>,
    }

    struct Token(Rc<Counters>);

    impl Token {
        fn new(counters: &Rc<Counters>) -> Self {
            let live = counters.live.get() + 1;
            counters.live.set(live);
            counters.peak.set(counters.peak.get().max(live));
            Token(Rc::clone(counters))
        }
    }

    impl Clone for Token {
        fn clone(&self) -> Self {
            Token::new(&self.0)
        }
    }

    impl Drop for Token {
        fn drop(&mut self) {
            self.0.live.set(self.0.live.get() - 1);
        }
    }

    struct TrackedProblem {
        t: usize,
        counters: Rc<Counters>,
    }

    impl ScanProblem for TrackedProblem {
        type Frontier = usize;
        type Summary = Token;
        type Cost = usize;

        fn num_layers(&self) -> usize {
            self.t
        }
        fn init_frontier(&self) -> Self::Frontier {
            0
        }
        fn forward_step(&self, _layer: usize, f: &Self::Frontier) -> Self::Frontier {
            f + 1
        }
        fn summarize_block(
            &self,
            a: usize,
            b: usize,
            frontier_a: &Self::Frontier,
        ) -> (Self::Frontier, Self::Summary) {
            (frontier_a + (b - a), Token::new(&self.counters))
        }
        fn merge_summary(&self, _left: &Self::Summary, right: &Self::Summary) -> Self::Summary {
            right.clone()
        }
        fn extract_cost(&self, frontier_t: &Self::Frontier) -> Result<Self::Cost> {
            Ok(*frontier_t)
        }
    }

    #[test]
    fn run_holds_at_most_one_summary() {
        let counters = Rc::new(Counters::default());
        let engine = ScanEngine::with_block_size(
            TrackedProblem {
                t: 100,
                counters: Rc::clone(&counters),
            },
            10,
        );
        assert_eq!(engine.run(), Ok(100));
        assert!(counters.peak.get() <= 1, "peak {}", counters.peak.get());
        assert_eq!(counters.live.get(), 0);

        let (_, blocks) = engine.run_with_blocks().unwrap();
        assert_eq!(counters.peak.get(), blocks.len());
        assert_eq!(blocks.len(), 10);
    }

    #[test]
    #[should_panic(expected = "block_size must be positive")]
    fn with_block_size_panics_on_zero() {
        let _ = ScanEngine::with_block_size(CountProblem { t: 1 }, 0);
    }
}

//! Core trait definitions for layered sequence scans.
//!
//! Every statistic in this crate is phrased as a *layered* scan over a
//! sequence: layer `i` consumes element `i` and maps the frontier (the scan
//! state after `i` elements) to the frontier after `i + 1` elements.
//!
//! The trait encodes:
//! - Layered structure: layers 0..=T with one transition per element.
//! - Frontiers: everything the scan needs to continue from a layer.
//! - Interval summaries: composable Σ[a,b] for blocks of layers.
//! - Cost extraction: the final answer, which may be undefined (empty input).
//!
//! [`crate::engine::ScanEngine`] drives a problem block by block using only
//! these primitives.

use crate::error::Result;

/// Trait for a layered scan over a fixed input sequence.
///
/// A `ScanProblem` corresponds to a *fixed* instance: in practice a struct
/// borrowing the input slice plus any policy knobs.
///
/// Semantics:
/// - There are `T = num_layers()` steps, one per element.
/// - `forward_step(i, frontier)` maps layer `i` -> layer `i+1`.
/// - After T steps, `extract_cost` reads the answer off the final frontier.
pub trait ScanProblem {
    /// Scan state at a layer (running total, dp prefix, tails array, ...).
    type Frontier: Clone;

    /// Interval summary type Σ[a,b].
    ///
    /// [`merge_summary`](Self::merge_summary) must be associative across
    /// chains of adjacent blocks.
    type Summary: Clone;

    /// Answer type.
    type Cost: Copy;

    /// Number of layers `T`, i.e. the sequence length.
    fn num_layers(&self) -> usize;

    /// Frontier at layer 0, before any element is consumed.
    fn init_frontier(&self) -> Self::Frontier;

    /// Perform one step: consume element `layer`, producing layer `layer+1`.
    ///
    /// Must only depend on `frontier_i` and fixed problem data. The engine
    /// never calls this; it is the single-step reference that
    /// [`summarize_block`](Self::summarize_block) and
    /// [`advance_block`](Self::advance_block) must agree with when folded
    /// over [a, b).
    fn forward_step(&self, layer: usize, frontier_i: &Self::Frontier) -> Self::Frontier;

    /// Summarize the block of layers [a, b) starting from `frontier_a`.
    ///
    /// Returns the frontier at layer `b` and the summary Σ[a,b].
    fn summarize_block(
        &self,
        a: usize,
        b: usize,
        frontier_a: &Self::Frontier,
    ) -> (Self::Frontier, Self::Summary);

    /// Advance `frontier_a` across [a, b) without building a summary.
    ///
    /// [`crate::engine::ScanEngine::run`] only needs the frontier, so problems
    /// whose summaries are as large as the frontier should override this to
    /// update it in place.
    fn advance_block(&self, a: usize, b: usize, frontier_a: Self::Frontier) -> Self::Frontier {
        self.summarize_block(a, b, &frontier_a).0
    }

    /// Merge two adjacent summaries: Σ[a,c] = Σ[a,b] ⊕ Σ[b,c].
    fn merge_summary(&self, left: &Self::Summary, right: &Self::Summary) -> Self::Summary;

    /// Extract the answer from the frontier at layer T.
    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Result<Self::Cost>;
}

/// Apply an interval summary to a frontier, advancing it across the interval.
pub trait SummaryApply<F> {
    fn apply(&self, frontier: &F) -> F;
}

/// Problems whose block summaries do not depend on the incoming frontier.
///
/// For these, any block can be summarized in isolation and the summaries
/// folded afterwards, which lets [`crate::engine::ScanEngine::run_detached`]
/// process blocks in any order (or in parallel).
///
/// The engine additionally requires `Self::Summary: SummaryApply<Self::Frontier>`
/// to fold the merged summary onto the initial frontier.
pub trait DetachedBlocks: ScanProblem {
    /// Summarize [a, b) without knowledge of the frontier at `a`.
    fn summarize_detached(&self, a: usize, b: usize) -> Self::Summary;
}

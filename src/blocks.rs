//! Block-level records produced by the engine.
//!
//! Each `BlockSummary` pairs an interval [start, end) of layers (i.e. a
//! contiguous run of sequence elements) with its summary Σ[start,end].

use std::ops::Range;

/// Summary for a contiguous interval of layers [start, end).
#[derive(Debug, Clone, PartialEq)]
pub struct BlockSummary<S> {
    /// Layers covered; `layers.start` is the index of the first element
    /// consumed by this block.
    pub layers: Range<usize>,
    /// Interval summary Σ[start, end].
    pub summary: S,
}

impl<S> BlockSummary<S> {
    pub fn new(layers: Range<usize>, summary: S) -> Self {
        Self { layers, summary }
    }

    /// Number of elements the block consumed.
    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// True if `next` starts exactly where this block ends.
    #[inline]
    pub fn is_adjacent_to(&self, next: &BlockSummary<S>) -> bool {
        self.layers.end == next.layers.start
    }
}

//! Block sizing helpers shared by the engine and its builder.

use std::ops::Range;

/// Square-root block size for a scan over `num_layers` layers.
///
/// Used by [`crate::engine::ScanEngine::new`]; yields roughly √T blocks of
/// roughly √T layers each. Never returns zero.
#[inline]
pub fn default_block_size(num_layers: usize) -> usize {
    if num_layers <= 1 {
        1
    } else {
        (num_layers as f64).sqrt().ceil() as usize
    }
}

/// Split the layers `[0, num_layers)` into consecutive ranges of at most
/// `block_size` layers. Yields nothing when `num_layers == 0`.
///
/// # Panics
/// Panics if `block_size == 0`.
pub fn block_ranges(num_layers: usize, block_size: usize) -> impl Iterator<Item = Range<usize>> {
    assert!(block_size > 0, "block_size must be positive");
    (0..num_layers.div_ceil(block_size)).map(move |k| {
        let start = k * block_size;
        start..(start + block_size).min(num_layers)
    })
}

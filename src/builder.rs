use crate::error::{Result, StatsError};
use crate::utils::default_block_size;
use crate::{ScanEngine, ScanProblem};

/// Configures a [`ScanEngine`], validating the block size instead of
/// panicking on it.
pub struct ScanEngineBuilder<P: ScanProblem> {
    problem: P,
    block_size: Option<usize>,
}

impl<P: ScanProblem> ScanEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            block_size: None,
        }
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }

    /// Build the engine, rejecting a zero block size.
    pub fn try_build(self) -> Result<ScanEngine<P>> {
        let b = match self.block_size {
            Some(0) => return Err(StatsError::InvalidBlockSize(0)),
            Some(b) => b,
            None => default_block_size(self.problem.num_layers()),
        };
        Ok(ScanEngine::with_block_size(self.problem, b))
    }
}

#![cfg(feature = "parallel")]

use array_stats::{
    builder::ScanEngineBuilder,
    problems::{
        max::MaxProblem,
        sum::{OverflowPolicy, SumProblem},
    },
    ScanEngine,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn detached_sum_matches_sequential(
        seq in proptest::collection::vec(any::<i64>(), 0..300),
        block in 1usize..40,
    ) {
        for policy in [OverflowPolicy::Wrapping, OverflowPolicy::Checked] {
            let engine = ScanEngineBuilder::new(SumProblem::with_policy(&seq, policy))
                .with_block_size(block)
                .try_build()
                .unwrap();
            prop_assert_eq!(engine.run_detached(), engine.run());
        }
    }

    #[test]
    fn detached_max_matches_sequential(
        seq in proptest::collection::vec(any::<i32>(), 0..300),
        block in 1usize..40,
    ) {
        let engine = ScanEngine::with_block_size(MaxProblem::new(&seq), block);
        prop_assert_eq!(engine.run_detached(), engine.run());
    }
}

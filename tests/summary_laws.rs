use array_stats::{
    problems::{max::MaxProblem, sum::SumProblem},
    traits::{DetachedBlocks, ScanProblem, SummaryApply},
};
use proptest::prelude::*;

fn frontier_at<P: ScanProblem>(problem: &P, layer: usize) -> P::Frontier {
    let mut frontier = problem.init_frontier();
    for i in 0..layer {
        frontier = problem.forward_step(i, &frontier);
    }
    frontier
}

fn split_points(total: usize, seeds: (usize, usize, usize)) -> (usize, usize, usize, usize) {
    let mut cuts = [seeds.0 % (total + 1), seeds.1 % (total + 1), seeds.2 % (total + 1)];
    cuts.sort_unstable();
    (cuts[0], cuts[1], cuts[2], total)
}

fn check_laws<P>(problem: &P, seeds: (usize, usize, usize)) -> Result<(), TestCaseError>
where
    P: DetachedBlocks,
    P::Frontier: PartialEq + std::fmt::Debug,
    P::Summary: SummaryApply<P::Frontier> + PartialEq + std::fmt::Debug,
{
    let (a, b, c, d) = split_points(problem.num_layers(), seeds);

    let frontier_a = frontier_at(problem, a);
    let (frontier_b, sigma_ab) = problem.summarize_block(a, b, &frontier_a);
    let (frontier_c, sigma_bc) = problem.summarize_block(b, c, &frontier_b);
    let (_, sigma_cd) = problem.summarize_block(c, d, &frontier_c);

    prop_assert_eq!(&frontier_b, &frontier_at(problem, b));
    prop_assert_eq!(&sigma_ab.apply(&frontier_a), &frontier_b);
    prop_assert_eq!(&sigma_ab, &problem.summarize_detached(a, b));

    let merged = problem.merge_summary(&sigma_ab, &sigma_bc);
    prop_assert_eq!(&merged.apply(&frontier_a), &frontier_c);
    prop_assert_eq!(&merged, &problem.summarize_detached(a, c));

    let left = problem.merge_summary(&merged, &sigma_cd);
    let right = problem.merge_summary(&sigma_ab, &problem.merge_summary(&sigma_bc, &sigma_cd));
    prop_assert_eq!(&left, &right);
    Ok(())
}

proptest! {
    #[test]
    fn sum_summary_laws(
        seq in proptest::collection::vec(any::<i64>(), 0..24),
        s0 in 0usize..32, s1 in 0usize..32, s2 in 0usize..32,
    ) {
        check_laws(&SumProblem::new(&seq), (s0, s1, s2))?;
    }

    #[test]
    fn max_summary_laws(
        seq in proptest::collection::vec(-50i32..50, 0..24),
        s0 in 0usize..32, s1 in 0usize..32, s2 in 0usize..32,
    ) {
        check_laws(&MaxProblem::new(&seq), (s0, s1, s2))?;
    }
}

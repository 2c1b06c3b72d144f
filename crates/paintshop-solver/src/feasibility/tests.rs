//! Tests for the feasibility checks.

use super::*;
use paintshop_core::Finish::{Glossy as G, Matte as M};
use proptest::prelude::*;

// Customers 0..free over colors 0..open, every color open.
fn problem(free: usize, open: usize, likes: &[(usize, usize, Finish)]) -> PlacementProblem {
    let mut matrix = PreferenceMatrix::new(free, open);
    for &(customer, color, finish) in likes {
        matrix.like(customer, color, finish);
    }
    let customers: Vec<usize> = (0..free).collect();
    PlacementProblem::new(&matrix, &customers, (0..open).map(|c| (c, c)).collect())
}

fn both(problem: &PlacementProblem, candidate: &[Finish]) -> (bool, bool) {
    let matching = MatchingCheck::new().check(problem, candidate).feasible;
    let permutation = PermutationCheck::new().check(problem, candidate).feasible;
    (matching, permutation)
}

#[test]
fn test_single_customer_needs_liked_finish() {
    let p = problem(1, 2, &[(0, 1, M)]);

    assert_eq!(both(&p, &[G, G]), (false, false));
    assert_eq!(both(&p, &[G, M]), (true, true));
}

#[test]
fn test_placeholders_accept_anything() {
    let p = problem(1, 3, &[(0, 0, G)]);

    assert_eq!(both(&p, &[G, M, M]), (true, true));
}

#[test]
fn test_reroutes_earlier_placement() {
    // Customer 0 likes both slots, customer 1 only slot 0.
    let p = problem(2, 2, &[(0, 0, G), (0, 1, G), (1, 0, G)]);

    assert_eq!(both(&p, &[G, G]), (true, true));
    assert_eq!(both(&p, &[M, G]), (false, false));
}

#[test]
fn test_more_customers_than_slots() {
    let p = problem(2, 1, &[(0, 0, G), (1, 0, G)]);
    let verdict = MatchingCheck::new().check(&p, &[G]);

    assert!(!verdict.feasible);
    assert_eq!(verdict.placements, 0);
}

#[test]
fn test_no_customers_is_feasible() {
    let p = problem(0, 2, &[]);

    assert_eq!(both(&p, &[M, M]), (true, true));
}

#[test]
fn test_permutation_counts_arrangements() {
    // Only the last arrangement fits: customer 1 on slot 0, customer 0 on slot 1.
    let p = problem(2, 2, &[(0, 1, G), (1, 0, G)]);
    let verdict = PermutationCheck::new().check(&p, &[G, G]);

    assert!(verdict.feasible);
    assert_eq!(verdict.placements, 2);
}

#[test]
fn test_checker_buffers_are_reused() {
    let small = problem(1, 1, &[(0, 0, G)]);
    let large = problem(3, 3, &[(0, 0, G), (1, 1, M), (2, 2, G)]);
    let mut checker = MatchingCheck::new();

    assert!(checker.check(&large, &[G, M, G]).feasible);
    assert!(checker.check(&small, &[G]).feasible);
    assert!(!checker.check(&large, &[G, G, G]).feasible);
}

#[test]
fn test_problem_accessors() {
    let mut matrix = PreferenceMatrix::new(4, 5);
    matrix.like(3, 4, M);
    let p = PlacementProblem::new(&matrix, &[1, 3], vec![(0, 2), (1, 4)]);

    assert_eq!(p.free_count(), 2);
    assert_eq!(p.open_count(), 2);
    assert_eq!(p.customer(1), 3);
    assert_eq!(p.color(1), 4);
    assert!(p.compatible(1, 1, &[G, M]));
    assert!(!p.compatible(1, 1, &[M, G]));
}

fn finishes(len: usize) -> impl Strategy<Value = Vec<Finish>> {
    proptest::collection::vec(prop_oneof![Just(G), Just(M)], len)
}

proptest! {
    #[test]
    fn matching_agrees_with_permutation(
        (free, open, likes, candidate) in (0usize..5, 1usize..6).prop_flat_map(|(free, open)| {
            let pair = (0..free.max(1), 0..open, prop_oneof![Just(G), Just(M)]);
            (
                Just(free),
                Just(open),
                proptest::collection::vec(pair, 0..12),
                finishes(open),
            )
        })
    ) {
        let likes: Vec<_> = likes.into_iter().filter(|&(c, _, _)| c < free).collect();
        let p = problem(free, open, &likes);
        let (matching, permutation) = both(&p, &candidate);
        prop_assert_eq!(matching, permutation);
    }
}

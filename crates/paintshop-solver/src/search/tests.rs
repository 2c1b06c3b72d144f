//! Tests for the combinatorial search.

use super::*;
use crate::termination::{CandidateCountTermination, NeverTermination};
use paintshop_core::{Request, RequestValidator};
use paintshop_test::{reference_answer, scenario, scenarios, well_formed_request};
use proptest::prelude::*;

fn prepare(request: &Request) -> Option<PreparedRequest> {
    RequestValidator::new(request).validate().ok()
}

fn configs() -> Vec<SolverConfig> {
    let mut configs = Vec::new();
    for order in [SearchOrder::MatteCount, SearchOrder::Lexicographic] {
        for check in [FeasibilityCheck::Matching, FeasibilityCheck::Permutation] {
            configs.push(
                SolverConfig::new()
                    .with_search_order(order)
                    .with_feasibility_check(check)
                    .with_environment_mode(EnvironmentMode::FullAssert),
            );
        }
    }
    configs
}

fn run(name: &str, config: &SolverConfig) -> SearchResult {
    let prepared = prepare(&scenario(name).request()).unwrap();
    CombinatorialSearch::new(&prepared, config).run(&NeverTermination)
}

// Stops as soon as any feasible candidate is known.
#[derive(Debug)]
struct FirstFeasible;

impl Termination for FirstFeasible {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.best_fitness().is_some()
    }
}

#[test]
fn test_scenarios_under_every_strategy() {
    for scenario in scenarios() {
        let Some(prepared) = prepare(&scenario.request()) else {
            assert_eq!(scenario.expected, "IMPOSSIBLE", "{} was rejected", scenario.name);
            continue;
        };
        for config in configs() {
            let result = CombinatorialSearch::new(&prepared, &config).run(&NeverTermination);
            let answer = match result.outcome.assignment() {
                Some(assignment) => assignment.to_string(),
                None => "IMPOSSIBLE".to_string(),
            };
            assert_eq!(answer, scenario.expected, "{} with {:?}", scenario.name, config);
            assert_ne!(result.reason, TerminationReason::Aborted);
        }
    }
}

#[test]
fn test_all_matte_searches_every_slot() {
    let result = run("all_matte", &SolverConfig::default());

    assert!(result.is_optimal());
    assert_eq!(result.reason, TerminationReason::OptimalityProven);
    assert_eq!(result.stats.unresolved_slots, 2);
    assert_eq!(result.stats.free_customers, 2);
    assert_eq!(result.stats.candidates_evaluated, 4);
    assert_eq!(result.stats.feasible_candidates, 1);
}

#[test]
fn test_trivial_completion_skips_search() {
    let result = run("disjoint_single_colors", &SolverConfig::default());

    assert!(result.is_optimal());
    assert_eq!(result.stats.candidates_evaluated, 0);
    assert_eq!(result.outcome.assignment().unwrap().to_string(), "0 1 0");
}

#[test]
fn test_slot_collision_is_infeasible() {
    let result = run("bound_customer_collision", &SolverConfig::default());

    assert_eq!(
        result.outcome,
        SearchOutcome::Infeasible(InfeasibleCause::SlotCollision {
            color: 0,
            customers: [0, 1],
        })
    );
    assert_eq!(result.reason, TerminationReason::InfeasibilityProven);
}

#[test]
fn test_not_enough_open_slots() {
    let result = run("no_open_slot_left", &SolverConfig::default());

    assert_eq!(
        result.outcome,
        SearchOutcome::Infeasible(InfeasibleCause::NotEnoughOpenSlots {
            free_customers: 1,
            open_slots: 0,
        })
    );
    assert_eq!(result.stats.candidates_evaluated, 0);
}

#[test]
fn test_exhausted_search() {
    let result = run("three_customers_two_colors", &SolverConfig::default());

    assert_eq!(
        result.outcome,
        SearchOutcome::Infeasible(InfeasibleCause::Exhausted)
    );
    assert_eq!(result.stats.candidates_evaluated, 16);
    assert_eq!(result.stats.feasible_candidates, 0);
}

#[test]
fn test_candidate_limit_without_assignment() {
    let prepared = prepare(&scenario("all_matte").request()).unwrap();
    let result = CombinatorialSearch::new(&prepared, &SolverConfig::default())
        .run(&CandidateCountTermination::new(0));

    assert_eq!(result.outcome, SearchOutcome::Unknown);
    assert_eq!(result.reason, TerminationReason::Aborted);
    assert!(!result.has_assignment());
}

#[test]
fn test_limit_after_feasible_candidate_reports_feasible() {
    // Unresolved colors 1 and 2; only "1 0" serves both customers, and
    // "1 1" is still pending when the search stops.
    let request = Request::new(3, 2, vec![vec![2, 1, 1, 2, 0], vec![2, 1, 1, 2, 0]]);
    let prepared = prepare(&request).unwrap();
    let config = SolverConfig::new().with_search_order(SearchOrder::Lexicographic);
    let result = CombinatorialSearch::new(&prepared, &config).run(&FirstFeasible);

    assert_eq!(result.reason, TerminationReason::Aborted);
    match &result.outcome {
        SearchOutcome::Feasible(assignment) => assert_eq!(assignment.to_string(), "1 0 0"),
        other => panic!("expected a feasible outcome, got {other}"),
    }
}

#[test]
fn test_lexicographic_prunes_worse_candidates() {
    let request = Request::new(3, 2, vec![vec![2, 1, 1, 2, 0], vec![2, 1, 1, 2, 0]]);
    let prepared = prepare(&request).unwrap();
    let config = SolverConfig::new().with_search_order(SearchOrder::Lexicographic);
    let result = CombinatorialSearch::new(&prepared, &config).run(&NeverTermination);

    assert!(result.is_optimal());
    // "0 0", "0 1" and "1 0" are evaluated; "1 1" cannot beat one matte.
    assert_eq!(result.stats.candidates_evaluated, 3);
    assert_eq!(result.stats.candidates_pruned, 1);
}

#[test]
fn test_lexicographic_stops_at_all_glossy() {
    let config = SolverConfig::new().with_search_order(SearchOrder::Lexicographic);
    let result = run("forced_matte_shares_color", &config);

    assert!(result.is_optimal());
    assert_eq!(result.outcome.assignment().unwrap().to_string(), "1 0 0 0 0");
    assert_eq!(result.stats.candidates_evaluated, 1);
    assert_eq!(result.stats.candidates_pruned, 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn strategies_agree_with_reference(request in well_formed_request(6)) {
        let expected = reference_answer(&request);
        match prepare(&request) {
            None => prop_assert_eq!(expected, None),
            Some(prepared) => {
                for config in configs() {
                    let result = CombinatorialSearch::new(&prepared, &config).run(&NeverTermination);
                    prop_assert!(!matches!(result.reason, TerminationReason::Aborted));
                    let found = result.outcome.assignment().map(|a| a.finishes().to_vec());
                    prop_assert_eq!(&found, &expected, "{:?}", config);
                }
            }
        }
    }
}

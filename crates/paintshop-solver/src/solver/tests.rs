//! Tests for the solver pipeline.

use super::*;
use paintshop_config::{EnvironmentMode, SearchOrder};
use paintshop_core::Violation;
use paintshop_test::{scenario, scenarios};

#[test]
fn test_every_scenario() {
    let solver = Solver::new(SolverConfig::new().with_environment_mode(EnvironmentMode::FastAssert));
    for scenario in scenarios() {
        let result = solver.solve(&scenario.request());
        assert_eq!(
            result.answer.to_string(),
            scenario.expected,
            "scenario {}",
            scenario.name
        );
    }
}

#[test]
fn test_rejection_keeps_violations() {
    let solver = Solver::new(SolverConfig::default());
    let result = solver.solve(&scenario("wrong_pair_count").request());

    assert_eq!(result.answer, Answer::Impossible(ErrorKind::MalformedInput));
    assert!(result.search.is_none());
    let rejection = result.rejection.unwrap();
    assert_eq!(
        rejection.violations(),
        &[Violation::PairCountMismatch {
            customer: 0,
            declared: 2,
            actual: 1,
        }]
    );
}

#[test]
fn test_contested_color_fails_bounds_first() {
    let solver = Solver::new(SolverConfig::default());
    let result = solver.solve(&scenario("contested_color").request());

    assert_eq!(result.answer, Answer::Impossible(ErrorKind::CapacityViolation));
    assert!(result.search.is_none());
}

#[test]
fn test_conflict_stage_through_solver() {
    let solver = Solver::new(SolverConfig::default());

    let shared = Request::new(2, 2, vec![vec![1, 1, 0], vec![1, 1, 0]]);
    let result = solver.solve(&shared);
    assert_eq!(result.answer, Answer::Impossible(ErrorKind::LogicalConflict));
    assert!(result.is_proven());
    assert!(result.search.is_none());
    assert!(matches!(
        result.rejection.as_ref().map(|r| r.violations()),
        Some([Violation::ContestedPair { color: 1, .. }])
    ));

    let opposed = Request::new(2, 2, vec![vec![1, 1, 0], vec![1, 1, 1]]);
    let result = solver.solve(&opposed);
    assert_eq!(result.answer, Answer::Impossible(ErrorKind::LogicalConflict));
    assert!(matches!(
        result.rejection.as_ref().map(|r| r.violations()),
        Some([Violation::ConflictingForcedFinish { color: 1 }])
    ));
}

#[test]
fn test_search_exhaustion_kind() {
    let solver = Solver::new(SolverConfig::default());
    let result = solver.solve(&scenario("three_customers_two_colors").request());

    assert_eq!(result.answer, Answer::Impossible(ErrorKind::SearchExhaustion));
    assert!(result.rejection.is_none());
    assert!(result.search.as_ref().is_some_and(SearchResult::is_infeasible));
}

#[test]
fn test_candidate_limit_leaves_answer_undecided() {
    let solver = Solver::new(SolverConfig::new().with_candidate_count_limit(1));
    let result = solver.solve(&scenario("all_matte").request());

    assert_eq!(result.answer, Answer::Undecided);
    assert_eq!(result.answer.to_string(), "UNKNOWN");
    assert!(!result.is_proven());
}

#[test]
fn test_candidate_limit_after_feasible_candidate() {
    let config = SolverConfig::new()
        .with_search_order(SearchOrder::Lexicographic)
        .with_candidate_count_limit(3);
    let request = Request::new(3, 2, vec![vec![2, 1, 1, 2, 0], vec![2, 1, 1, 2, 0]]);
    let result = Solver::new(config).solve(&request);

    assert_eq!(result.answer.to_string(), "1 0 0");
    assert!(!result.is_proven());
}

#[test]
fn test_solve_is_idempotent() {
    let solver = Solver::new(SolverConfig::default());
    let request = scenario("color_not_requested").request();

    let first = solver.solve(&request);
    let second = solver.solve(&request);
    assert_eq!(first.answer, second.answer);
    assert!(first.is_proven());
}

#[test]
fn test_terminate_early_outside_solve() {
    let solver = Solver::new(SolverConfig::default());

    assert!(!solver.is_solving());
    assert!(!solver.terminate_early());
    assert_eq!(
        solver.solve(&scenario("no_matte").request()).answer.to_string(),
        "0 0"
    );
}

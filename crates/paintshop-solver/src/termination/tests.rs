//! Tests for termination conditions.

use super::*;
use paintshop_config::SolverConfig;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

#[test]
fn test_candidate_count_termination() {
    let mut scope = SearchScope::new();
    let term = CandidateCountTermination::new(3);

    assert!(!term.is_terminated(&scope));
    scope.stats_mut().record_candidate(false);
    scope.stats_mut().record_candidate(true);
    assert!(!term.is_terminated(&scope));
    scope.stats_mut().record_pruned();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_time_termination_before_start() {
    let scope = SearchScope::new();
    let term = TimeTermination::new(Duration::ZERO);

    assert!(!term.is_terminated(&scope));
}

#[test]
fn test_time_termination_zero_limit() {
    let mut scope = SearchScope::new();
    scope.start_searching();
    let term = TimeTermination::new(Duration::ZERO);

    assert!(term.is_terminated(&scope));
}

#[test]
fn test_time_termination_not_reached() {
    let mut scope = SearchScope::new();
    scope.start_searching();
    let term = TimeTermination::new(Duration::from_secs(3600));

    assert!(!term.is_terminated(&scope));
}

#[test]
fn test_budgets_from_config() {
    let config = SolverConfig::new()
        .with_termination_seconds(90)
        .with_candidate_count_limit(40);
    assert_eq!(
        TimeTermination::from_config(&config).map(|t| t.budget()),
        Some(Duration::from_secs(90))
    );
    assert_eq!(
        CandidateCountTermination::from_config(&config).map(|t| t.budget()),
        Some(40)
    );

    let unlimited = SolverConfig::default();
    assert!(TimeTermination::from_config(&unlimited).is_none());
    assert!(CandidateCountTermination::from_config(&unlimited).is_none());
}

#[test]
fn test_external_termination() {
    let flag = AtomicBool::new(false);
    let scope = SearchScope::new();
    let term = ExternalTermination::new(&flag);

    assert!(!term.is_terminated(&scope));
    flag.store(true, Ordering::SeqCst);
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_option_termination() {
    let scope = SearchScope::new();
    let none: Option<CandidateCountTermination> = None;
    let some = Some(CandidateCountTermination::new(0));

    assert!(!none.is_terminated(&scope));
    assert!(some.is_terminated(&scope));
}

#[test]
fn test_or_termination() {
    let mut scope = SearchScope::new();
    let flag = AtomicBool::new(false);
    let term = OrTermination::new((
        None::<TimeTermination>,
        Some(CandidateCountTermination::new(2)),
        ExternalTermination::new(&flag),
    ));

    assert!(!term.is_terminated(&scope));
    scope.stats_mut().record_candidate(false);
    scope.stats_mut().record_candidate(false);
    assert!(term.is_terminated(&scope));

    let fresh = SearchScope::new();
    flag.store(true, Ordering::SeqCst);
    assert!(term.is_terminated(&fresh));
}

#[test]
fn test_never_termination() {
    let mut scope = SearchScope::new();
    scope.start_searching();
    for _ in 0..100 {
        scope.stats_mut().record_candidate(false);
    }

    assert!(!NeverTermination.is_terminated(&scope));
    assert!(!(&NeverTermination).is_terminated(&scope));
}

//! Budgets from the `[termination]` table of the solver configuration.

use std::time::Duration;

use paintshop_config::SolverConfig;

use super::Termination;
use crate::scope::SearchScope;

/// Stops the search once its wall-clock budget is spent.
///
/// The clock starts at [`SearchScope::start_searching`], so validation and
/// customer mapping are not charged to the budget. The search polls between
/// candidates; a single feasibility check can overrun the budget.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use paintshop_config::SolverConfig;
/// use paintshop_solver::termination::TimeTermination;
///
/// let config = SolverConfig::new().with_termination_seconds(30);
/// let term = TimeTermination::from_config(&config).unwrap();
/// assert_eq!(term.budget(), Duration::from_secs(30));
///
/// assert!(TimeTermination::from_config(&SolverConfig::default()).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeTermination {
    budget: Duration,
}

impl TimeTermination {
    pub fn new(budget: Duration) -> Self {
        Self { budget }
    }

    /// The configured time limit, if there is one.
    pub fn from_config(config: &SolverConfig) -> Option<Self> {
        config.time_limit().map(Self::new)
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }
}

impl Termination for TimeTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        // An unstarted search has spent nothing.
        scope.elapsed().is_some_and(|spent| spent >= self.budget)
    }
}

/// Stops the search after a number of enumerated candidates.
///
/// Pruned candidates are charged like evaluated ones, so the budget bounds
/// the enumeration rather than the feasibility checks alone.
///
/// # Example
///
/// ```
/// use paintshop_config::SolverConfig;
/// use paintshop_solver::termination::CandidateCountTermination;
///
/// let config = SolverConfig::new().with_candidate_count_limit(1000);
/// let term = CandidateCountTermination::from_config(&config).unwrap();
/// assert_eq!(term.budget(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateCountTermination {
    budget: u64,
}

impl CandidateCountTermination {
    pub fn new(budget: u64) -> Self {
        Self { budget }
    }

    /// The configured candidate limit, if there is one.
    pub fn from_config(config: &SolverConfig) -> Option<Self> {
        config.candidate_count_limit().map(Self::new)
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }
}

impl Termination for CandidateCountTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.candidate_count() >= self.budget
    }
}

//! Solver pipeline: validation followed by search.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use paintshop_config::SolverConfig;
use paintshop_core::{Assignment, ErrorKind, Rejection, Request, RequestValidator};
use tracing::info;

use crate::result::{SearchOutcome, SearchResult};
use crate::search::CombinatorialSearch;
use crate::termination::{
    CandidateCountTermination, ExternalTermination, OrTermination, TimeTermination,
};

/// The answer to one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// A finish for every color.
    Assignment(Assignment),
    /// No assignment exists, or the request was rejected.
    Impossible(ErrorKind),
    /// A limit stopped the search before it found any assignment.
    Undecided,
}

impl Answer {
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            Answer::Assignment(a) => Some(a),
            _ => None,
        }
    }

    pub fn is_impossible(&self) -> bool {
        matches!(self, Answer::Impossible(_))
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Assignment(a) => write!(f, "{}", a),
            Answer::Impossible(_) => write!(f, "IMPOSSIBLE"),
            Answer::Undecided => write!(f, "UNKNOWN"),
        }
    }
}

/// Answer plus the diagnostics of the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub answer: Answer,
    /// Set when validation rejected the request.
    pub rejection: Option<Rejection>,
    /// Set when the search ran.
    pub search: Option<SearchResult>,
}

impl SolveResult {
    /// Whether the assignment, if any, is proven to use the fewest matte slots.
    pub fn is_proven(&self) -> bool {
        match &self.answer {
            Answer::Assignment(_) => self.search.as_ref().is_some_and(SearchResult::is_optimal),
            Answer::Impossible(_) => true,
            Answer::Undecided => false,
        }
    }
}

/// Validates requests and searches for their cheapest assignment.
///
/// # Examples
///
/// ```
/// use paintshop_config::SolverConfig;
/// use paintshop_core::Request;
/// use paintshop_solver::solver::Solver;
///
/// let solver = Solver::new(SolverConfig::default());
/// let request = Request::new(1, 2, vec![vec![1, 1, 1], vec![1, 1, 0]]);
///
/// assert_eq!(solver.solve(&request).answer.to_string(), "IMPOSSIBLE");
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    config: SolverConfig,
    terminate_early_flag: Arc<AtomicBool>,
    solving: Arc<AtomicBool>,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            terminate_early_flag: Arc::new(AtomicBool::new(false)),
            solving: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Requests early termination of the running search.
    ///
    /// This method is thread-safe and can be called from another thread
    /// through a clone of the solver.
    pub fn terminate_early(&self) -> bool {
        if self.solving.load(Ordering::SeqCst) {
            self.terminate_early_flag.store(true, Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    /// Returns true if the solver is currently solving.
    pub fn is_solving(&self) -> bool {
        self.solving.load(Ordering::SeqCst)
    }

    /// Validates `request` and, if it passes, searches for its assignment.
    pub fn solve(&self, request: &Request) -> SolveResult {
        info!(
            event = "solve_start",
            colors = request.colors,
            customers = request.customers,
        );

        let prepared = match RequestValidator::new(request).validate() {
            Ok(prepared) => prepared,
            Err(rejection) => {
                let answer = Answer::Impossible(rejection.kind());
                info!(
                    event = "solve_end",
                    answer = %answer,
                    kind = %rejection.kind(),
                    reason = %rejection,
                );
                return SolveResult {
                    answer,
                    rejection: Some(rejection),
                    search: None,
                };
            }
        };

        self.solving.store(true, Ordering::SeqCst);
        self.terminate_early_flag.store(false, Ordering::SeqCst);

        let termination = OrTermination::new((
            TimeTermination::from_config(&self.config),
            CandidateCountTermination::from_config(&self.config),
            ExternalTermination::new(&self.terminate_early_flag),
        ));
        let result = CombinatorialSearch::new(&prepared, &self.config).run(&termination);

        self.solving.store(false, Ordering::SeqCst);

        let answer = match &result.outcome {
            SearchOutcome::Optimal(a) | SearchOutcome::Feasible(a) => Answer::Assignment(a.clone()),
            SearchOutcome::Infeasible(cause) => Answer::Impossible(cause.kind()),
            SearchOutcome::Unknown => Answer::Undecided,
        };
        info!(
            event = "solve_end",
            answer = %answer,
            reason = %result.reason,
            candidates = result.stats.candidates_evaluated,
        );

        SolveResult {
            answer,
            rejection: None,
            search: Some(result),
        }
    }
}

#[cfg(test)]
mod tests;

//! Search outcomes.

use std::fmt;

use paintshop_core::{Assignment, ErrorKind};

use crate::stats::SearchStats;

/// Why the search proved that no assignment exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfeasibleCause {
    /// Two customers that like a single color both need that color's slot.
    SlotCollision { color: usize, customers: [usize; 2] },
    /// A customer likes no pair at all.
    UnsatisfiableCustomer { customer: usize },
    /// More free customers than open slots to place them on.
    NotEnoughOpenSlots { free_customers: usize, open_slots: usize },
    /// Every candidate vector was tried and none was feasible.
    Exhausted,
}

impl InfeasibleCause {
    /// All causes are found after validation passed.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::SearchExhaustion
    }
}

impl fmt::Display for InfeasibleCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfeasibleCause::SlotCollision { color, customers } => write!(
                f,
                "customers {} and {} both need color {}",
                customers[0],
                customers[1],
                color + 1
            ),
            InfeasibleCause::UnsatisfiableCustomer { customer } => {
                write!(f, "customer {} likes nothing", customer)
            }
            InfeasibleCause::NotEnoughOpenSlots {
                free_customers,
                open_slots,
            } => write!(
                f,
                "{} free customers but {} open slots",
                free_customers, open_slots
            ),
            InfeasibleCause::Exhausted => write!(f, "no candidate is feasible"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// We have found an assignment and proven its optimality.
    Optimal(Assignment),
    /// We have found a feasible assignment, but not proven its optimality.
    Feasible(Assignment),
    /// We have proven that no assignment exists.
    Infeasible(InfeasibleCause),
    /// The search terminated without finding an assignment and without
    /// proving infeasibility.
    Unknown,
}

impl SearchOutcome {
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            SearchOutcome::Optimal(a) | SearchOutcome::Feasible(a) => Some(a),
            _ => None,
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Optimal(a) => write!(f, "Optimal(matte={})", a.matte_count()),
            SearchOutcome::Feasible(a) => write!(f, "Feasible(matte={})", a.matte_count()),
            SearchOutcome::Infeasible(cause) => write!(f, "Infeasible({})", cause),
            SearchOutcome::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The search found and proved optimality of an assignment.
    OptimalityProven,
    /// The search proved that the request is infeasible.
    InfeasibilityProven,
    /// The search stopped at a limit (time, candidates, external flag).
    Aborted,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::InfeasibilityProven => write!(f, "Infeasibility Proven"),
            TerminationReason::Aborted => write!(f, "Aborted"),
        }
    }
}

/// Outcome of one search run with its statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub reason: TerminationReason,
    pub stats: SearchStats,
}

impl SearchResult {
    #[inline]
    pub fn new(outcome: SearchOutcome, reason: TerminationReason, stats: SearchStats) -> Self {
        Self {
            outcome,
            reason,
            stats,
        }
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Optimal(_))
    }

    #[inline]
    pub fn is_infeasible(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Infeasible(_))
    }

    #[inline]
    pub fn has_assignment(&self) -> bool {
        self.outcome.assignment().is_some()
    }
}

//! Paint shop search engine
//!
//! This crate provides the search half of the pipeline:
//! - Customer mapping into slot-bound and free customers
//! - Candidate enumeration in lexicographic or matte-count order
//! - Feasibility checks (bipartite matching, permutation reference)
//! - Termination conditions
//! - The [`Solver`] that runs validation followed by search

pub mod candidate;
pub mod feasibility;
pub mod mapping;
pub mod result;
pub mod scope;
pub mod search;
pub mod solver;
pub mod stats;
pub mod termination;

pub use candidate::CandidateEnumerator;
pub use feasibility::{FeasibilityChecker, MatchingCheck, PermutationCheck, PlacementProblem};
pub use mapping::CustomerMapping;
pub use result::{InfeasibleCause, SearchOutcome, SearchResult, TerminationReason};
pub use scope::SearchScope;
pub use search::CombinatorialSearch;
pub use solver::{Answer, SolveResult, Solver};
pub use stats::SearchStats;
pub use termination::{
    CandidateCountTermination, ExternalTermination, NeverTermination, OrTermination, Termination,
    TimeTermination,
};

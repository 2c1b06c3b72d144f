//! Paint shop solver
//!
//! Picks a glossy or matte finish for every color so that each customer
//! gets at least one pair they like, with as few matte colors as possible.
//!
//! # Example
//!
//! ```rust
//! use paintshop::prelude::*;
//!
//! let request = Request::from_json_str(
//!     r#"{"colors": 5, "customers": 2, "demands": [[1, 5, 1], [2, 1, 0, 2, 1]]}"#,
//! )
//! .unwrap();
//! let result = paintshop::solve_with_config(&request, SolverConfig::default());
//!
//! assert_eq!(result.answer.to_string(), "0 0 0 0 1");
//! assert!(result.is_proven());
//! ```

mod solver;

pub use solver::{load_config, solve, solve_json, solve_with_config, CONFIG_FILE};

// Request model and errors
pub use paintshop_core::{
    Assignment, DecodeError, ErrorKind, Finish, PaintShopError, Rejection, Request, Violation,
};

// Configuration
pub use paintshop_config::{
    ConfigError, EnvironmentMode, FeasibilityCheck, SearchOrder, SolverConfig, TerminationConfig,
};

// Search engine
pub use paintshop_solver::{
    Answer, InfeasibleCause, SearchOutcome, SearchResult, SearchStats, SolveResult, Solver,
    TerminationReason,
};

pub mod prelude {
    pub use super::{
        Answer, Assignment, ErrorKind, Finish, Request, SearchOrder, SolveResult, Solver,
        SolverConfig,
    };
}

//! Paint Shop Core - domain types and request validation
//!
//! This crate provides the fundamental pieces of the paint shop solver:
//! - [`Request`] decoding from the JSON wire shape
//! - [`RequestValidator`], which rejects invalid requests and derives the
//!   [`PreferenceMatrix`] and a partially resolved [`SolutionVector`]
//! - Finish, slot and preference enums
//! - Error types shared by the other crates

pub mod error;
pub mod finish;
pub mod matrix;
pub mod request;
pub mod solution;
pub mod stats;
pub mod validation;

#[cfg(test)]
mod request_tests;

pub use error::{DecodeError, ErrorKind, PaintShopError, Rejection, Result, Violation};
pub use finish::{Finish, Preference, Slot};
pub use matrix::PreferenceMatrix;
pub use request::{Request, ValuePath};
pub use solution::{Assignment, SolutionVector};
pub use stats::{ColorStats, CustomerStats, PairStats, RequestStats};
pub use validation::{PreparedRequest, RequestValidator};

/// Largest accepted catalog size.
pub const MAX_COLORS: i64 = 2000;

/// Largest accepted customer count.
pub const MAX_CUSTOMERS: i64 = 2000;

/// Largest accepted sum of pair counts over all customers.
pub const MAX_TOTAL_PREFERENCES: i64 = 3000;

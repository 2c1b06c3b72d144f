//! Error types for the paint shop solver.

use std::fmt;

use thiserror::Error;

use crate::finish::Finish;
use crate::request::ValuePath;

/// Coarse classification of why a request has no answer.
///
/// Every kind renders as `IMPOSSIBLE`; the kind only serves diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A structural violation: wrong counts, bad values, duplicates.
    MalformedInput,
    /// Too many preferences overall, or fewer colors than customers.
    CapacityViolation,
    /// Single-preference customers contest one slot.
    LogicalConflict,
    /// Validation passed but no candidate assignment is feasible.
    SearchExhaustion,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MalformedInput => write!(f, "MalformedInput"),
            ErrorKind::CapacityViolation => write!(f, "CapacityViolation"),
            ErrorKind::LogicalConflict => write!(f, "LogicalConflict"),
            ErrorKind::SearchExhaustion => write!(f, "SearchExhaustion"),
        }
    }
}

/// A single failed validation check.
///
/// Customers are reported 0-based, colors 1-based as on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("{path} is not an integer")]
    NonInteger { path: ValuePath },

    #[error("number of colors {0} outside 1..={max}", max = crate::MAX_COLORS)]
    ColorsOutOfRange(i64),

    #[error("number of customers {0} outside 1..={max}", max = crate::MAX_CUSTOMERS)]
    CustomersOutOfRange(i64),

    #[error("{declared} customers declared but {actual} orders given")]
    CustomerCountMismatch { declared: i64, actual: usize },

    #[error("{colors} colors cannot serve {customers} customers")]
    NotEnoughColors { colors: i64, customers: i64 },

    #[error("customer {customer}: order has {len} elements, expected an odd count")]
    EvenLength { customer: usize, len: usize },

    #[error("customer {customer}: negative value {value}")]
    NegativeValue { customer: usize, value: i64 },

    #[error("customer {customer}: declared {declared} pairs but gave {actual}")]
    PairCountMismatch {
        customer: usize,
        declared: i64,
        actual: usize,
    },

    #[error("customer {customer}: color {color} outside the catalog")]
    ColorOutOfRange { customer: usize, color: i64 },

    #[error("customer {customer}: finish {finish} is neither 0 nor 1")]
    FinishNotBinary { customer: usize, finish: i64 },

    #[error("customer {customer}: {count} matte requests, at most one allowed")]
    MultipleMatte { customer: usize, count: usize },

    #[error("customer {customer}: duplicate pair ({color}, {finish})")]
    DuplicatePair {
        customer: usize,
        color: i64,
        finish: i64,
    },

    #[error("{total} preferences requested, at most {limit} allowed")]
    LoadExceeded { total: i64, limit: i64 },

    #[error("customers {customers:?} all depend solely on color {color} finish {finish}")]
    ContestedPair {
        color: usize,
        finish: Finish,
        customers: Vec<usize>,
    },

    #[error("color {color} is forced both glossy and matte")]
    ConflictingForcedFinish { color: usize },
}

impl Violation {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Violation::NotEnoughColors { .. } | Violation::LoadExceeded { .. } => {
                ErrorKind::CapacityViolation
            }
            Violation::ContestedPair { .. } | Violation::ConflictingForcedFinish { .. } => {
                ErrorKind::LogicalConflict
            }
            _ => ErrorKind::MalformedInput,
        }
    }
}

/// A failed validation with every violation recorded before it stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("request rejected: {}", .violations.first().map(ToString::to_string).unwrap_or_default())]
pub struct Rejection {
    violations: Vec<Violation>,
}

impl Rejection {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Kind of the first recorded violation.
    pub fn kind(&self) -> ErrorKind {
        self.violations
            .first()
            .map(Violation::kind)
            .unwrap_or(ErrorKind::MalformedInput)
    }
}

/// Failure to decode a JSON request.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request must be a JSON object")]
    NotAnObject,

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("`demands` must be a list")]
    DemandsNotAList,
}

/// Main error type for paint shop operations.
#[derive(Debug, Error)]
pub enum PaintShopError {
    /// The request could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error in solver configuration
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for paint shop operations
///
/// ```
/// use paintshop_core::{PaintShopError, Request, Result};
///
/// fn decode(json: &str) -> Result<Request> {
///     Ok(Request::from_json_str(json)?)
/// }
///
/// assert!(decode(r#"{"colors": 1, "customers": 1, "demands": [[1, 1, 0]]}"#).is_ok());
/// assert!(matches!(decode("{"), Err(PaintShopError::Decode(_))));
/// ```
pub type Result<T> = std::result::Result<T, PaintShopError>;

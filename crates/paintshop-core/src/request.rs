//! The raw solve request and its JSON decoding.
//!
//! A request is kept exactly as the caller sent it: wire values are `i64`
//! so that negative or out-of-range values survive decoding and are
//! rejected by the [`RequestValidator`](crate::RequestValidator) with a
//! precise [`Violation`](crate::Violation). Values that are not integers at
//! all are recorded as [`ValuePath`]s and likewise reported as malformed
//! input instead of failing the decode.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DecodeError;

/// A solve request: catalog size, customer count and one order per customer.
///
/// Each order is `[T, color_1, finish_1, ..., color_T, finish_T]` with
/// 1-based colors.
///
/// # Examples
///
/// ```
/// use paintshop_core::Request;
///
/// let request = Request::from_json_str(
///     r#"{"colors": 2, "customers": 2, "demands": [[1, 1, 0], [1, 2, 0]]}"#,
/// ).unwrap();
///
/// assert_eq!(request.colors, 2);
/// assert_eq!(request.demands[1], vec![1, 2, 0]);
/// assert!(request.non_integer_values().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub colors: i64,
    pub customers: i64,
    pub demands: Vec<Vec<i64>>,
    #[serde(skip)]
    non_integer: Vec<ValuePath>,
}

/// Location of a value in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValuePath {
    Colors,
    Customers,
    /// A whole order that was not a list.
    Order { customer: usize },
    /// One element of an order.
    Element { customer: usize, position: usize },
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValuePath::Colors => write!(f, "colors"),
            ValuePath::Customers => write!(f, "customers"),
            ValuePath::Order { customer } => write!(f, "demands[{}]", customer),
            ValuePath::Element { customer, position } => {
                write!(f, "demands[{}][{}]", customer, position)
            }
        }
    }
}

impl Request {
    pub fn new(colors: i64, customers: i64, demands: Vec<Vec<i64>>) -> Self {
        Self {
            colors,
            customers,
            demands,
            non_integer: Vec::new(),
        }
    }

    /// Decodes a request from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the document is not valid JSON, is not an
    /// object, lacks one of `colors`, `customers` or `demands`, or when
    /// `demands` is not a list. Non-integer numbers are not errors.
    pub fn from_json_str(s: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_json_value(&value)
    }

    /// Decodes a request from an already parsed JSON value.
    pub fn from_json_value(value: &Value) -> Result<Self, DecodeError> {
        let object = value.as_object().ok_or(DecodeError::NotAnObject)?;
        let field = |name: &'static str| object.get(name).ok_or(DecodeError::MissingField(name));

        let mut non_integer = Vec::new();
        let colors = integer(field("colors")?, ValuePath::Colors, &mut non_integer);
        let customers = integer(field("customers")?, ValuePath::Customers, &mut non_integer);

        let orders = field("demands")?
            .as_array()
            .ok_or(DecodeError::DemandsNotAList)?;

        let mut demands = Vec::with_capacity(orders.len());
        for (customer, order) in orders.iter().enumerate() {
            let Some(elements) = order.as_array() else {
                non_integer.push(ValuePath::Order { customer });
                demands.push(Vec::new());
                continue;
            };
            let decoded = elements
                .iter()
                .enumerate()
                .map(|(position, v)| {
                    integer(v, ValuePath::Element { customer, position }, &mut non_integer)
                })
                .collect();
            demands.push(decoded);
        }

        Ok(Self {
            colors,
            customers,
            demands,
            non_integer,
        })
    }

    /// Values that were present but not integers, in document order.
    pub fn non_integer_values(&self) -> &[ValuePath] {
        &self.non_integer
    }

    /// Encodes the request back to its JSON form.
    pub fn to_json_string(&self) -> String {
        serde_json::json!({
            "colors": self.colors,
            "customers": self.customers,
            "demands": self.demands,
        })
        .to_string()
    }
}

// Non-integers decode as 0 and are recorded; integers beyond i64 saturate so
// that range checks reject them.
fn integer(value: &Value, path: ValuePath, non_integer: &mut Vec<ValuePath>) -> i64 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if n.as_u64().is_some() {
                i64::MAX
            } else {
                non_integer.push(path);
                0
            }
        }
        _ => {
            non_integer.push(path);
            0
        }
    }
}

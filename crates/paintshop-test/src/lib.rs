//! Shared test fixtures for paint shop crates.
//!
//! This crate provides request fixtures and a brute-force reference solver.
//! It depends only on `paintshop-core` so that the solver crates can use it
//! as a dev-dependency.
//!
//! - [`scenario`] - Known requests with their expected answer lines
//! - [`reference`] - Exhaustive solver over every assignment
//! - [`strategy`] - `proptest` strategies for well-formed requests
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! paintshop-test = { workspace = true }
//! ```

pub mod reference;
pub mod scenario;
pub mod strategy;

pub use reference::{decode_orders, reference_answer, satisfies_all};
pub use scenario::{scenario, scenarios, Scenario};
pub use strategy::well_formed_request;

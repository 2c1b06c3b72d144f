//! Request validation and preprocessing.
//!
//! Runs the checks below in order. A stage only runs while every earlier
//! stage passed; within a stage all violations are collected, so a rejected
//! request reports its structural failures deterministically.
//!
//! 1. Bounds: catalog size and customer count in range, one order per
//!    customer, at least as many colors as customers.
//! 2. Per-customer structure: odd length, `T` matches the pair count, values
//!    non-negative, colors in the catalog, finishes binary, at most one matte
//!    pair, no duplicate pair.
//! 3. Global load: at most [`MAX_TOTAL_PREFERENCES`] pairs overall.
//! 4. Conflicts: two single-preference customers may not contest one slot.
//! 5. Forced finishes: a single-preference customer that is the sole
//!    referencer of its pair fixes that slot.
//! 6. Defaults: colors nobody references are glossy.

use std::collections::HashSet;

use tracing::info;

use crate::error::{Rejection, Violation};
use crate::finish::Finish;
use crate::matrix::PreferenceMatrix;
use crate::request::{Request, ValuePath};
use crate::solution::SolutionVector;
use crate::stats::RequestStats;
use crate::{MAX_COLORS, MAX_CUSTOMERS, MAX_TOTAL_PREFERENCES};

/// A validated request, ready for the search.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    matrix: PreferenceMatrix,
    solution: SolutionVector,
    stats: RequestStats,
    orders: Vec<Vec<(usize, Finish)>>,
    forced: Vec<usize>,
    defaulted: Vec<usize>,
}

impl PreparedRequest {
    pub fn color_count(&self) -> usize {
        self.matrix.color_count()
    }

    pub fn customer_count(&self) -> usize {
        self.matrix.customer_count()
    }

    pub fn matrix(&self) -> &PreferenceMatrix {
        &self.matrix
    }

    /// The partial solution: forced and defaulted slots resolved.
    pub fn solution(&self) -> &SolutionVector {
        &self.solution
    }

    pub fn stats(&self) -> &RequestStats {
        &self.stats
    }

    /// Orders as 0-based (color, finish) pairs, in request order.
    pub fn orders(&self) -> &[Vec<(usize, Finish)>] {
        &self.orders
    }

    /// Colors whose finish a single-preference customer forced.
    pub fn forced_colors(&self) -> &[usize] {
        &self.forced
    }

    /// Colors nobody referenced, set to glossy.
    pub fn defaulted_colors(&self) -> &[usize] {
        &self.defaulted
    }
}

/// Validates a [`Request`] and derives the preference structures.
///
/// # Examples
///
/// ```
/// use paintshop_core::{Finish, Request, RequestValidator, Slot};
///
/// let request = Request::new(5, 2, vec![vec![1, 5, 1], vec![2, 1, 0, 2, 1]]);
/// let prepared = RequestValidator::new(&request).validate().unwrap();
///
/// // Color 5 is forced matte, colors 3 and 4 are unreferenced.
/// assert_eq!(prepared.solution().get(4), Slot::Matte);
/// assert_eq!(prepared.solution().get(2), Slot::Glossy);
/// assert_eq!(prepared.solution().unresolved_colors(), vec![0, 1]);
/// assert!(prepared.matrix().likes(1, 1, Finish::Matte));
///
/// let contested = Request::new(2, 2, vec![vec![1, 1, 0], vec![1, 1, 0]]);
/// assert!(RequestValidator::new(&contested).validate().is_err());
/// ```
#[derive(Debug)]
pub struct RequestValidator<'a> {
    request: &'a Request,
    violations: Vec<Violation>,
}

impl<'a> RequestValidator<'a> {
    pub fn new(request: &'a Request) -> Self {
        Self {
            request,
            violations: Vec::new(),
        }
    }

    #[inline]
    fn possible(&self) -> bool {
        self.violations.is_empty()
    }

    fn reject(self) -> Rejection {
        info!(
            event = "validation_rejected",
            violations = self.violations.len(),
            first = %self.violations[0],
        );
        Rejection::new(self.violations)
    }

    /// Runs every check and builds the prepared request.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] listing the violations of the first failing
    /// stage.
    pub fn validate(mut self) -> Result<PreparedRequest, Rejection> {
        self.check_bounds();
        if !self.possible() {
            return Err(self.reject());
        }

        // Bounds passed, so both counts are in 1..=2000.
        let colors = self.request.colors as usize;
        let customers = self.request.customers as usize;

        let orders = self.check_customers(colors);
        if !self.possible() {
            return Err(self.reject());
        }

        self.check_load(&orders);
        if !self.possible() {
            return Err(self.reject());
        }

        let mut matrix = PreferenceMatrix::new(customers, colors);
        for (customer, order) in orders.iter().enumerate() {
            for &(color, finish) in order {
                matrix.like(customer, color, finish);
            }
        }
        let stats = RequestStats::from_orders(colors, &orders);

        let mut solution = SolutionVector::unresolved(colors);
        let forced = self.check_conflicts_and_force(&stats, &mut solution);
        if !self.possible() {
            return Err(self.reject());
        }

        let defaulted: Vec<usize> = (0..colors)
            .filter(|&color| stats.color(color).customers == 0)
            .collect();
        for &color in &defaulted {
            solution.set(color, Finish::Glossy);
        }

        info!(
            event = "validation_passed",
            colors,
            customers,
            forced = forced.len(),
            defaulted = defaulted.len(),
            unresolved = solution.unresolved_colors().len(),
        );

        Ok(PreparedRequest {
            matrix,
            solution,
            stats,
            orders,
            forced,
            defaulted,
        })
    }

    fn check_bounds(&mut self) {
        let request = self.request;
        for &path in request.non_integer_values() {
            if matches!(path, ValuePath::Colors | ValuePath::Customers) {
                self.violations.push(Violation::NonInteger { path });
            }
        }
        if !(1..=MAX_COLORS).contains(&request.colors) {
            self.violations
                .push(Violation::ColorsOutOfRange(request.colors));
        }
        if !(1..=MAX_CUSTOMERS).contains(&request.customers) {
            self.violations
                .push(Violation::CustomersOutOfRange(request.customers));
        }
        if request.demands.len() as i64 != request.customers {
            self.violations.push(Violation::CustomerCountMismatch {
                declared: request.customers,
                actual: request.demands.len(),
            });
        }
        if request.colors < request.customers {
            self.violations.push(Violation::NotEnoughColors {
                colors: request.colors,
                customers: request.customers,
            });
        }
    }

    // Returns the orders as 0-based pairs; only meaningful when no violation
    // was recorded.
    fn check_customers(&mut self, colors: usize) -> Vec<Vec<(usize, Finish)>> {
        let request = self.request;
        for &path in request.non_integer_values() {
            if matches!(path, ValuePath::Order { .. } | ValuePath::Element { .. }) {
                self.violations.push(Violation::NonInteger { path });
            }
        }

        request
            .demands
            .iter()
            .enumerate()
            .map(|(customer, order)| self.check_customer(customer, order, colors))
            .collect()
    }

    fn check_customer(
        &mut self,
        customer: usize,
        order: &[i64],
        colors: usize,
    ) -> Vec<(usize, Finish)> {
        let len = order.len();
        if len % 2 != 1 {
            self.violations
                .push(Violation::EvenLength { customer, len });
        }
        if let Some(&value) = order.iter().find(|&&v| v < 0) {
            self.violations
                .push(Violation::NegativeValue { customer, value });
        }

        let Some((&declared, rest)) = order.split_first() else {
            return Vec::new();
        };
        let actual = rest.len() / 2;
        if declared != actual as i64 {
            self.violations.push(Violation::PairCountMismatch {
                customer,
                declared,
                actual,
            });
        }

        let mut pairs = Vec::with_capacity(actual);
        let mut seen = HashSet::with_capacity(actual);
        let mut matte = 0;
        for pair in rest.chunks_exact(2) {
            let (color, code) = (pair[0], pair[1]);
            let color_ok = (1..=colors as i64).contains(&color);
            if !color_ok && color >= 0 {
                self.violations
                    .push(Violation::ColorOutOfRange { customer, color });
            }
            let finish = Finish::from_code(code);
            if finish.is_none() && code >= 0 {
                self.violations
                    .push(Violation::FinishNotBinary { customer, finish: code });
            }
            if code == 1 {
                matte += 1;
            }
            if !seen.insert((color, code)) {
                self.violations.push(Violation::DuplicatePair {
                    customer,
                    color,
                    finish: code,
                });
            }
            if let (true, Some(finish)) = (color_ok, finish) {
                pairs.push(((color - 1) as usize, finish));
            }
        }
        if matte > 1 {
            self.violations
                .push(Violation::MultipleMatte { customer, count: matte });
        }
        pairs
    }

    fn check_load(&mut self, orders: &[Vec<(usize, Finish)>]) {
        let total: usize = orders.iter().map(Vec::len).sum();
        if total as i64 > MAX_TOTAL_PREFERENCES {
            self.violations.push(Violation::LoadExceeded {
                total: total as i64,
                limit: MAX_TOTAL_PREFERENCES,
            });
        }
    }

    // Returns the forced colors, ascending.
    fn check_conflicts_and_force(
        &mut self,
        stats: &RequestStats,
        solution: &mut SolutionVector,
    ) -> Vec<usize> {
        let mut forced: Vec<(usize, Finish)> = Vec::new();
        for (&(color, finish), pair) in stats.pairs() {
            if pair.single_preference_customers.len() > 1 {
                self.violations.push(Violation::ContestedPair {
                    color: color + 1,
                    finish,
                    customers: pair.single_preference_customers.clone(),
                });
            } else if pair.sole_single_preference_customer().is_some() {
                forced.push((color, finish));
            }
        }

        // Pairs iterate in (color, finish) order, so both finishes of one
        // color are adjacent.
        for window in forced.windows(2) {
            if window[0].0 == window[1].0 {
                self.violations.push(Violation::ConflictingForcedFinish {
                    color: window[0].0 + 1,
                });
            }
        }
        if !self.possible() {
            return Vec::new();
        }

        for &(color, finish) in &forced {
            solution.set(color, finish);
        }
        forced.into_iter().map(|(color, _)| color).collect()
    }
}

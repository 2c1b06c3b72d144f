//! Partition of customers into slot-bound and free customers.

use paintshop_core::{Finish, PreparedRequest};

use crate::result::InfeasibleCause;

/// Which customer, if any, is pinned to each slot.
///
/// A customer that likes exactly one distinct color is *bound* to that
/// color's slot; every other customer is *free* and placed by the
/// feasibility check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerMapping {
    occupants: Vec<Option<usize>>,
    bound: Vec<(usize, usize)>,
    free: Vec<usize>,
}

impl CustomerMapping {
    /// Maps the customers of a prepared request.
    ///
    /// # Errors
    ///
    /// Two customers bound to one slot, or a customer that likes nothing,
    /// make the request infeasible.
    pub fn new(prepared: &PreparedRequest) -> Result<Self, InfeasibleCause> {
        let matrix = prepared.matrix();
        let mut occupants: Vec<Option<usize>> = vec![None; prepared.color_count()];
        let mut bound = Vec::new();
        let mut free = Vec::new();

        for customer in 0..prepared.customer_count() {
            match prepared.stats().customer(customer).distinct_colors {
                0 => return Err(InfeasibleCause::UnsatisfiableCustomer { customer }),
                1 => {
                    let Some(color) = matrix.liked_colors(customer).next() else {
                        return Err(InfeasibleCause::UnsatisfiableCustomer { customer });
                    };
                    if let Some(other) = occupants[color] {
                        return Err(InfeasibleCause::SlotCollision {
                            color,
                            customers: [other, customer],
                        });
                    }
                    occupants[color] = Some(customer);
                    bound.push((customer, color));
                }
                _ => free.push(customer),
            }
        }

        Ok(Self {
            occupants,
            bound,
            free,
        })
    }

    /// The bound customer of a slot.
    #[inline]
    pub fn occupant(&self, color: usize) -> Option<usize> {
        self.occupants[color]
    }

    /// Bound (customer, color) pairs, by customer.
    pub fn bound(&self) -> &[(usize, usize)] {
        &self.bound
    }

    /// Free customers, ascending.
    pub fn free(&self) -> &[usize] {
        &self.free
    }

    /// Every customer is bound, so each slot serves at most its occupant.
    pub fn covers_all_customers(&self) -> bool {
        self.free.is_empty()
    }

    /// Completes the partial solution when every customer is bound: each
    /// unresolved occupied slot takes the cheapest finish its occupant
    /// likes, every other unresolved slot is glossy.
    pub fn complete_trivially(&self, prepared: &PreparedRequest) -> Vec<Finish> {
        let matrix = prepared.matrix();
        prepared
            .solution()
            .slots()
            .iter()
            .enumerate()
            .map(|(color, slot)| {
                if let Some(finish) = slot.finish() {
                    return finish;
                }
                self.occupant(color)
                    .and_then(|customer| {
                        Finish::ALL
                            .into_iter()
                            .find(|&finish| matrix.likes(customer, color, finish))
                    })
                    .unwrap_or(Finish::Glossy)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paintshop_core::{Request, RequestValidator};

    fn prepare(colors: i64, demands: Vec<Vec<i64>>) -> PreparedRequest {
        let request = Request::new(colors, demands.len() as i64, demands);
        RequestValidator::new(&request).validate().unwrap()
    }

    #[test]
    fn test_bound_and_free_customers() {
        let prepared = prepare(3, vec![vec![1, 1, 1], vec![2, 1, 0, 2, 1], vec![2, 3, 0, 3, 1]]);
        let mapping = CustomerMapping::new(&prepared).unwrap();

        assert_eq!(mapping.bound(), &[(0, 0), (2, 2)]);
        assert_eq!(mapping.free(), &[1]);
        assert_eq!(mapping.occupant(0), Some(0));
        assert_eq!(mapping.occupant(1), None);
        assert!(!mapping.covers_all_customers());
    }

    #[test]
    fn test_slot_collision() {
        // Both customers like only color 1; neither pair is forced since
        // customer 1 has two preferences.
        let prepared = prepare(2, vec![vec![1, 1, 0], vec![2, 1, 0, 1, 1]]);
        assert_eq!(
            CustomerMapping::new(&prepared),
            Err(InfeasibleCause::SlotCollision {
                color: 0,
                customers: [0, 1]
            })
        );
    }

    #[test]
    fn test_customer_without_preferences() {
        let prepared = prepare(2, vec![vec![0], vec![1, 2, 0]]);
        assert_eq!(
            CustomerMapping::new(&prepared),
            Err(InfeasibleCause::UnsatisfiableCustomer { customer: 0 })
        );
    }

    #[test]
    fn test_trivial_completion_prefers_glossy() {
        let prepared = prepare(3, vec![vec![2, 1, 0, 1, 1], vec![1, 2, 1]]);
        let mapping = CustomerMapping::new(&prepared).unwrap();

        assert!(mapping.covers_all_customers());
        assert_eq!(
            mapping.complete_trivially(&prepared),
            vec![Finish::Glossy, Finish::Matte, Finish::Glossy]
        );
    }
}

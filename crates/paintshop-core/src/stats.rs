//! Per-customer, per-pair and per-color aggregates of a validated request.

use std::collections::BTreeMap;

use crate::finish::Finish;

/// Aggregates of one customer's order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CustomerStats {
    /// Declared pair count `T`.
    pub declared_pairs: usize,
    /// Distinct colors the customer likes.
    pub distinct_colors: usize,
    /// Liked pairs of the customer if it has exactly one preference, else 0.
    pub single_preference_pairs: usize,
}

impl CustomerStats {
    /// A customer with exactly one preference has no alternative.
    #[inline]
    pub fn is_single_preference(&self) -> bool {
        self.declared_pairs == 1
    }
}

/// Aggregates of one (color, finish) pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PairStats {
    /// Distinct customers referencing the pair, ascending.
    pub customers: Vec<usize>,
    /// Those of `customers` with exactly one preference.
    pub single_preference_customers: Vec<usize>,
}

impl PairStats {
    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub fn has_single_preference(&self) -> bool {
        !self.single_preference_customers.is_empty()
    }

    /// The single-preference customer that is the sole referencer, if any.
    pub fn sole_single_preference_customer(&self) -> Option<usize> {
        match (
            self.customers.as_slice(),
            self.single_preference_customers.as_slice(),
        ) {
            ([only], [single]) if only == single => Some(*only),
            _ => None,
        }
    }
}

/// Aggregates of one color across both finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorStats {
    /// Distinct customers referencing the color.
    pub customers: usize,
    /// Distinct finishes requested for the color.
    pub finishes: usize,
}

/// All aggregates of a validated request.
///
/// # Examples
///
/// ```
/// use paintshop_core::{Finish, RequestStats};
///
/// let orders = vec![
///     vec![(0, Finish::Glossy)],
///     vec![(1, Finish::Matte), (1, Finish::Glossy)],
///     vec![(0, Finish::Glossy), (1, Finish::Matte), (1, Finish::Glossy)],
/// ];
/// let stats = RequestStats::from_orders(2, &orders);
///
/// assert_eq!(stats.color(0).customers, 2);
/// assert_eq!(stats.color(1).finishes, 2);
/// assert!(stats.customer(0).is_single_preference());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestStats {
    customers: Vec<CustomerStats>,
    pairs: BTreeMap<(usize, Finish), PairStats>,
    colors: Vec<ColorStats>,
}

impl RequestStats {
    /// Aggregates validated orders of 0-based (color, finish) pairs.
    pub fn from_orders(colors: usize, orders: &[Vec<(usize, Finish)>]) -> Self {
        let mut pairs: BTreeMap<(usize, Finish), PairStats> = BTreeMap::new();
        let mut color_customers = vec![0usize; colors];
        let mut color_finishes = vec![[false; 2]; colors];

        let customers = orders
            .iter()
            .enumerate()
            .map(|(customer, order)| {
                let declared_pairs = order.len();
                let single = declared_pairs == 1;

                let mut liked_colors: Vec<usize> = order.iter().map(|&(color, _)| color).collect();
                liked_colors.sort_unstable();
                liked_colors.dedup();
                for &color in &liked_colors {
                    color_customers[color] += 1;
                }

                for &(color, finish) in order {
                    color_finishes[color][finish.index()] = true;
                    let entry = pairs.entry((color, finish)).or_default();
                    entry.customers.push(customer);
                    if single {
                        entry.single_preference_customers.push(customer);
                    }
                }

                CustomerStats {
                    declared_pairs,
                    distinct_colors: liked_colors.len(),
                    single_preference_pairs: if single { declared_pairs } else { 0 },
                }
            })
            .collect();

        let colors = color_customers
            .into_iter()
            .zip(color_finishes)
            .map(|(customers, finishes)| ColorStats {
                customers,
                finishes: finishes.iter().filter(|&&f| f).count(),
            })
            .collect();

        Self {
            customers,
            pairs,
            colors,
        }
    }

    pub fn customer(&self, customer: usize) -> &CustomerStats {
        &self.customers[customer]
    }

    pub fn customers(&self) -> &[CustomerStats] {
        &self.customers
    }

    pub fn pair(&self, color: usize, finish: Finish) -> Option<&PairStats> {
        self.pairs.get(&(color, finish))
    }

    /// Referenced pairs in (color, finish) order.
    pub fn pairs(&self) -> impl Iterator<Item = (&(usize, Finish), &PairStats)> {
        self.pairs.iter()
    }

    pub fn color(&self, color: usize) -> &ColorStats {
        &self.colors[color]
    }

    pub fn colors(&self) -> &[ColorStats] {
        &self.colors
    }

    /// Sum of declared pair counts.
    pub fn total_pairs(&self) -> usize {
        self.customers.iter().map(|c| c.declared_pairs).sum()
    }
}

//! The (customer, color, finish) preference matrix.

use crate::finish::{Finish, Preference};

/// Dense preference lookup indexed by 0-based customer and color.
///
/// Built once by the validator and immutable afterward.
///
/// # Examples
///
/// ```
/// use paintshop_core::{Finish, Preference, PreferenceMatrix};
///
/// let mut matrix = PreferenceMatrix::new(2, 3);
/// matrix.like(1, 2, Finish::Matte);
///
/// assert_eq!(matrix.get(1, 2, Finish::Matte), Preference::Liked);
/// assert_eq!(matrix.get(1, 2, Finish::Glossy), Preference::Unknown);
/// assert_eq!(matrix.liked_colors(1).collect::<Vec<_>>(), vec![2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceMatrix {
    customers: usize,
    colors: usize,
    cells: Vec<Preference>,
}

impl PreferenceMatrix {
    pub fn new(customers: usize, colors: usize) -> Self {
        Self {
            customers,
            colors,
            cells: vec![Preference::Unknown; customers * colors * 2],
        }
    }

    #[inline]
    fn offset(&self, customer: usize, color: usize, finish: Finish) -> usize {
        debug_assert!(customer < self.customers && color < self.colors);
        (customer * self.colors + color) * 2 + finish.index()
    }

    /// Marks a pair as liked.
    pub fn like(&mut self, customer: usize, color: usize, finish: Finish) {
        let offset = self.offset(customer, color, finish);
        self.cells[offset] = Preference::Liked;
    }

    #[inline]
    pub fn get(&self, customer: usize, color: usize, finish: Finish) -> Preference {
        self.cells[self.offset(customer, color, finish)]
    }

    #[inline]
    pub fn likes(&self, customer: usize, color: usize, finish: Finish) -> bool {
        self.get(customer, color, finish).is_liked()
    }

    /// Whether the customer likes the color in either finish.
    pub fn likes_color(&self, customer: usize, color: usize) -> bool {
        Finish::ALL
            .iter()
            .any(|&finish| self.likes(customer, color, finish))
    }

    /// Distinct colors the customer likes, ascending.
    pub fn liked_colors(&self, customer: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.colors).filter(move |&color| self.likes_color(customer, color))
    }

    pub fn customer_count(&self) -> usize {
        self.customers
    }

    pub fn color_count(&self) -> usize {
        self.colors
    }
}

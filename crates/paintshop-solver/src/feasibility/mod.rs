//! Feasibility checks for candidate finish vectors.
//!
//! A candidate is feasible when every free customer can be placed on a
//! distinct open slot (an unresolved slot without a bound occupant) whose
//! candidate finish the customer likes. Open slots left without a customer
//! are placeholders and accept either finish.
//!
//! - [`MatchingCheck`] decides this with augmenting paths (Kuhn's
//!   algorithm), polynomial in the number of customers and slots.
//! - [`PermutationCheck`] enumerates arrangements of customers and
//!   placeholders until one fits; it is the brute-force reference.

mod matching;
mod permutation;

use std::fmt::Debug;

use paintshop_core::{Finish, PreferenceMatrix};

pub use matching::MatchingCheck;
pub use permutation::PermutationCheck;

/// Compatibility table between free customers and open slots.
#[derive(Debug, Clone)]
pub struct PlacementProblem {
    // (position in the candidate vector, color) per open slot.
    open: Vec<(usize, usize)>,
    free: Vec<usize>,
    // Per (free customer, open slot): liked in [glossy, matte].
    likes: Vec<[bool; 2]>,
}

impl PlacementProblem {
    /// Builds the table for `free` customers over `open` slots, each given
    /// as (position in the candidate vector, color).
    pub fn new(matrix: &PreferenceMatrix, free: &[usize], open: Vec<(usize, usize)>) -> Self {
        let mut likes = Vec::with_capacity(free.len() * open.len());
        for &customer in free {
            for &(_, color) in &open {
                likes.push([
                    matrix.likes(customer, color, Finish::Glossy),
                    matrix.likes(customer, color, Finish::Matte),
                ]);
            }
        }
        Self {
            open,
            free: free.to_vec(),
            likes,
        }
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Customer id of the `index`-th free customer.
    pub fn customer(&self, index: usize) -> usize {
        self.free[index]
    }

    /// Color of the `slot`-th open slot.
    pub fn color(&self, slot: usize) -> usize {
        self.open[slot].1
    }

    /// Whether free customer `index` likes open slot `slot` under `candidate`.
    #[inline]
    pub fn compatible(&self, index: usize, slot: usize, candidate: &[Finish]) -> bool {
        let finish = candidate[self.open[slot].0];
        self.likes[index * self.open.len() + slot][finish.index()]
    }
}

/// Result of one feasibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub feasible: bool,
    /// Placements tried while deciding.
    pub placements: u64,
}

/// Decides whether the free customers fit a candidate.
pub trait FeasibilityChecker: Debug {
    fn check(&mut self, problem: &PlacementProblem, candidate: &[Finish]) -> Verdict;
}

#[cfg(test)]
mod tests;

//! Brute-force arrangement enumeration.

use paintshop_core::Finish;

use super::{FeasibilityChecker, PlacementProblem, Verdict};
use crate::candidate::next_permutation;

/// Tries every distinct arrangement of free customers and placeholders over
/// the open slots, in lexicographic order, and stops at the first one in
/// which every placed customer likes its slot.
///
/// Runs in factorial time; kept as the reference for [`MatchingCheck`].
///
/// [`MatchingCheck`]: super::MatchingCheck
#[derive(Debug, Clone, Default)]
pub struct PermutationCheck {
    arrangement: Vec<Option<usize>>,
}

impl PermutationCheck {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeasibilityChecker for PermutationCheck {
    fn check(&mut self, problem: &PlacementProblem, candidate: &[Finish]) -> Verdict {
        let mut placements = 0;
        let (free, open) = (problem.free_count(), problem.open_count());
        if free > open {
            return Verdict {
                feasible: false,
                placements,
            };
        }

        // Placeholders (None) sort first.
        self.arrangement.clear();
        self.arrangement.resize(open - free, None);
        self.arrangement.extend((0..free).map(Some));

        loop {
            placements += 1;
            let fits = self
                .arrangement
                .iter()
                .enumerate()
                .all(|(slot, customer)| {
                    customer.map_or(true, |c| problem.compatible(c, slot, candidate))
                });
            if fits {
                return Verdict {
                    feasible: true,
                    placements,
                };
            }
            if !next_permutation(&mut self.arrangement) {
                return Verdict {
                    feasible: false,
                    placements,
                };
            }
        }
    }
}

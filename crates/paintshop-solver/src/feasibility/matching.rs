//! Augmenting-path bipartite matching.

use paintshop_core::Finish;

use super::{FeasibilityChecker, PlacementProblem, Verdict};

/// Places customers one by one, re-routing earlier placements along
/// augmenting paths when a customer's compatible slots are all taken.
///
/// Buffers are reused across checks.
#[derive(Debug, Clone, Default)]
pub struct MatchingCheck {
    owner: Vec<Option<usize>>,
    visited: Vec<bool>,
}

impl MatchingCheck {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeasibilityChecker for MatchingCheck {
    fn check(&mut self, problem: &PlacementProblem, candidate: &[Finish]) -> Verdict {
        let mut placements = 0;
        if problem.free_count() > problem.open_count() {
            return Verdict {
                feasible: false,
                placements,
            };
        }

        self.owner.clear();
        self.owner.resize(problem.open_count(), None);

        for customer in 0..problem.free_count() {
            self.visited.clear();
            self.visited.resize(problem.open_count(), false);
            let mut search = Augment {
                problem,
                candidate,
                owner: &mut self.owner,
                visited: &mut self.visited,
                placements: &mut placements,
            };
            if !search.run(customer) {
                return Verdict {
                    feasible: false,
                    placements,
                };
            }
        }

        Verdict {
            feasible: true,
            placements,
        }
    }
}

struct Augment<'a> {
    problem: &'a PlacementProblem,
    candidate: &'a [Finish],
    owner: &'a mut Vec<Option<usize>>,
    visited: &'a mut Vec<bool>,
    placements: &'a mut u64,
}

impl Augment<'_> {
    fn run(&mut self, customer: usize) -> bool {
        for slot in 0..self.problem.open_count() {
            if self.visited[slot] || !self.problem.compatible(customer, slot, self.candidate) {
                continue;
            }
            self.visited[slot] = true;
            *self.placements += 1;
            let rerouted = match self.owner[slot] {
                None => true,
                Some(previous) => self.run(previous),
            };
            if rerouted {
                self.owner[slot] = Some(customer);
                return true;
            }
        }
        false
    }
}

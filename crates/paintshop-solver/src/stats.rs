//! Search statistics.

use std::time::Duration;

/// Counters of one search run.
///
/// # Example
///
/// ```
/// use paintshop_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.record_candidate(true);
/// stats.record_candidate(false);
/// stats.record_placements(3);
///
/// assert_eq!(stats.candidates_evaluated, 2);
/// assert_eq!(stats.feasible_candidates, 1);
/// assert_eq!(stats.placements_tried, 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate finish vectors evaluated.
    pub candidates_evaluated: u64,
    /// Evaluated candidates that were feasible.
    pub feasible_candidates: u64,
    /// Candidates skipped because they could not beat the best so far.
    pub candidates_pruned: u64,
    /// Customer placements tried by the feasibility check: arrangements
    /// for the permutation check, augmenting-path visits for matching.
    pub placements_tried: u64,
    /// Unresolved slots the search had to decide.
    pub unresolved_slots: usize,
    /// Free customers placed by the feasibility check.
    pub free_customers: usize,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl SearchStats {
    /// Records a candidate evaluation and whether it was feasible.
    pub fn record_candidate(&mut self, feasible: bool) {
        self.candidates_evaluated += 1;
        if feasible {
            self.feasible_candidates += 1;
        }
    }

    pub fn record_pruned(&mut self) {
        self.candidates_pruned += 1;
    }

    pub fn record_placements(&mut self, count: u64) {
        self.placements_tried += count;
    }

    /// Returns the candidates per second rate.
    pub fn candidates_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.candidates_evaluated as f64 / secs
        } else {
            0.0
        }
    }
}

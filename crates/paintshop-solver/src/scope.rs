//! Search-level scope.

use std::time::{Duration, Instant};

use crate::stats::SearchStats;

/// State of one search run, as seen by terminations.
#[derive(Debug, Default)]
pub struct SearchScope {
    start_time: Option<Instant>,
    stats: SearchStats,
    best_fitness: Option<usize>,
}

impl SearchScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the start of searching.
    pub fn start_searching(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Elapsed time since [`start_searching`](Self::start_searching).
    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }

    /// Candidates enumerated so far, evaluated or pruned.
    pub fn candidate_count(&self) -> u64 {
        self.stats.candidates_evaluated + self.stats.candidates_pruned
    }

    /// Fitness of the best feasible candidate so far.
    pub fn best_fitness(&self) -> Option<usize> {
        self.best_fitness
    }

    pub(crate) fn set_best_fitness(&mut self, fitness: usize) {
        self.best_fitness = Some(fitness);
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    /// Finishes the run and returns its statistics.
    pub(crate) fn into_stats(mut self) -> SearchStats {
        self.stats.elapsed = self.elapsed().unwrap_or_default();
        self.stats
    }
}

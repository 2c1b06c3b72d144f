//! Exhaustive candidate search over the unresolved slots.

use std::time::Instant;

use paintshop_config::{EnvironmentMode, FeasibilityCheck, SearchOrder, SolverConfig};
use paintshop_core::{Assignment, Finish, PreparedRequest};
use tracing::{debug, info, trace};

use crate::candidate::CandidateEnumerator;
use crate::feasibility::{
    FeasibilityChecker, MatchingCheck, PermutationCheck, PlacementProblem,
};
use crate::mapping::CustomerMapping;
use crate::result::{InfeasibleCause, SearchOutcome, SearchResult, TerminationReason};
use crate::scope::SearchScope;
use crate::termination::Termination;

// Largest open slot count for which full assertion re-checks verdicts
// with the permutation check.
const FULL_ASSERT_OPEN_SLOTS: usize = 10;

/// Finds the assignment with the fewest matte slots that satisfies every
/// customer of a prepared request.
///
/// Among assignments with the fewest matte slots, the lexicographically
/// smallest finish vector (glossy before matte, first color most
/// significant) is returned. Both search orders agree on it.
///
/// # Examples
///
/// ```
/// use paintshop_config::SolverConfig;
/// use paintshop_core::{Request, RequestValidator};
/// use paintshop_solver::search::CombinatorialSearch;
/// use paintshop_solver::termination::NeverTermination;
///
/// let request = Request::new(
///     5,
///     3,
///     vec![vec![1, 1, 1], vec![2, 1, 0, 2, 0], vec![1, 5, 0]],
/// );
/// let prepared = RequestValidator::new(&request).validate().unwrap();
/// let result = CombinatorialSearch::new(&prepared, &SolverConfig::default())
///     .run(&NeverTermination);
///
/// assert!(result.is_optimal());
/// assert_eq!(result.outcome.assignment().unwrap().to_string(), "1 0 0 0 0");
/// ```
#[derive(Debug, Clone)]
pub struct CombinatorialSearch<'a> {
    prepared: &'a PreparedRequest,
    order: SearchOrder,
    check: FeasibilityCheck,
    mode: EnvironmentMode,
}

impl<'a> CombinatorialSearch<'a> {
    pub fn new(prepared: &'a PreparedRequest, config: &SolverConfig) -> Self {
        Self {
            prepared,
            order: config.search_order,
            check: config.feasibility_check,
            mode: config.environment_mode,
        }
    }

    /// Runs the search until it proves its outcome or `termination` fires.
    pub fn run<T: Termination>(&self, termination: &T) -> SearchResult {
        match self.check {
            FeasibilityCheck::Matching => self.run_with(MatchingCheck::new(), termination),
            FeasibilityCheck::Permutation => self.run_with(PermutationCheck::new(), termination),
        }
    }

    fn run_with<C, T>(&self, mut checker: C, termination: &T) -> SearchResult
    where
        C: FeasibilityChecker,
        T: Termination,
    {
        let mut scope = SearchScope::new();
        scope.start_searching();

        let mapping = match self.map_customers() {
            Ok(mapping) => mapping,
            Err(cause) => return self.infeasible(scope, cause),
        };

        let solution = self.prepared.solution();
        let unresolved = solution.unresolved_colors();
        scope.stats_mut().unresolved_slots = unresolved.len();
        scope.stats_mut().free_customers = mapping.free().len();

        info!(
            event = "search_start",
            colors = self.prepared.color_count(),
            customers = self.prepared.customer_count(),
            unresolved_slots = unresolved.len(),
            free_customers = mapping.free().len(),
            order = ?self.order,
            check = ?self.check,
        );

        if mapping.covers_all_customers() {
            let assignment = Assignment::new(mapping.complete_trivially(self.prepared));
            return self.finish(scope, SearchOutcome::Optimal(assignment));
        }

        let open: Vec<(usize, usize)> = unresolved
            .iter()
            .enumerate()
            .filter(|&(_, &color)| mapping.occupant(color).is_none())
            .map(|(position, &color)| (position, color))
            .collect();
        if mapping.free().len() > open.len() {
            let cause = InfeasibleCause::NotEnoughOpenSlots {
                free_customers: mapping.free().len(),
                open_slots: open.len(),
            };
            return self.infeasible(scope, cause);
        }

        let matrix = self.prepared.matrix();
        let problem = PlacementProblem::new(matrix, mapping.free(), open);

        // Bound occupants of unresolved slots: (position, liked in [glossy, matte]).
        let occupied: Vec<(usize, [bool; 2])> = unresolved
            .iter()
            .enumerate()
            .filter_map(|(position, &color)| {
                let customer = mapping.occupant(color)?;
                Some((
                    position,
                    [
                        matrix.likes(customer, color, Finish::Glossy),
                        matrix.likes(customer, color, Finish::Matte),
                    ],
                ))
            })
            .collect();
        let occupants_served = |candidate: &[Finish]| {
            occupied
                .iter()
                .all(|&(position, liked)| liked[candidate[position].index()])
        };

        // Occupants liking only matte force it; nothing cheaper exists.
        let lower_bound = occupied.iter().filter(|(_, liked)| !liked[0]).count();

        let mut reference = self
            .mode
            .is_fully_asserted()
            .then(PermutationCheck::new)
            .filter(|_| problem.open_count() <= FULL_ASSERT_OPEN_SLOTS);

        let mut candidates = CandidateEnumerator::new(self.order, unresolved.len());
        let mut best: Option<(usize, Vec<Finish>)> = None;
        let mut aborted = false;
        let mut last_progress_time = Instant::now();
        let mut last_progress_count = 0u64;

        loop {
            let Some(candidate) = candidates.advance() else {
                break;
            };
            if termination.is_terminated(&scope) {
                aborted = true;
                break;
            }
            let matte = candidate.iter().filter(|f| f.is_matte()).count();

            if best.as_ref().is_some_and(|(best_matte, _)| matte >= *best_matte) {
                scope.stats_mut().record_pruned();
                continue;
            }

            let feasible = occupants_served(candidate) && {
                let verdict = checker.check(&problem, candidate);
                scope.stats_mut().record_placements(verdict.placements);
                if let Some(reference) = reference.as_mut() {
                    let expected = reference.check(&problem, candidate);
                    assert_eq!(
                        verdict.feasible, expected.feasible,
                        "feasibility checks disagree on candidate {:?}",
                        candidate
                    );
                }
                verdict.feasible
            };
            scope.stats_mut().record_candidate(feasible);

            trace!(
                event = "candidate",
                candidate = scope.candidate_count(),
                matte = matte,
                feasible = feasible,
            );

            let now = Instant::now();
            if now.duration_since(last_progress_time).as_secs() >= 1 {
                let evaluated = scope.stats().candidates_evaluated;
                let elapsed_secs = now.duration_since(last_progress_time).as_secs_f64();
                let speed = ((evaluated - last_progress_count) as f64 / elapsed_secs) as u64;
                match scope.best_fitness() {
                    Some(best) => debug!(
                        event = "progress",
                        candidates = scope.candidate_count(),
                        speed = speed,
                        best_matte = best,
                    ),
                    None => debug!(
                        event = "progress",
                        candidates = scope.candidate_count(),
                        speed = speed,
                    ),
                }
                last_progress_time = now;
                last_progress_count = evaluated;
            }

            if feasible {
                let fitness = solution.matte_count() + matte;
                scope.set_best_fitness(fitness);
                debug!(event = "improved", matte = fitness);
                best = Some((matte, candidate.to_vec()));

                // The first feasible candidate of the matte-count order is
                // optimal; the lexicographic order stops at the bound.
                if self.order == SearchOrder::MatteCount || matte <= lower_bound {
                    break;
                }
            }
        }

        let outcome = match best {
            Some((_, candidate)) => {
                let assignment = self.complete(&unresolved, &candidate);
                if aborted {
                    SearchOutcome::Feasible(assignment)
                } else {
                    SearchOutcome::Optimal(assignment)
                }
            }
            None if aborted => SearchOutcome::Unknown,
            None => SearchOutcome::Infeasible(InfeasibleCause::Exhausted),
        };
        self.finish(scope, outcome)
    }

    // Customer mapping plus a check that bound occupants of resolved slots
    // like the resolved finish.
    fn map_customers(&self) -> Result<CustomerMapping, InfeasibleCause> {
        let mapping = CustomerMapping::new(self.prepared)?;
        let solution = self.prepared.solution();
        for &(customer, color) in mapping.bound() {
            if let Some(finish) = solution.get(color).finish() {
                if !self.prepared.matrix().likes(customer, color, finish) {
                    return Err(InfeasibleCause::UnsatisfiableCustomer { customer });
                }
            }
        }
        Ok(mapping)
    }

    fn complete(&self, unresolved: &[usize], candidate: &[Finish]) -> Assignment {
        let mut finishes: Vec<Finish> = self
            .prepared
            .solution()
            .slots()
            .iter()
            .map(|slot| slot.finish().unwrap_or(Finish::Glossy))
            .collect();
        for (&color, &finish) in unresolved.iter().zip(candidate) {
            finishes[color] = finish;
        }
        Assignment::new(finishes)
    }

    fn infeasible(&self, scope: SearchScope, cause: InfeasibleCause) -> SearchResult {
        debug!(event = "infeasible", cause = %cause);
        self.finish(scope, SearchOutcome::Infeasible(cause))
    }

    fn finish(&self, scope: SearchScope, outcome: SearchOutcome) -> SearchResult {
        if self.mode.is_asserted() {
            if let Some(assignment) = outcome.assignment() {
                self.assert_satisfied(assignment);
            }
        }

        let reason = match &outcome {
            SearchOutcome::Optimal(_) => TerminationReason::OptimalityProven,
            SearchOutcome::Infeasible(_) => TerminationReason::InfeasibilityProven,
            SearchOutcome::Feasible(_) | SearchOutcome::Unknown => TerminationReason::Aborted,
        };
        let stats = scope.into_stats();

        info!(
            event = "search_end",
            outcome = %outcome,
            reason = %reason,
            candidates = stats.candidates_evaluated,
            pruned = stats.candidates_pruned,
            placements = stats.placements_tried,
            duration_ms = stats.elapsed.as_millis() as u64,
            speed = stats.candidates_per_second() as u64,
        );

        SearchResult::new(outcome, reason, stats)
    }

    fn assert_satisfied(&self, assignment: &Assignment) {
        assert_eq!(
            assignment.len(),
            self.prepared.color_count(),
            "assignment covers {} of {} colors",
            assignment.len(),
            self.prepared.color_count()
        );
        for (customer, order) in self.prepared.orders().iter().enumerate() {
            assert!(
                assignment.satisfies(order),
                "customer {} is not satisfied by {}",
                customer,
                assignment
            );
        }
    }
}

#[cfg(test)]
mod tests;

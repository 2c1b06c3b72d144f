//! Termination conditions for the candidate search.
//!
//! The search checks its termination before every candidate. A terminated
//! search reports the best assignment found so far without proving it
//! optimal.

mod budget;
mod composite;

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::scope::SearchScope;

pub use budget::{CandidateCountTermination, TimeTermination};
pub use composite::OrTermination;

/// Trait for determining when to stop searching.
pub trait Termination: Debug {
    /// Returns true if the search should stop.
    fn is_terminated(&self, scope: &SearchScope) -> bool;
}

/// Never terminates; the search runs to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverTermination;

impl Termination for NeverTermination {
    fn is_terminated(&self, _scope: &SearchScope) -> bool {
        false
    }
}

/// Stops the search once a cancellation flag is raised.
///
/// [`Solver::terminate_early`](crate::Solver::terminate_early) raises the
/// flag from another thread; the search sees it before its next candidate.
#[derive(Debug, Clone, Copy)]
pub struct ExternalTermination<'a> {
    cancelled: &'a AtomicBool,
}

impl<'a> ExternalTermination<'a> {
    pub fn new(cancelled: &'a AtomicBool) -> Self {
        Self { cancelled }
    }
}

impl Termination for ExternalTermination<'_> {
    fn is_terminated(&self, _scope: &SearchScope) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// An absent termination never fires.
impl<T: Termination> Termination for Option<T> {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        self.as_ref().is_some_and(|t| t.is_terminated(scope))
    }
}

impl<T: Termination + ?Sized> Termination for &T {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        (**self).is_terminated(scope)
    }
}

#[cfg(test)]
mod tests;

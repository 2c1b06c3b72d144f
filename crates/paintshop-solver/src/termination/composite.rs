//! Any-of composition over a tuple of terminations.

use super::Termination;
use crate::scope::SearchScope;

/// Stops the search when any member of the tuple does.
///
/// [`Solver`](crate::Solver) combines the optional configured budgets with
/// its cancellation flag this way, so absent limits cost a `None` check.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use paintshop_solver::termination::{
///     CandidateCountTermination, OrTermination, TimeTermination,
/// };
///
/// let budgets = OrTermination::new((
///     TimeTermination::new(Duration::from_secs(30)),
///     CandidateCountTermination::new(1000),
/// ));
/// ```
#[derive(Debug)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn is_terminated(&self, scope: &SearchScope) -> bool {
                $((self.0).$idx.is_terminated(scope))||+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);

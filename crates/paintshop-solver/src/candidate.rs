//! Enumeration of candidate finish vectors over the unresolved slots.

use paintshop_config::SearchOrder;
use paintshop_core::Finish;

/// Streams every finish vector of a fixed length exactly once.
///
/// [`SearchOrder::Lexicographic`] walks all vectors in lexicographic order
/// (glossy before matte, first slot most significant).
/// [`SearchOrder::MatteCount`] walks them grouped by ascending matte count,
/// lexicographically within a group.
///
/// # Examples
///
/// ```
/// use paintshop_config::SearchOrder;
/// use paintshop_core::Finish::{Glossy as G, Matte as M};
/// use paintshop_solver::candidate::CandidateEnumerator;
///
/// let mut candidates = CandidateEnumerator::new(SearchOrder::MatteCount, 2);
/// let mut seen = Vec::new();
/// while let Some(candidate) = candidates.advance() {
///     seen.push(candidate.to_vec());
/// }
/// assert_eq!(seen, vec![vec![G, G], vec![G, M], vec![M, G], vec![M, M]]);
/// ```
#[derive(Debug, Clone)]
pub struct CandidateEnumerator {
    order: SearchOrder,
    current: Vec<Finish>,
    matte: usize,
    started: bool,
    done: bool,
}

impl CandidateEnumerator {
    pub fn new(order: SearchOrder, len: usize) -> Self {
        Self {
            order,
            current: vec![Finish::Glossy; len],
            matte: 0,
            started: false,
            done: false,
        }
    }

    /// Moves to the next candidate and returns it.
    pub fn advance(&mut self) -> Option<&[Finish]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current.as_slice());
        }
        let stepped = match self.order {
            SearchOrder::Lexicographic => increment(&mut self.current),
            SearchOrder::MatteCount => {
                next_permutation(&mut self.current) || self.next_matte_group()
            }
        };
        if stepped {
            Some(self.current.as_slice())
        } else {
            self.done = true;
            None
        }
    }

    /// Matte slots of the current candidate.
    pub fn matte_count(&self) -> usize {
        self.current.iter().filter(|f| f.is_matte()).count()
    }

    // First vector with one more matte slot: mattes packed at the end.
    fn next_matte_group(&mut self) -> bool {
        if self.matte == self.current.len() {
            return false;
        }
        self.matte += 1;
        let split = self.current.len() - self.matte;
        for (i, finish) in self.current.iter_mut().enumerate() {
            *finish = if i < split { Finish::Glossy } else { Finish::Matte };
        }
        true
    }
}

// Binary increment with the last slot least significant.
fn increment(current: &mut [Finish]) -> bool {
    for finish in current.iter_mut().rev() {
        match finish {
            Finish::Glossy => {
                *finish = Finish::Matte;
                return true;
            }
            Finish::Matte => *finish = Finish::Glossy,
        }
    }
    false
}

/// Rearranges `items` into the next lexicographically greater permutation.
///
/// Returns false, leaving `items` untouched, when it already is the last
/// one. Equal items are not distinguished, so every distinct arrangement is
/// produced once.
pub(crate) fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let Some(successor) = items.iter().rposition(|item| *item > items[pivot]) else {
        return false;
    };
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

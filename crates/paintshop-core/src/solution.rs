//! Partial and complete finish assignments.

use std::fmt;

use crate::finish::{Finish, Slot};

/// One [`Slot`] per color; starts all-unresolved.
///
/// # Examples
///
/// ```
/// use paintshop_core::{Finish, Slot, SolutionVector};
///
/// let mut solution = SolutionVector::unresolved(3);
/// solution.set(0, Finish::Matte);
/// solution.set(2, Finish::Glossy);
///
/// assert_eq!(solution.get(1), Slot::Unresolved);
/// assert_eq!(solution.unresolved_colors(), vec![1]);
/// assert_eq!(solution.matte_count(), 1);
/// assert!(solution.to_assignment().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SolutionVector {
    slots: Vec<Slot>,
}

impl SolutionVector {
    pub fn unresolved(colors: usize) -> Self {
        Self {
            slots: vec![Slot::Unresolved; colors],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn get(&self, color: usize) -> Slot {
        self.slots[color]
    }

    #[inline]
    pub fn set(&mut self, color: usize, finish: Finish) {
        self.slots[color] = finish.into();
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Colors still unresolved, ascending.
    pub fn unresolved_colors(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.is_resolved())
            .map(|(color, _)| color)
            .collect()
    }

    /// Matte slots; unresolved slots count as glossy.
    pub fn matte_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_matte()).count()
    }

    /// Converts to an [`Assignment`] if every slot is resolved.
    pub fn to_assignment(&self) -> Option<Assignment> {
        self.slots
            .iter()
            .map(|slot| slot.finish())
            .collect::<Option<Vec<_>>>()
            .map(Assignment::new)
    }
}

impl fmt::Display for SolutionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", slot)?;
        }
        Ok(())
    }
}

/// A complete finish assignment, one finish per color.
///
/// Displays in the wire format: space-separated `0`/`1` codes.
///
/// ```
/// use paintshop_core::{Assignment, Finish};
///
/// let assignment = Assignment::new(vec![Finish::Glossy, Finish::Matte]);
/// assert_eq!(assignment.to_string(), "0 1");
/// assert_eq!(assignment.matte_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    finishes: Vec<Finish>,
}

impl Assignment {
    pub fn new(finishes: Vec<Finish>) -> Self {
        Self { finishes }
    }

    #[inline]
    pub fn finish(&self, color: usize) -> Finish {
        self.finishes[color]
    }

    pub fn finishes(&self) -> &[Finish] {
        &self.finishes
    }

    pub fn len(&self) -> usize {
        self.finishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.finishes.is_empty()
    }

    /// The fitness of the assignment.
    pub fn matte_count(&self) -> usize {
        self.finishes.iter().filter(|f| f.is_matte()).count()
    }

    /// Whether a customer's order is satisfied, given its (0-based color,
    /// finish) pairs.
    pub fn satisfies(&self, pairs: &[(usize, Finish)]) -> bool {
        pairs
            .iter()
            .any(|&(color, finish)| self.finishes.get(color) == Some(&finish))
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, finish) in self.finishes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", finish)?;
        }
        Ok(())
    }
}

//! Finish, slot and preference enums.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The finish of one color's production batch.
///
/// The discriminant is the wire code: `0` for glossy, `1` for matte.
///
/// # Examples
///
/// ```
/// use paintshop_core::Finish;
///
/// assert_eq!(Finish::from_code(1), Some(Finish::Matte));
/// assert_eq!(Finish::from_code(2), None);
/// assert_eq!(Finish::Glossy.code(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Finish {
    Glossy = 0,
    Matte = 1,
}

impl Finish {
    /// Both finishes, cheapest first.
    pub const ALL: [Finish; 2] = [Finish::Glossy, Finish::Matte];

    /// Decodes a wire finish code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Finish::Glossy),
            1 => Some(Finish::Matte),
            _ => None,
        }
    }

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Index into per-finish arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn is_matte(self) -> bool {
        matches!(self, Finish::Matte)
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Finish::Glossy => Finish::Matte,
            Finish::Matte => Finish::Glossy,
        }
    }
}

impl fmt::Display for Finish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One color's entry in a [`SolutionVector`](crate::SolutionVector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Slot {
    #[default]
    Unresolved,
    Glossy,
    Matte,
}

impl Slot {
    /// Returns the resolved finish, if any.
    #[inline]
    pub const fn finish(self) -> Option<Finish> {
        match self {
            Slot::Unresolved => None,
            Slot::Glossy => Some(Finish::Glossy),
            Slot::Matte => Some(Finish::Matte),
        }
    }

    #[inline]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Slot::Unresolved)
    }

    #[inline]
    pub const fn is_matte(self) -> bool {
        matches!(self, Slot::Matte)
    }
}

impl From<Finish> for Slot {
    fn from(finish: Finish) -> Self {
        match finish {
            Finish::Glossy => Slot::Glossy,
            Finish::Matte => Slot::Matte,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.finish() {
            Some(finish) => write!(f, "{}", finish),
            None => write!(f, "?"),
        }
    }
}

/// Entry of the preference matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preference {
    Liked,
    #[default]
    Unknown,
}

impl Preference {
    #[inline]
    pub const fn is_liked(self) -> bool {
        matches!(self, Preference::Liked)
    }
}

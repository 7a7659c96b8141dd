mod interval;

use std::fmt::{Debug, Formatter};

pub use self::interval::Interval;

#[must_use]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct RangeExclusive<T: Copy> {
    pub start: T,
    pub end: T,
}

impl<T: Copy + Debug> Debug for RangeExclusive<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl<T: Copy> RangeExclusive<T> {
    pub const fn new(start: T, end: T) -> Self {
        Self { start, end }
    }
}

impl<T: Copy + Ord> RangeExclusive<T> {
    #[must_use]
    pub fn contains(self, other: T) -> bool {
        (self.start <= other) && (other < self.end)
    }

    /// Whether `other` lies entirely within `self`.
    #[must_use]
    pub fn encloses(self, other: Self) -> bool {
        (self.start <= other.start) && (other.end <= self.end)
    }

    /// Whether the ranges overlap or share an endpoint.
    #[must_use]
    pub fn touches(self, other: Self) -> bool {
        self.start.max(other.start) <= self.end.min(other.end)
    }

    /// Smallest range covering both.
    pub fn union(self, other: Self) -> Self {
        Self { start: self.start.min(other.start), end: self.end.max(other.end) }
    }
}

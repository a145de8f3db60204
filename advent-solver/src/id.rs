//! Puzzle identifiers

use std::fmt;

/// Days per Advent of Code event (1-25)
pub const DAYS_PER_YEAR: u8 = 25;

/// Identifies one puzzle by event year and day
///
/// Ordered by year, then day, so registries iterate in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
}

impl PuzzleId {
    /// Create an identifier without validation
    ///
    /// `const` so it can be used inside `inventory::submit!`.
    pub const fn new(year: u16, day: u8) -> Self {
        Self { year, day }
    }

    /// Check that the day is within the event calendar
    pub const fn is_valid(&self) -> bool {
        self.day >= 1 && self.day <= DAYS_PER_YEAR
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}", self.year, self.day)
    }
}

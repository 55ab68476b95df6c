//! Puzzle identity: which event, year and day a solver answers

use std::fmt;

/// First year any supported event published puzzles
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: u16 = 20;
/// Puzzles per year in the calendar (1-25)
pub const DAYS_PER_YEAR: u8 = 25;

/// Puzzle event a solver belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Event {
    /// adventofcode.com
    AdventOfCode,
    /// The Infi side puzzle published alongside Advent of Code
    Infi,
}

impl Event {
    /// Short lowercase name, also used as the input directory for non-AoC events
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::AdventOfCode => "aoc",
            Event::Infi => "infi",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one puzzle: event, year and day
///
/// Ordering is by event, then year, then day, which is the order the CLI runs
/// and prints results in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId {
    pub event: Event,
    pub year: u16,
    pub day: u8,
}

impl PuzzleId {
    pub const fn new(event: Event, year: u16, day: u8) -> Self {
        Self { event, year, day }
    }

    /// Shorthand for an Advent of Code puzzle
    pub const fn aoc(year: u16, day: u8) -> Self {
        Self::new(Event::AdventOfCode, year, day)
    }

    /// Shorthand for an Infi puzzle
    pub const fn infi(year: u16, day: u8) -> Self {
        Self::new(Event::Infi, year, day)
    }

    /// Whether year and day fall inside the supported calendar
    ///
    /// `const` so plugin registration can reject bad ids at compile time.
    pub const fn is_valid(&self) -> bool {
        self.year >= BASE_YEAR
            && self.year < BASE_YEAR + MAX_YEARS
            && self.day >= 1
            && self.day <= DAYS_PER_YEAR
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{:02}", self.event, self.year, self.day)
    }
}

use std::collections::BTreeMap;

use strum::Display;

/// One of the two sub-problems posed each puzzle day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

/// Outcome of a single test case, attributed to the puzzle it exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseResult {
    pub year: u32,
    pub day: u8,
    pub part: Part,
    pub passed: bool,
}

/// Resolved completion state for one puzzle day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayStatus {
    pub part_one: bool,
    pub part_two: bool,
}

impl DayStatus {
    pub fn is_complete(&self) -> bool {
        self.part_one && self.part_two
    }

    /// Stars earned on this day, one per passing part.
    pub fn stars(&self) -> u32 {
        u32::from(self.part_one) + u32::from(self.part_two)
    }
}

/// Per-day completion state across one year's valid day range.
pub type YearStatus = BTreeMap<u8, DayStatus>;

/// Per-year completion classification. Exactly one applies to every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Bucket {
    #[strum(serialize = "in progress")]
    InProgress,
    #[strum(serialize = "completed")]
    Completed,
    #[strum(serialize = "not started")]
    NotStarted,
}

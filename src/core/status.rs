use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::core::aggregate::OutcomeTable;
use crate::types::{DayStatus, Part, YearStatus};

/// Puzzles are posted on the first 25 days of December.
pub const LAST_PUZZLE_DAY: u8 = 25;

/// Last (year, day) with a published puzzle as of `today`.
///
/// Outside December the event is closed out through day 25 of the previous
/// year; between Dec 26 and Dec 31 the current year is already complete.
fn range_end(today: NaiveDate) -> (u32, u8) {
    if today.month() == 12 {
        (today.year() as u32, (today.day() as u8).min(LAST_PUZZLE_DAY))
    } else {
        (today.year() as u32 - 1, LAST_PUZZLE_DAY)
    }
}

/// Resolve the outcome table into per-day completion state for every
/// (year, day) in the valid range.
///
/// `today` is an explicit parameter so callers control the clock. Days with
/// no recorded outcome resolve to the default (nothing passing) status.
pub fn resolve(
    table: &OutcomeTable,
    today: NaiveDate,
    start_year: u32,
    start_day: u8,
) -> BTreeMap<u32, YearStatus> {
    let (end_year, end_day) = range_end(today);

    let mut years = BTreeMap::new();
    for year in start_year..=end_year {
        let first = if year == start_year { start_day } else { 1 };
        let last = if year == end_year { end_day } else { LAST_PUZZLE_DAY };

        let mut days = YearStatus::new();
        for day in first..=last {
            let status = table
                .day(year, day)
                .map(|outcomes| DayStatus {
                    part_one: outcomes.is_passing(Part::One),
                    part_two: outcomes.is_passing(Part::Two),
                })
                .unwrap_or_default();
            days.insert(day, status);
        }
        years.insert(year, days);
    }
    years
}

use std::collections::BTreeMap;

use crate::types::{Bucket, DayStatus, YearStatus};

/// Years grouped by completion classification, ascending within each group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    pub in_progress: Vec<(u32, YearStatus)>,
    pub completed: Vec<(u32, YearStatus)>,
    pub not_started: Vec<(u32, YearStatus)>,
}

impl Buckets {
    pub fn years(&self, bucket: Bucket) -> Vec<u32> {
        let group = match bucket {
            Bucket::InProgress => &self.in_progress,
            Bucket::Completed => &self.completed,
            Bucket::NotStarted => &self.not_started,
        };
        group.iter().map(|(year, _)| *year).collect()
    }
}

/// Classification for one year's day statuses.
pub fn classify(days: &YearStatus) -> Bucket {
    let all_completed = days.values().all(DayStatus::is_complete);
    let any_completed = days.values().any(|day| day.stars() > 0);

    if all_completed {
        Bucket::Completed
    } else if any_completed {
        Bucket::InProgress
    } else {
        Bucket::NotStarted
    }
}

/// Partition resolved years into the three buckets. Every year lands in
/// exactly one.
pub fn bucketize(year_stats: BTreeMap<u32, YearStatus>) -> Buckets {
    let mut buckets = Buckets::default();
    for (year, days) in year_stats {
        let group = match classify(&days) {
            Bucket::Completed => &mut buckets.completed,
            Bucket::InProgress => &mut buckets.in_progress,
            Bucket::NotStarted => &mut buckets.not_started,
        };
        group.push((year, days));
    }
    buckets
}

/// Total stars earned, one per passing part.
pub fn star_count(year_stats: &BTreeMap<u32, YearStatus>) -> u32 {
    year_stats
        .values()
        .flat_map(|days| days.values())
        .map(DayStatus::stars)
        .sum()
}

// src/domain/filter.rs

use crate::scraper::AvailabilityRecord;
use chrono::NaiveDate;

/// Caller-supplied selection criteria, immutable for the run.
#[derive(Debug, Clone)]
pub struct FilterCriteria {
    /// Eligible entry dates, inclusive on both ends.
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Minimum number of available spaces worth reporting.
    pub min_spaces: u32,
    /// Trailheads to ignore, matched exactly against the table headers.
    pub exclude: Vec<String>,
}

impl FilterCriteria {
    fn matches(&self, record: &AvailabilityRecord) -> bool {
        record.date >= self.start
            && record.date <= self.end
            && record.spaces >= self.min_spaces
            && !self.exclude.iter().any(|name| name == &record.trailhead)
    }
}

/// Keep records inside the date window, at or above the space threshold,
/// and not from an excluded trailhead. Input order is preserved, so the
/// output stays date-ascending. An empty result means no vacancy.
pub fn filter(records: &[AvailabilityRecord], criteria: &FilterCriteria) -> Vec<AvailabilityRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

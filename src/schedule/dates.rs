use super::models::{ScheduleSet, Series};
use crate::utils::time::{date_of, CalendarDate};
use chrono_tz::Tz;
use std::cmp::Reverse;
use std::collections::HashSet;
use tracing::debug;

/// Distinct calendar dates of the virtual series, most recent first.
///
/// Entries whose start timestamp does not parse contribute nothing.
pub fn collect_dates(schedule: &ScheduleSet, tz: &Tz) -> Vec<CalendarDate> {
    let mut buckets = HashSet::new();
    for (index, entry) in schedule.series(Series::Virtual).iter().enumerate() {
        match date_of(&entry.start_time, tz) {
            Some(date) => {
                buckets.insert(date);
            }
            None => debug!("Virtual entry {} has no parseable start, not indexing it", index),
        }
    }

    let mut dates: Vec<CalendarDate> = buckets.into_iter().collect();
    dates.sort_by_key(|date| Reverse(date.naive_date()));
    dates
}

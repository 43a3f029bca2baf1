use super::models::{ScheduleEntry, ScheduleSet};
use crate::utils::time::{date_of, CalendarDate};
use chrono_tz::Tz;

/// Narrow a schedule to the rows whose virtual entry starts on `date`.
///
/// Rows stay paired across both series and keep their relative order.
/// The input is left untouched; an unmatched date gives an empty set.
pub fn filter_by_date(schedule: &ScheduleSet, date: &CalendarDate, tz: &Tz) -> ScheduleSet {
    let (virtual_entries, actual_entries): (Vec<ScheduleEntry>, Vec<ScheduleEntry>) = schedule
        .pairs()
        .filter(|(virtual_entry, _)| {
            date_of(&virtual_entry.start_time, tz).as_ref() == Some(date)
        })
        .map(|(virtual_entry, actual_entry)| (virtual_entry.clone(), actual_entry.clone()))
        .unzip();

    ScheduleSet::from_parts(virtual_entries, actual_entries)
}

use super::models::{RawSchedule, ScheduleEntry, ScheduleSet, Series};
use crate::error::{Error, TimetableResult};
use crate::utils::time::date_of;
use chrono_tz::Tz;
use tracing::debug;

/// Check that a raw schedule is usable.
///
/// Both series must be present, non-empty and of equal length, and every
/// entry whose timestamps both parse must start and end on the same
/// calendar day. Entries with an unparseable timestamp are skipped.
pub fn validate(raw: &RawSchedule, tz: &Tz) -> TimetableResult<()> {
    let virtual_entries = raw
        .series(Series::Virtual)
        .ok_or(Error::MissingField(Series::Virtual))?;
    let actual_entries = raw
        .series(Series::Actual)
        .ok_or(Error::MissingField(Series::Actual))?;

    if virtual_entries.is_empty() {
        return Err(Error::EmptySeries(Series::Virtual));
    }
    if actual_entries.is_empty() {
        return Err(Error::EmptySeries(Series::Actual));
    }

    if virtual_entries.len() != actual_entries.len() {
        return Err(Error::LengthMismatch {
            virtual_len: virtual_entries.len(),
            actual_len: actual_entries.len(),
        });
    }

    check_same_day(Series::Virtual, virtual_entries, tz)?;
    check_same_day(Series::Actual, actual_entries, tz)?;

    Ok(())
}

fn check_same_day(series: Series, entries: &[ScheduleEntry], tz: &Tz) -> TimetableResult<()> {
    for (index, entry) in entries.iter().enumerate() {
        let (Some(start_date), Some(end_date)) =
            (date_of(&entry.start_time, tz), date_of(&entry.end_time, tz))
        else {
            debug!("Skipping day check for {} entry {}: unparseable timestamp", series, index);
            continue;
        };

        if start_date != end_date {
            return Err(Error::CrossDay {
                series,
                index,
                start_date: start_date.to_string(),
                end_date: end_date.to_string(),
            });
        }
    }
    Ok(())
}

impl RawSchedule {
    /// Validate and turn into a schedule set
    pub fn into_validated(self, tz: &Tz) -> TimetableResult<ScheduleSet> {
        validate(&self, tz)?;
        Ok(ScheduleSet::from_parts(
            self.virtual_entries.unwrap_or_default(),
            self.actual_entries.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Helsinki;
    use chrono_tz::UTC;

    fn entry(start: &str, end: &str) -> ScheduleEntry {
        ScheduleEntry::new("Anna", "Cashier", "Full-time", start, end)
    }

    fn day_entry() -> ScheduleEntry {
        entry("2024-01-01T08:00:00Z", "2024-01-01T16:00:00Z")
    }

    #[test]
    fn test_valid_schedule_passes() {
        let raw = RawSchedule::new(vec![day_entry(), day_entry()], vec![day_entry(), day_entry()]);
        assert!(validate(&raw, &UTC).is_ok());

        let set = raw.into_validated(&UTC).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_missing_series() {
        let raw = RawSchedule {
            virtual_entries: None,
            actual_entries: Some(vec![day_entry()]),
        };
        assert!(matches!(
            validate(&raw, &UTC),
            Err(Error::MissingField(Series::Virtual))
        ));

        let raw = RawSchedule {
            virtual_entries: Some(vec![day_entry()]),
            actual_entries: None,
        };
        assert!(matches!(
            validate(&raw, &UTC),
            Err(Error::MissingField(Series::Actual))
        ));
    }

    #[test]
    fn test_empty_series() {
        let raw = RawSchedule::new(vec![], vec![day_entry()]);
        assert!(matches!(
            validate(&raw, &UTC),
            Err(Error::EmptySeries(Series::Virtual))
        ));

        let raw = RawSchedule::new(vec![day_entry()], vec![]);
        assert!(matches!(
            validate(&raw, &UTC),
            Err(Error::EmptySeries(Series::Actual))
        ));
    }

    #[test]
    fn test_length_mismatch() {
        let raw = RawSchedule::new(
            vec![day_entry(), day_entry(), day_entry()],
            vec![day_entry(), day_entry()],
        );
        match validate(&raw, &UTC) {
            Err(Error::LengthMismatch {
                virtual_len,
                actual_len,
            }) => {
                assert_eq!(virtual_len, 3);
                assert_eq!(actual_len, 2);
            }
            other => panic!("expected length mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_cross_day_entry() {
        let raw = RawSchedule::new(
            vec![day_entry()],
            vec![entry("2024-01-01T23:50:00Z", "2024-01-02T00:10:00Z")],
        );
        match validate(&raw, &UTC) {
            Err(Error::CrossDay {
                series,
                index,
                start_date,
                end_date,
            }) => {
                assert_eq!(series, Series::Actual);
                assert_eq!(index, 0);
                assert_eq!(start_date, "01-01-2024");
                assert_eq!(end_date, "02-01-2024");
            }
            other => panic!("expected cross day error, got {:?}", other),
        }
    }

    #[test]
    fn test_cross_day_depends_on_display_timezone() {
        // 21:00-21:30 UTC is 23:00-23:30 in Helsinki, still one day
        let ok = RawSchedule::new(
            vec![entry("2024-01-01T21:00:00Z", "2024-01-01T21:30:00Z")],
            vec![day_entry()],
        );
        assert!(validate(&ok, &Helsinki).is_ok());

        // 21:30-22:30 UTC crosses midnight in Helsinki
        let crossing = RawSchedule::new(
            vec![entry("2024-01-01T21:30:00Z", "2024-01-01T22:30:00Z")],
            vec![day_entry()],
        );
        assert!(validate(&crossing, &UTC).is_ok());
        assert!(matches!(
            validate(&crossing, &Helsinki),
            Err(Error::CrossDay { series: Series::Virtual, .. })
        ));
    }

    #[test]
    fn test_unparseable_timestamps_are_skipped() {
        let raw = RawSchedule::new(
            vec![entry("", ""), entry("garbage", "2024-01-02T00:10:00Z")],
            vec![day_entry(), entry("2024-01-01T23:50:00Z", "not a date")],
        );
        assert!(validate(&raw, &UTC).is_ok());
    }

    #[test]
    fn test_errors_are_validation_errors() {
        let raw = RawSchedule::new(vec![], vec![]);
        let err = validate(&raw, &UTC).unwrap_err();
        assert!(err.is_validation());
    }
}

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use std::fmt;

/// Display format of a calendar date bucket
const CALENDAR_DATE_FORMAT: &str = "%d-%m-%Y";

/// A `DD-MM-YYYY` day bucket used for grouping and filtering entries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarDate(String);

impl CalendarDate {
    /// Parse a `DD-MM-YYYY` string, rejecting anything that is not a real date
    pub fn parse(text: &str) -> Option<Self> {
        let date = NaiveDate::parse_from_str(text.trim(), CALENDAR_DATE_FORMAT).ok()?;
        Some(Self::from_naive(date))
    }

    /// Build the bucket for a naive date
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date.format(CALENDAR_DATE_FORMAT).to_string())
    }

    /// The date this bucket stands for, in YYYY-MM-DD order for comparison
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, CALENDAR_DATE_FORMAT).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a schedule timestamp into the display timezone.
///
/// Timestamps with an offset (or `Z`) are absolute instants. Timestamps
/// without an offset are wall-clock times in `tz`, and a bare `YYYY-MM-DD`
/// is midnight UTC. Anything else yields `None`.
pub fn parse_timestamp(text: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(tz));
    }

    // Offsets without seconds, or written without a colon
    let zoned = match text.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{}+00:00", rest),
        None => text.to_string(),
    };
    for format in ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"] {
        if let Ok(dt) = DateTime::parse_from_str(&zoned, format) {
            return Some(dt.with_timezone(tz));
        }
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            // Wall times that fall into a DST gap do not exist
            return tz.from_local_datetime(&naive).earliest();
        }
    }

    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

/// Format a timestamp as its `DD-MM-YYYY` calendar date in the display timezone
pub fn format_date(dt: &DateTime<Tz>) -> CalendarDate {
    CalendarDate::from_naive(dt.date_naive())
}

/// Parse a timestamp and format its calendar date in one go
pub fn date_of(text: &str, tz: &Tz) -> Option<CalendarDate> {
    parse_timestamp(text, tz).map(|dt| format_date(&dt))
}

/// Hour of the timestamp in UTC
pub fn utc_hour(dt: &DateTime<Tz>) -> u32 {
    dt.with_timezone(&Utc).hour()
}

/// Minute of the timestamp in the display timezone
pub fn local_minute(dt: &DateTime<Tz>) -> u32 {
    dt.minute()
}

/// Zero-pad a number to two digits (01, 09, 12, 20)
pub fn pad2(number: u32) -> String {
    format!("{:02}", number)
}

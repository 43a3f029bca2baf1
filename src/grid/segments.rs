use crate::schedule::models::{DisplaySelection, ScheduleSet, Series};
use crate::utils::time::{local_minute, parse_timestamp, utc_hour};
use chrono_tz::Tz;
use std::ops::Range;

/// Number of hourly cells in a row
pub const HOURS_PER_DAY: u32 = 24;

/// How a segment occupies its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Start of work inside the hour, filled from the cell's right edge
    Leading,
    /// End of work inside the hour, filled from the cell's left edge
    Trailing,
    /// The whole hour
    Full,
}

impl Fill {
    /// CSS float of the segment inside its cell
    pub fn float(self) -> Option<&'static str> {
        match self {
            Fill::Leading => Some("right"),
            Fill::Trailing | Fill::Full => None,
        }
    }
}

/// A fill of one hourly cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub cell: u32,
    pub width_percent: f64,
    pub fill: Fill,
    pub series: Series,
}

/// Hours and minutes an interval is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalBounds {
    pub hour_start: u32,
    pub hour_end: u32,
    pub minute_start: u32,
    pub minute_end: u32,
}

impl IntervalBounds {
    /// Parse both ends, `None` if either does not parse
    pub fn parse(start_time: &str, end_time: &str, tz: &Tz) -> Option<Self> {
        let start = parse_timestamp(start_time, tz)?;
        let end = parse_timestamp(end_time, tz)?;
        Some(Self {
            hour_start: utc_hour(&start),
            hour_end: utc_hour(&end),
            minute_start: local_minute(&start),
            minute_end: local_minute(&end),
        })
    }

    /// First hour drawn as a full cell; a started hour is taken by the leading fill
    pub fn first_full_hour(&self) -> u32 {
        if self.minute_start > 0 {
            self.hour_start + 1
        } else {
            self.hour_start
        }
    }

    /// Cells drawn at 100% width
    pub fn full_hours(&self) -> Range<u32> {
        self.first_full_hour()..self.hour_end
    }

    /// Segments of this interval, trailing fill first, then leading, then full hours
    pub fn segments(&self, series: Series) -> Vec<Segment> {
        let mut segments = Vec::new();

        if self.minute_end > 0 {
            segments.push(Segment {
                cell: self.hour_end,
                width_percent: minutes_to_percent(self.minute_end),
                fill: Fill::Trailing,
                series,
            });
        }

        if self.minute_start > 0 {
            segments.push(Segment {
                cell: self.hour_start,
                width_percent: minutes_to_percent(60 - self.minute_start),
                fill: Fill::Leading,
                series,
            });
        }

        segments.extend(self.full_hours().map(|cell| Segment {
            cell,
            width_percent: 100.0,
            fill: Fill::Full,
            series,
        }));

        segments
    }
}

/// Share of an hour in percent (100% is 60 minutes)
fn minutes_to_percent(minutes: u32) -> f64 {
    f64::from(minutes) * 100.0 / 60.0
}

/// Map a `[start, end)` interval onto the hourly cells.
///
/// Never fails: if either timestamp does not parse the row simply has
/// nothing to draw.
pub fn render_interval(start_time: &str, end_time: &str, series: Series, tz: &Tz) -> Vec<Segment> {
    IntervalBounds::parse(start_time, end_time, tz)
        .map(|bounds| bounds.segments(series))
        .unwrap_or_default()
}

/// Segments of one schedule row for the series the row currently shows
pub fn render_row(
    schedule: &ScheduleSet,
    index: usize,
    selection: DisplaySelection,
    tz: &Tz,
) -> Vec<Segment> {
    schedule
        .entry(selection, index)
        .map(|entry| render_interval(&entry.start_time, &entry.end_time, selection, tz))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::models::ScheduleEntry;
    use chrono_tz::Asia::Kolkata;
    use chrono_tz::UTC;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_partial_hours_on_both_ends() {
        let segments = render_interval(
            "2024-01-01T08:15:00Z",
            "2024-01-01T19:45:00Z",
            Series::Virtual,
            &UTC,
        );

        let trailing = segments[0];
        assert_eq!(trailing.cell, 19);
        assert_eq!(trailing.fill, Fill::Trailing);
        assert!(approx(trailing.width_percent, 75.0));
        assert_eq!(trailing.fill.float(), None);

        let leading = segments[1];
        assert_eq!(leading.cell, 8);
        assert_eq!(leading.fill, Fill::Leading);
        assert!(approx(leading.width_percent, 75.0));
        assert_eq!(leading.fill.float(), Some("right"));

        let full: Vec<u32> = segments[2..].iter().map(|s| s.cell).collect();
        assert_eq!(full, (9..19).collect::<Vec<u32>>());
        assert!(segments[2..]
            .iter()
            .all(|s| s.fill == Fill::Full && approx(s.width_percent, 100.0)));
        assert!(segments.iter().all(|s| s.series == Series::Virtual));

        let bounds =
            IntervalBounds::parse("2024-01-01T08:15:00Z", "2024-01-01T19:45:00Z", &UTC).unwrap();
        assert_eq!(bounds.first_full_hour(), 9);
    }

    #[test]
    fn test_whole_hours_only() {
        let segments = render_interval(
            "2024-01-01T09:00:00Z",
            "2024-01-01T17:00:00Z",
            Series::Actual,
            &UTC,
        );
        assert_eq!(segments.len(), 8);
        assert_eq!(segments[0].cell, 9);
        assert_eq!(segments[7].cell, 16);
        assert!(segments.iter().all(|s| s.fill == Fill::Full));
        assert!(segments.iter().all(|s| s.series == Series::Actual));
    }

    #[test]
    fn test_same_exact_hour_draws_nothing() {
        let segments = render_interval(
            "2024-01-01T09:00:00Z",
            "2024-01-01T09:00:00Z",
            Series::Virtual,
            &UTC,
        );
        assert!(segments.is_empty());
    }

    #[test]
    fn test_interval_inside_one_hour() {
        let segments = render_interval(
            "2024-01-01T08:15:00Z",
            "2024-01-01T08:45:00Z",
            Series::Virtual,
            &UTC,
        );
        assert_eq!(segments.len(), 2);
        assert_eq!((segments[0].cell, segments[0].fill), (8, Fill::Trailing));
        assert_eq!((segments[1].cell, segments[1].fill), (8, Fill::Leading));
    }

    #[test]
    fn test_end_on_the_hour_has_no_trailing_fill() {
        let segments = render_interval(
            "2024-01-01T08:20:00Z",
            "2024-01-01T10:00:00Z",
            Series::Virtual,
            &UTC,
        );
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].fill, Fill::Leading);
        assert!(approx(segments[0].width_percent, 40.0 * 100.0 / 60.0));
        assert_eq!((segments[1].cell, segments[1].fill), (9, Fill::Full));
    }

    #[test]
    fn test_unparseable_timestamps_draw_nothing() {
        assert!(render_interval("", "2024-01-01T10:00:00Z", Series::Virtual, &UTC).is_empty());
        assert!(render_interval("2024-01-01T08:00:00Z", "nope", Series::Actual, &UTC).is_empty());
        assert!(IntervalBounds::parse("x", "y", &UTC).is_none());
    }

    #[test]
    fn test_hours_are_utc_minutes_are_local() {
        // Kolkata is UTC+05:30, so the local minute differs from the UTC minute
        let bounds = IntervalBounds::parse(
            "2024-01-01T08:00:00Z",
            "2024-01-01T10:00:00Z",
            &Kolkata,
        )
        .unwrap();
        assert_eq!(bounds.hour_start, 8);
        assert_eq!(bounds.hour_end, 10);
        assert_eq!(bounds.minute_start, 30);
        assert_eq!(bounds.minute_end, 30);
    }

    #[test]
    fn test_render_row_follows_selection() {
        let schedule = ScheduleSet::from_parts(
            vec![ScheduleEntry::new(
                "Anna",
                "Cashier",
                "Full-time",
                "2024-01-01T08:00:00Z",
                "2024-01-01T10:00:00Z",
            )],
            vec![ScheduleEntry::new(
                "Anna",
                "Cashier",
                "Full-time",
                "2024-01-01T08:30:00Z",
                "2024-01-01T10:00:00Z",
            )],
        );

        let planned = render_row(&schedule, 0, Series::Virtual, &UTC);
        assert_eq!(planned.len(), 2);
        assert!(planned.iter().all(|s| s.fill == Fill::Full));

        let actual = render_row(&schedule, 0, Series::Actual, &UTC);
        assert_eq!(actual[0].fill, Fill::Leading);
        assert!(approx(actual[0].width_percent, 50.0));
        assert!(actual.iter().all(|s| s.series == Series::Actual));

        assert!(render_row(&schedule, 5, Series::Virtual, &UTC).is_empty());
    }
}

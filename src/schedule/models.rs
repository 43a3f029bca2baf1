use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire form of an entry: `[name, title, role, start, end]`
type EntryTuple = (String, String, String, String, String);

/// One employee slot in a schedule series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EntryTuple", into = "EntryTuple")]
pub struct ScheduleEntry {
    pub name: String,
    pub title: String,
    pub role: String,
    /// Start of work as an ISO date-time string
    pub start_time: String,
    /// End of work as an ISO date-time string
    pub end_time: String,
}

impl ScheduleEntry {
    /// Create a new schedule entry
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        role: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            role: role.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Row caption in the form `title / role`
    pub fn caption(&self) -> String {
        format!("{} / {}", self.title, self.role)
    }
}

impl From<EntryTuple> for ScheduleEntry {
    fn from((name, title, role, start_time, end_time): EntryTuple) -> Self {
        Self {
            name,
            title,
            role,
            start_time,
            end_time,
        }
    }
}

impl From<ScheduleEntry> for EntryTuple {
    fn from(entry: ScheduleEntry) -> Self {
        (
            entry.name,
            entry.title,
            entry.role,
            entry.start_time,
            entry.end_time,
        )
    }
}

/// Which of the two parallel time series a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Series {
    /// Planned working hours
    #[default]
    Virtual,
    /// Recorded working hours
    Actual,
}

impl Series {
    /// The other series
    pub fn toggled(self) -> Self {
        match self {
            Series::Virtual => Series::Actual,
            Series::Actual => Series::Virtual,
        }
    }

    /// Style class of segments drawn for this series
    pub fn css_class(self) -> &'static str {
        match self {
            Series::Virtual => "virtual-hours",
            Series::Actual => "actual-hours",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Series::Virtual => "virtual",
            Series::Actual => "actual",
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-row choice of the series currently shown, owned by the view
pub type DisplaySelection = Series;

/// Schedule as delivered by a source, before any checks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSchedule {
    #[serde(rename = "virtual", default, skip_serializing_if = "Option::is_none")]
    pub virtual_entries: Option<Vec<ScheduleEntry>>,
    #[serde(rename = "actual", default, skip_serializing_if = "Option::is_none")]
    pub actual_entries: Option<Vec<ScheduleEntry>>,
}

impl RawSchedule {
    /// Create a raw schedule with both series present
    pub fn new(virtual_entries: Vec<ScheduleEntry>, actual_entries: Vec<ScheduleEntry>) -> Self {
        Self {
            virtual_entries: Some(virtual_entries),
            actual_entries: Some(actual_entries),
        }
    }

    /// Entries of one series, if the series is present
    pub fn series(&self, series: Series) -> Option<&[ScheduleEntry]> {
        match series {
            Series::Virtual => self.virtual_entries.as_deref(),
            Series::Actual => self.actual_entries.as_deref(),
        }
    }
}

/// Two parallel series where entry `i` of each describes the same slot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ScheduleSet {
    #[serde(rename = "virtual")]
    virtual_entries: Vec<ScheduleEntry>,
    #[serde(rename = "actual")]
    actual_entries: Vec<ScheduleEntry>,
}

impl ScheduleSet {
    /// Build from series already known to be the same length
    pub(crate) fn from_parts(
        virtual_entries: Vec<ScheduleEntry>,
        actual_entries: Vec<ScheduleEntry>,
    ) -> Self {
        debug_assert_eq!(virtual_entries.len(), actual_entries.len());
        Self {
            virtual_entries,
            actual_entries,
        }
    }

    /// Number of rows (pairs)
    pub fn len(&self) -> usize {
        self.virtual_entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.virtual_entries.is_empty()
    }

    /// All entries of one series
    pub fn series(&self, series: Series) -> &[ScheduleEntry] {
        match series {
            Series::Virtual => &self.virtual_entries,
            Series::Actual => &self.actual_entries,
        }
    }

    /// Entry of one series at a row index
    pub fn entry(&self, series: Series, index: usize) -> Option<&ScheduleEntry> {
        self.series(series).get(index)
    }

    /// Iterate over `(virtual, actual)` pairs in row order
    pub fn pairs(&self) -> impl Iterator<Item = (&ScheduleEntry, &ScheduleEntry)> {
        self.virtual_entries.iter().zip(self.actual_entries.iter())
    }
}

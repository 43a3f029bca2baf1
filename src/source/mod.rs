mod file;
mod http;

pub use file::FileSource;
pub use http::HttpSource;

use crate::error::TimetableResult;
use crate::schedule::models::RawSchedule;
use async_trait::async_trait;
use tracing::info;
use url::Url;

/// Where the schedule data comes from
#[async_trait]
pub trait ScheduleSource: Send + Sync + 'static {
    /// Load the raw schedule; no checks beyond JSON shape happen here
    async fn load(&self) -> TimetableResult<RawSchedule>;

    /// Human-readable location for logs
    fn describe(&self) -> String;
}

/// Source holding an already loaded schedule (for testing)
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    schedule: RawSchedule,
}

impl InMemorySource {
    pub fn new(schedule: RawSchedule) -> Self {
        Self { schedule }
    }
}

#[async_trait]
impl ScheduleSource for InMemorySource {
    async fn load(&self) -> TimetableResult<RawSchedule> {
        Ok(self.schedule.clone())
    }

    fn describe(&self) -> String {
        "in-memory schedule".to_string()
    }
}

/// Pick a source for a location: http(s) URLs are fetched, anything else is a file path
pub fn from_location(location: &str) -> Box<dyn ScheduleSource> {
    match Url::parse(location) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
            info!("Using HTTP schedule source {}", url);
            Box::new(HttpSource::new(url))
        }
        _ => {
            info!("Using file schedule source {}", location);
            Box::new(FileSource::new(location))
        }
    }
}

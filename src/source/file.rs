use super::ScheduleSource;
use crate::error::TimetableResult;
use crate::schedule::models::RawSchedule;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Schedule read from a JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ScheduleSource for FileSource {
    async fn load(&self) -> TimetableResult<RawSchedule> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        debug!("Read {} bytes from {}", content.len(), self.path.display());
        Ok(serde_json::from_str(&content)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

use super::ScheduleSource;
use crate::error::{source_error, TimetableResult};
use crate::schedule::models::RawSchedule;
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Schedule fetched as JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: Url,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ScheduleSource for HttpSource {
    async fn load(&self) -> TimetableResult<RawSchedule> {
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(source_error(&format!(
                "Fetching {} returned HTTP {}",
                self.url, status
            )));
        }

        debug!("Fetched schedule from {}", self.url);
        Ok(response.json::<RawSchedule>().await?)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

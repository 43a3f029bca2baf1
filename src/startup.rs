use crate::config::Config;
use crate::error::{Error, TimetableResult};
use crate::schedule::models::ScheduleSet;
use crate::source::ScheduleSource;
use chrono_tz::Tz;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Config(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Load a schedule from its source and run the load-time checks
pub async fn load_schedule(source: &dyn ScheduleSource, tz: &Tz) -> TimetableResult<ScheduleSet> {
    info!("Loading schedule from {}", source.describe());
    let raw = source.load().await?;

    match raw.into_validated(tz) {
        Ok(schedule) => {
            info!("Schedule is valid with {} rows", schedule.len());
            Ok(schedule)
        }
        Err(e) => {
            error!("Schedule from {} is invalid: {}", source.describe(), e);
            Err(e)
        }
    }
}

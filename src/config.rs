use crate::error::{config_error, env_error, TimetableResult};
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Default location of the schedule data
pub const DEFAULT_SOURCE: &str = "./employee.json";

/// Optional overlay file read after the environment
pub const CONFIG_FILE: &str = "config/timetable.toml";

/// Main configuration structure for the timetable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// File path or http(s) URL of the schedule JSON
    pub source: String,
    /// Timezone dates and minutes are displayed in
    pub timezone: String,
    /// Locale of the page strings
    pub locale: String,
    /// Directory the pages are written to
    pub output_dir: PathBuf,
    /// Open the index page in a browser after rendering
    pub open_browser: bool,
}

/// Values accepted in the overlay file, all optional
#[derive(Debug, Default, Deserialize)]
struct FileOverlay {
    source: Option<String>,
    timezone: Option<String>,
    locale: Option<String>,
    output_dir: Option<PathBuf>,
    open_browser: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            timezone: String::from("UTC"),
            locale: String::from("en"),
            output_dir: PathBuf::from("./timetable"),
            open_browser: false,
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> TimetableResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(source) = env::var("SCHEDULE_SOURCE") {
            config.source = source;
        }
        if let Ok(timezone) = env::var("TIMEZONE") {
            config.timezone = timezone;
        }
        if let Ok(locale) = env::var("TIMETABLE_LOCALE") {
            config.locale = locale;
        }
        if let Ok(output_dir) = env::var("OUTPUT_DIR") {
            config.output_dir = PathBuf::from(output_dir);
        }
        if let Ok(open_browser) = env::var("OPEN_BROWSER") {
            config.open_browser =
                parse_bool(&open_browser).ok_or_else(|| env_error("OPEN_BROWSER"))?;
        }

        // Overlay from file if it exists
        if let Ok(content) = fs::read_to_string(CONFIG_FILE) {
            config.apply_overlay(&content)?;
        }

        config.tz()?;
        Ok(config)
    }

    /// Apply values from a TOML overlay on top of the current ones
    pub fn apply_overlay(&mut self, content: &str) -> TimetableResult<()> {
        let overlay: FileOverlay = toml::from_str(content)?;

        if let Some(source) = overlay.source {
            self.source = source;
        }
        if let Some(timezone) = overlay.timezone {
            self.timezone = timezone;
        }
        if let Some(locale) = overlay.locale {
            self.locale = locale;
        }
        if let Some(output_dir) = overlay.output_dir {
            self.output_dir = output_dir;
        }
        if let Some(open_browser) = overlay.open_browser {
            self.open_browser = open_browser;
        }

        Ok(())
    }

    /// Parsed display timezone
    pub fn tz(&self) -> TimetableResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| config_error(&format!("Unknown timezone: {}", self.timezone)))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.source, DEFAULT_SOURCE);
        assert_eq!(config.tz().unwrap(), chrono_tz::UTC);
        assert!(!config.open_browser);
    }

    #[test]
    fn test_overlay_replaces_given_values() {
        let mut config = Config::default();
        config
            .apply_overlay(
                r#"
                timezone = "Europe/Helsinki"
                open_browser = true
                "#,
            )
            .unwrap();
        assert_eq!(config.tz().unwrap(), chrono_tz::Europe::Helsinki);
        assert!(config.open_browser);
        assert_eq!(config.locale, "en");
    }

    #[test]
    fn test_bad_overlay_and_timezone() {
        let mut config = Config::default();
        assert!(config.apply_overlay("timezone = [").is_err());

        config.timezone = "Mars/Olympus".to_string();
        assert!(config.tz().is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}

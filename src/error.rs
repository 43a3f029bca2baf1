use crate::schedule::models::Series;
use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("There is no {0} schedule, please use valid data")]
    #[diagnostic(code(timetable::missing_field))]
    MissingField(Series),

    #[error("The {0} schedule is empty")]
    #[diagnostic(code(timetable::empty_series))]
    EmptySeries(Series),

    #[error("Virtual and actual schedule mismatch: {virtual_len} virtual entries, {actual_len} actual entries")]
    #[diagnostic(code(timetable::length_mismatch))]
    LengthMismatch { virtual_len: usize, actual_len: usize },

    #[error("Entry {index} of the {series} schedule starts on {start_date} but ends on {end_date}")]
    #[diagnostic(
        code(timetable::cross_day),
        help("the day of start working and end working must be equal")
    )]
    CrossDay {
        series: Series,
        index: usize,
        start_date: String,
        end_date: String,
    },

    #[error("Environment error: {0}")]
    #[diagnostic(code(timetable::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(timetable::config))]
    Config(String),

    #[error("Schedule source error: {0}")]
    #[diagnostic(code(timetable::source))]
    Source(String),

    #[error("Render error: {0}")]
    #[diagnostic(code(timetable::render))]
    Render(String),

    #[error(transparent)]
    #[diagnostic(code(timetable::io))]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    #[diagnostic(code(timetable::http))]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(timetable::serialization))]
    Serialization(String),
}

impl Error {
    /// Whether this error comes from the load-time schedule checks
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingField(_)
                | Error::EmptySeries(_)
                | Error::LengthMismatch { .. }
                | Error::CrossDay { .. }
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<askama::Error> for Error {
    fn from(err: askama::Error) -> Self {
        Error::Render(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type TimetableResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Invalid value in environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create schedule source errors
pub fn source_error(message: &str) -> Error {
    Error::Source(message.to_string())
}

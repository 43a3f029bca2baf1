pub mod dates;
pub mod filter;
pub mod models;
pub mod validate;

pub use dates::collect_dates;
pub use filter::filter_by_date;
pub use models::{DisplaySelection, RawSchedule, ScheduleEntry, ScheduleSet, Series};
pub use validate::validate;

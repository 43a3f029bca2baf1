pub mod html;
pub mod segments;
pub mod site;
pub mod surface;
pub mod view;

pub use segments::{render_interval, render_row, Fill, IntervalBounds, Segment, HOURS_PER_DAY};
pub use surface::{GridModel, PresentationSurface, RowNode};
pub use view::TimetableView;

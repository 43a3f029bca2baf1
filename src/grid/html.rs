use super::segments::{render_row, Segment, HOURS_PER_DAY};
use super::surface::{GridModel, RowNode};
use crate::error::TimetableResult;
use crate::schedule::models::{ScheduleSet, Series};
use crate::utils::time::{pad2, CalendarDate};
use askama::Template;
use chrono_tz::Tz;
use rust_i18n::t;

/// File name of the full-schedule page
pub const INDEX_PAGE: &str = "index.html";

/// File name of the page for one date
pub fn date_page(date: &CalendarDate) -> String {
    format!("{}.html", date)
}

#[derive(Template)]
#[template(path = "timetable.html")]
struct TimetablePage {
    lang: String,
    title: String,
    employee_header: String,
    full_schedule: String,
    full_schedule_active: bool,
    legend_virtual: String,
    legend_actual: String,
    toggle_hint: String,
    no_rows: String,
    virtual_class: &'static str,
    actual_class: &'static str,
    hours: Vec<String>,
    dates: Vec<DateLink>,
    rows: Vec<RowView>,
}

struct DateLink {
    label: String,
    href: String,
    active: bool,
}

/// A row carries both series; a per-row checkbox picks which one is visible
struct RowView {
    index: usize,
    name: String,
    caption: String,
    shows_actual: bool,
    virtual_cells: Vec<Vec<SegmentView>>,
    actual_cells: Vec<Vec<SegmentView>>,
}

struct SegmentView {
    class: &'static str,
    style: String,
}

impl From<&Segment> for SegmentView {
    fn from(segment: &Segment) -> Self {
        let mut style = format!("width: {}%;", segment.width_percent);
        if let Some(float) = segment.fill.float() {
            style.push_str(&format!(" float: {};", float));
        }
        Self {
            class: segment.series.css_class(),
            style,
        }
    }
}

impl RowView {
    /// The drawn cells come from the surface, the hidden series is rendered here
    fn new(index: usize, row: &RowNode, shown: &ScheduleSet, tz: &Tz) -> Self {
        let drawn = cell_views(&row.cells);
        let hidden = cell_views(&into_cells(render_row(
            shown,
            index,
            row.selection.toggled(),
            tz,
        )));
        let (virtual_cells, actual_cells) = match row.selection {
            Series::Virtual => (drawn, hidden),
            Series::Actual => (hidden, drawn),
        };

        Self {
            index,
            name: row.name.clone(),
            caption: row.caption.clone(),
            shows_actual: row.selection == Series::Actual,
            virtual_cells,
            actual_cells,
        }
    }
}

fn into_cells(segments: Vec<Segment>) -> Vec<Vec<Segment>> {
    let mut cells = vec![Vec::new(); HOURS_PER_DAY as usize];
    for segment in segments {
        if let Some(cell) = cells.get_mut(segment.cell as usize) {
            cell.push(segment);
        }
    }
    cells
}

fn cell_views(cells: &[Vec<Segment>]) -> Vec<Vec<SegmentView>> {
    cells
        .iter()
        .map(|segments| segments.iter().map(SegmentView::from).collect())
        .collect()
}

/// Render a drawn grid as a complete HTML page.
///
/// `shown` is the schedule the model's rows were drawn from. Each row gets
/// the segments of both series so the page can switch rows between planned
/// and actual hours on its own. The date list links to the pages written by
/// the site export, so the page works without a server.
pub fn render_page(model: &GridModel, shown: &ScheduleSet, tz: &Tz) -> TimetableResult<String> {
    let page = TimetablePage {
        lang: (*rust_i18n::locale()).to_string(),
        title: t!("page_title").to_string(),
        employee_header: t!("employee_header").to_string(),
        full_schedule: t!("full_schedule").to_string(),
        full_schedule_active: model.active_date.is_none(),
        legend_virtual: t!("legend_virtual").to_string(),
        legend_actual: t!("legend_actual").to_string(),
        toggle_hint: t!("toggle_hint").to_string(),
        no_rows: t!("no_rows").to_string(),
        virtual_class: Series::Virtual.css_class(),
        actual_class: Series::Actual.css_class(),
        hours: (0..HOURS_PER_DAY).map(|h| format!("{}:00", pad2(h))).collect(),
        dates: model
            .dates
            .iter()
            .map(|date| DateLink {
                label: date.to_string(),
                href: date_page(date),
                active: model.active_date.as_ref() == Some(date),
            })
            .collect(),
        rows: model
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| RowView::new(index, row, shown, tz))
            .collect(),
    };

    Ok(page.render()?)
}

use super::segments::{Segment, HOURS_PER_DAY};
use crate::schedule::models::DisplaySelection;
use crate::utils::time::CalendarDate;

/// Rendering target the timetable view draws onto.
///
/// The view only issues draw calls; it never reads state back from the
/// surface. Row indices refer to the rows added since the last
/// [`clear_rows`](PresentationSurface::clear_rows).
pub trait PresentationSurface {
    /// Replace the list of selectable dates
    fn set_dates(&mut self, dates: &[CalendarDate]);

    /// Mark which date the rows are filtered by, `None` for the full schedule
    fn set_active_date(&mut self, date: Option<&CalendarDate>);

    /// Remove every employee row
    fn clear_rows(&mut self);

    /// Append an employee row
    fn add_row(&mut self, index: usize, name: &str, caption: &str);

    /// Empty all hour cells of a row and record the series it now shows
    fn reset_row(&mut self, index: usize, selection: DisplaySelection);

    /// Draw one segment into its hour cell
    fn draw_segment(&mut self, index: usize, segment: &Segment);
}

/// One employee row as drawn
#[derive(Debug, Clone, PartialEq)]
pub struct RowNode {
    pub name: String,
    pub caption: String,
    pub selection: DisplaySelection,
    /// Segments per hour cell, always `HOURS_PER_DAY` long
    pub cells: Vec<Vec<Segment>>,
}

impl RowNode {
    fn new(name: &str, caption: &str) -> Self {
        Self {
            name: name.to_string(),
            caption: caption.to_string(),
            selection: DisplaySelection::default(),
            cells: vec![Vec::new(); HOURS_PER_DAY as usize],
        }
    }

    /// Hour cells that hold at least one segment
    pub fn filled_cells(&self) -> Vec<u32> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, segments)| !segments.is_empty())
            .map(|(hour, _)| hour as u32)
            .collect()
    }
}

/// Retained in-memory surface, the model the HTML page is rendered from
#[derive(Debug, Clone, Default)]
pub struct GridModel {
    pub dates: Vec<CalendarDate>,
    pub active_date: Option<CalendarDate>,
    pub rows: Vec<RowNode>,
}

impl GridModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(&self, index: usize) -> Option<&RowNode> {
        self.rows.get(index)
    }
}

impl PresentationSurface for GridModel {
    fn set_dates(&mut self, dates: &[CalendarDate]) {
        self.dates = dates.to_vec();
    }

    fn set_active_date(&mut self, date: Option<&CalendarDate>) {
        self.active_date = date.cloned();
    }

    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn add_row(&mut self, index: usize, name: &str, caption: &str) {
        debug_assert_eq!(index, self.rows.len());
        self.rows.push(RowNode::new(name, caption));
    }

    fn reset_row(&mut self, index: usize, selection: DisplaySelection) {
        if let Some(row) = self.rows.get_mut(index) {
            row.selection = selection;
            row.cells.iter_mut().for_each(Vec::clear);
        }
    }

    fn draw_segment(&mut self, index: usize, segment: &Segment) {
        let cell = self
            .rows
            .get_mut(index)
            .and_then(|row| row.cells.get_mut(segment.cell as usize));
        if let Some(cell) = cell {
            cell.push(*segment);
        }
    }
}

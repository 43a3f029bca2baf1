use super::segments::render_row;
use super::surface::PresentationSurface;
use crate::schedule::models::{DisplaySelection, ScheduleSet, Series};
use crate::schedule::{collect_dates, filter_by_date};
use crate::utils::time::CalendarDate;
use chrono_tz::Tz;
use tracing::{debug, info};

/// Interactive timetable state bound to a presentation surface.
///
/// Owns the full schedule, the currently shown (possibly filtered) rows and
/// the per-row [`DisplaySelection`]. Every action redraws what it changed.
#[derive(Debug)]
pub struct TimetableView<S: PresentationSurface> {
    schedule: ScheduleSet,
    shown: ScheduleSet,
    dates: Vec<CalendarDate>,
    active_date: Option<CalendarDate>,
    selections: Vec<DisplaySelection>,
    tz: Tz,
    surface: S,
}

impl<S: PresentationSurface> TimetableView<S> {
    /// Index the dates and draw the full schedule
    pub fn new(schedule: ScheduleSet, tz: Tz, mut surface: S) -> Self {
        let dates = collect_dates(&schedule, &tz);
        surface.set_dates(&dates);
        info!(
            "Timetable has {} rows over {} dates",
            schedule.len(),
            dates.len()
        );

        let mut view = Self {
            shown: schedule.clone(),
            schedule,
            dates,
            active_date: None,
            selections: Vec::new(),
            tz,
            surface,
        };
        view.draw_schedule();
        view
    }

    /// Show only the rows starting on `date`; an unknown date shows no rows
    pub fn select_date(&mut self, date: &CalendarDate) {
        self.shown = filter_by_date(&self.schedule, date, &self.tz);
        self.active_date = Some(date.clone());
        debug!("Date {} selected, {} rows match", date, self.shown.len());
        self.draw_schedule();
    }

    /// Clear the date filter
    pub fn show_full_schedule(&mut self) {
        self.shown = self.schedule.clone();
        self.active_date = None;
        self.draw_schedule();
    }

    /// Flip one row between planned and actual hours, returning its new selection
    pub fn toggle_row(&mut self, index: usize) -> Option<DisplaySelection> {
        let selection = self.selections.get_mut(index)?;
        *selection = selection.toggled();
        let selection = *selection;
        self.draw_row(index);
        Some(selection)
    }

    /// Series a row currently shows
    pub fn selection(&self, index: usize) -> Option<DisplaySelection> {
        self.selections.get(index).copied()
    }

    /// Rows currently shown
    pub fn shown(&self) -> &ScheduleSet {
        &self.shown
    }

    /// Selectable dates, most recent first
    pub fn dates(&self) -> &[CalendarDate] {
        &self.dates
    }

    pub fn active_date(&self) -> Option<&CalendarDate> {
        self.active_date.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn draw_schedule(&mut self) {
        self.surface.set_active_date(self.active_date.as_ref());
        self.surface.clear_rows();
        self.selections = vec![DisplaySelection::default(); self.shown.len()];

        for index in 0..self.shown.len() {
            if let Some(entry) = self.shown.entry(Series::Virtual, index) {
                self.surface.add_row(index, &entry.name, &entry.caption());
            }
            self.draw_row(index);
        }
    }

    fn draw_row(&mut self, index: usize) {
        let Some(selection) = self.selection(index) else {
            return;
        };
        self.surface.reset_row(index, selection);
        for segment in render_row(&self.shown, index, selection, &self.tz) {
            self.surface.draw_segment(index, &segment);
        }
    }
}

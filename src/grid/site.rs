use super::html::{date_page, render_page, INDEX_PAGE};
use super::surface::GridModel;
use super::view::TimetableView;
use crate::error::TimetableResult;
use crate::schedule::models::{ScheduleSet, Series};
use chrono_tz::Tz;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write the full-schedule page and one page per date into `out_dir`.
///
/// Rows of employees named in `actual_names` start out showing actual
/// hours on every page; every row can still be switched in the browser.
/// Returns the written paths, index page first.
pub async fn export_site(
    schedule: ScheduleSet,
    tz: Tz,
    actual_names: &HashSet<String>,
    out_dir: &Path,
) -> TimetableResult<Vec<PathBuf>> {
    tokio::fs::create_dir_all(out_dir).await?;

    let mut view = TimetableView::new(schedule, tz, GridModel::new());
    let mut written = Vec::new();

    apply_actual_rows(&mut view, actual_names);
    written.push(write_page(&view, &tz, out_dir, INDEX_PAGE).await?);

    for date in view.dates().to_vec() {
        view.select_date(&date);
        apply_actual_rows(&mut view, actual_names);
        written.push(write_page(&view, &tz, out_dir, &date_page(&date)).await?);
    }

    info!("Wrote {} pages to {}", written.len(), out_dir.display());
    Ok(written)
}

fn apply_actual_rows(view: &mut TimetableView<GridModel>, actual_names: &HashSet<String>) {
    let rows: Vec<usize> = view
        .shown()
        .series(Series::Virtual)
        .iter()
        .enumerate()
        .filter(|(_, entry)| actual_names.contains(&entry.name))
        .map(|(index, _)| index)
        .collect();

    for index in rows {
        view.toggle_row(index);
    }
}

async fn write_page(
    view: &TimetableView<GridModel>,
    tz: &Tz,
    out_dir: &Path,
    file_name: &str,
) -> TimetableResult<PathBuf> {
    let html = render_page(view.surface(), view.shown(), tz)?;
    let path = out_dir.join(file_name);
    tokio::fs::write(&path, html).await?;
    Ok(path)
}

use chrono::NaiveDate;
use chrono_tz::Tz;
use tracing::{info, warn};

use crate::error::CoreError;
use crate::models::Task;
use crate::time::{day_bounds, format_local};

/// Somewhere to put copied text.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), CoreError>;
}

/// One day's schedule, formatted for pasting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayExport {
    pub date: NaiveDate,
    pub text: String,
    /// Number of task lines in `text`.
    pub count: usize,
}

pub fn header_line(date: NaiveDate) -> String {
    format!("Events for {}:", date.format("%Y-%m-%d"))
}

/// Tasks overlapping the local day `date`, sorted by start.
///
/// Overlap is strict on both sides: a task ending exactly at the first
/// millisecond of the day, or starting exactly at the last, is left out.
pub fn tasks_on_day<'a>(tasks: &'a [Task], date: NaiveDate, tz: Tz) -> Vec<&'a Task> {
    let (day_start, day_end) = day_bounds(date, tz);
    let mut matching: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.start < day_end && task.end > day_start)
        .collect();
    // stable: equal starts keep source order
    matching.sort_by_key(|task| task.start);
    matching
}

/// Formats the schedule for `selected`.
///
/// Fails with [`CoreError::Selection`] when no date is given and
/// [`CoreError::EmptyResult`] when nothing overlaps the day.
pub fn export_day(tasks: &[Task], selected: Option<NaiveDate>, tz: Tz) -> Result<DayExport, CoreError> {
    let date = selected.ok_or(CoreError::Selection)?;
    let matching = tasks_on_day(tasks, date, tz);
    if matching.is_empty() {
        return Err(CoreError::EmptyResult(date));
    }

    let mut lines = Vec::with_capacity(matching.len() + 1);
    lines.push(header_line(date));
    lines.extend(
        matching
            .iter()
            .map(|task| format!("{}~ {}", format_local(task.start, tz, "%H:%M"), task.name)),
    );

    Ok(DayExport {
        date,
        text: lines.join("\n"),
        count: matching.len(),
    })
}

/// Exports `selected` and writes the text to `clipboard`.
///
/// The clipboard is only touched when there is something to copy.
pub fn copy_day(
    tasks: &[Task],
    selected: Option<NaiveDate>,
    tz: Tz,
    clipboard: &mut dyn Clipboard,
) -> Result<DayExport, CoreError> {
    let export = export_day(tasks, selected, tz)?;
    if let Err(err) = clipboard.set_text(&export.text) {
        warn!(date = %export.date, error = %err, "clipboard write failed");
        return Err(match err {
            CoreError::Clipboard(_) => err,
            other => CoreError::Clipboard(other.to_string()),
        });
    }
    info!(date = %export.date, count = export.count, "copied day schedule");
    Ok(export)
}

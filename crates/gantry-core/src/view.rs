use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::CoreError;
use crate::loader::Schedule;
use crate::models::{DecoratedTask, Task};
use crate::progress::decorate;
use crate::time::add_days;

/// Days ahead of `now` a task may start and still be shown.
pub const DEFAULT_WINDOW_DAYS: i64 = 14;

/// Largest window accepted from users, about ten years.
pub const MAX_WINDOW_DAYS: i64 = 3650;

/// Checks a user-supplied window size.
pub fn validate_window(days: i64) -> Result<i64, CoreError> {
    if (0..=MAX_WINDOW_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(CoreError::InvalidWindow(days))
    }
}

/// Latest start time a task may have and still be shown.
///
/// Saturates at the ends of the representable range.
pub fn window_horizon(now: DateTime<Utc>, window_days: i64, tz: Tz) -> DateTime<Utc> {
    match add_days(now, window_days, tz) {
        Some(horizon) => horizon,
        None if window_days < 0 => DateTime::<Utc>::MIN_UTC,
        None => DateTime::<Utc>::MAX_UTC,
    }
}

/// User-controlled view filters. All conditions must hold for a task to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFilter {
    /// Include tasks that already ended.
    pub show_completed: bool,
    /// Case-insensitive substring of the task name. Empty matches all.
    pub name_filter: String,
    pub window_days: i64,
}

impl Default for ViewFilter {
    fn default() -> Self {
        Self {
            show_completed: false,
            name_filter: String::new(),
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl ViewFilter {
    pub fn matches(&self, task: &Task, now: DateTime<Utc>, tz: Tz) -> bool {
        let horizon = window_horizon(now, self.window_days, tz);
        self.matches_before(task, now, horizon)
    }

    fn matches_before(&self, task: &Task, now: DateTime<Utc>, horizon: DateTime<Utc>) -> bool {
        let name_matches = task
            .name
            .to_lowercase()
            .contains(&self.name_filter.to_lowercase());

        (self.show_completed || task.end >= now) && task.start <= horizon && name_matches
    }
}

/// Chart time scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Day,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    pub view_mode: ViewMode,
    /// chrono format string for date labels.
    pub date_format: String,
    pub editable: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Day,
            date_format: "%Y-%m-%d".to_string(),
            editable: false,
        }
    }
}

/// Draws a chart from decorated tasks. Output is whatever the implementation targets.
pub trait ChartRenderer {
    fn render(&mut self, tasks: &[DecoratedTask], options: &ChartOptions) -> Result<(), CoreError>;
}

/// Tasks passing `filter`, in source order, decorated against `now`.
pub fn filter_tasks(
    tasks: &[Task],
    now: DateTime<Utc>,
    filter: &ViewFilter,
    tz: Tz,
) -> Vec<DecoratedTask> {
    let horizon = window_horizon(now, filter.window_days, tz);
    tasks
        .iter()
        .filter(|task| filter.matches_before(task, now, horizon))
        .map(|task| decorate(task, now))
        .collect()
}

/// Filter, decorate and hand the schedule to `renderer`.
///
/// Returns the number of tasks rendered.
pub fn render(
    schedule: &Schedule,
    now: DateTime<Utc>,
    filter: &ViewFilter,
    tz: Tz,
    renderer: &mut dyn ChartRenderer,
) -> Result<usize, CoreError> {
    let visible = filter_tasks(schedule.tasks(), now, filter, tz);
    debug!(
        visible = visible.len(),
        total = schedule.len(),
        show_completed = filter.show_completed,
        name_filter = %filter.name_filter,
        "rendering chart"
    );
    renderer.render(&visible, &ChartOptions::default())?;
    Ok(visible.len())
}

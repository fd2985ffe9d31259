use std::io::Write;

use chrono::{DateTime, Days, NaiveDate, Utc};
use chrono_humanize::HumanTime;
use chrono_tz::Tz;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use gantry_core::error::CoreError;
use gantry_core::models::{DecoratedTask, ProgressClass};
use gantry_core::time::{day_bounds, format_local, local_date};
use gantry_core::view::{ChartOptions, ChartRenderer, ViewMode};

const BAR_WIDTH: usize = 10;
/// Wider windows fold several days into each timeline column.
const MAX_TIMELINE_COLUMNS: u64 = 60;

/// One timeline column: a run of whole local days.
struct Column {
    first: NaiveDate,
    last: NaiveDate,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// Draws decorated tasks as a table with a day-based timeline column.
pub struct GanttTable<W: Write> {
    out: W,
    tz: Tz,
    now: DateTime<Utc>,
    window_days: i64,
}

impl GanttTable<std::io::Stdout> {
    pub fn stdout(tz: Tz, now: DateTime<Utc>, window_days: i64) -> Self {
        Self::new(std::io::stdout(), tz, now, window_days)
    }
}

impl<W: Write> GanttTable<W> {
    pub fn new(out: W, tz: Tz, now: DateTime<Utc>, window_days: i64) -> Self {
        Self {
            out,
            tz,
            now,
            window_days,
        }
    }

    /// Moves the reference time used for the timeline and relative labels.
    pub fn set_now(&mut self, now: DateTime<Utc>) {
        self.now = now;
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Days shown by the timeline and how many of them share a column.
    fn days_per_column(&self) -> (u64, u64) {
        let total = self.window_days.max(0).unsigned_abs().saturating_add(1);
        (total, total.div_ceil(MAX_TIMELINE_COLUMNS))
    }

    fn columns(&self) -> Vec<Column> {
        let first_day = local_date(self.now, self.tz);
        let (total, per_column) = self.days_per_column();
        let mut columns = Vec::new();
        let mut offset = 0;
        while offset < total {
            let span = per_column.min(total - offset);
            let Some(first) = first_day.checked_add_days(Days::new(offset)) else {
                break;
            };
            let last = first.checked_add_days(Days::new(span - 1)).unwrap_or(NaiveDate::MAX);
            columns.push(Column {
                first,
                last,
                start: day_bounds(first, self.tz).0,
                end: day_bounds(last, self.tz).1,
            });
            offset += span;
        }
        columns
    }

    fn timeline(&self, task: &DecoratedTask, columns: &[Column]) -> String {
        columns
            .iter()
            .map(|column| {
                if task.task.start < column.end && task.task.end > column.start {
                    '█'
                } else {
                    '·'
                }
            })
            .collect()
    }

    fn timeline_header(&self, columns: &[Column], step: &str) -> String {
        let (_, per_column) = self.days_per_column();
        let scale = if per_column == 1 {
            format!("1 {step}/col")
        } else {
            format!("{per_column} {step}s/col")
        };
        match (columns.first(), columns.last()) {
            (Some(first), Some(last)) => format!(
                "{} → {} ({scale})",
                first.first.format("%m-%d"),
                last.last.format("%m-%d")
            ),
            _ => "Timeline".to_string(),
        }
    }

    fn is_running(&self, task: &DecoratedTask) -> bool {
        task.task.start <= self.now && task.task.end >= self.now
    }
}

impl<W: Write> ChartRenderer for GanttTable<W> {
    fn render(&mut self, tasks: &[DecoratedTask], options: &ChartOptions) -> Result<(), CoreError> {
        if tasks.is_empty() {
            writeln!(self.out, "No tasks to show.")?;
            return Ok(());
        }

        let step = match options.view_mode {
            ViewMode::Day => "day",
        };
        let columns = self.columns();
        let date_time_format = format!("{} %H:%M", options.date_format);

        let mut table = Table::new();
        table.set_header(vec![
            "Name".to_string(),
            "Start".to_string(),
            "End".to_string(),
            "Progress".to_string(),
            self.timeline_header(&columns, step),
        ]);

        for task in tasks {
            let mut row = Row::new();
            let mut name_cell = Cell::new(&task.task.name);
            if self.is_running(task) {
                name_cell = name_cell.add_attribute(Attribute::Bold);
            }
            row.add_cell(name_cell);

            let relative = HumanTime::from(task.task.start - self.now);
            row.add_cell(Cell::new(format!(
                "{} ({})",
                format_local(task.task.start, self.tz, &date_time_format),
                relative
            )));
            row.add_cell(Cell::new(format_local(task.task.end, self.tz, &date_time_format)));
            row.add_cell(Cell::new(progress_bar(task.progress)).fg(progress_color(task.class)));
            row.add_cell(Cell::new(self.timeline(task, &columns)).fg(progress_color(task.class)));
            table.add_row(row);
        }

        writeln!(self.out, "{table}")?;
        if tasks.iter().any(|task| self.is_running(task)) {
            writeln!(self.out, "Bold names are running now.")?;
        }
        Ok(())
    }
}

fn progress_bar(progress: u8) -> String {
    let filled = usize::from(progress) * BAR_WIDTH / 100;
    format!(
        "{}{} {:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress
    )
}

fn progress_color(class: ProgressClass) -> Color {
    match class {
        ProgressClass::Low => Color::Blue,
        ProgressClass::Medium => Color::Yellow,
        ProgressClass::High => Color::Magenta,
        ProgressClass::Complete => Color::Green,
    }
}

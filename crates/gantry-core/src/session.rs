use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::CoreError;
use crate::export::{copy_day, Clipboard, DayExport};
use crate::loader::Schedule;
use crate::view::{render, ChartRenderer, ViewFilter};

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The "show completed" checkbox changed.
    CompletedToggled(bool),
    /// The name filter input changed. Fired per keystroke.
    NameFilterChanged(String),
    /// Copy the schedule for the picked date, if any.
    CopyRequested(Option<NaiveDate>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The chart was redrawn with this many tasks.
    Rendered(usize),
    Copied(DayExport),
}

/// Holds the current filters over a loaded schedule and reacts to [`UiEvent`]s.
#[derive(Debug)]
pub struct Session<'a> {
    schedule: &'a Schedule,
    filter: ViewFilter,
    tz: Tz,
}

impl<'a> Session<'a> {
    pub fn new(schedule: &'a Schedule, filter: ViewFilter, tz: Tz) -> Self {
        Self {
            schedule,
            filter,
            tz,
        }
    }

    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    pub fn schedule(&self) -> &Schedule {
        self.schedule
    }

    /// Draw the chart with the current filters.
    pub fn refresh(
        &self,
        now: DateTime<Utc>,
        renderer: &mut dyn ChartRenderer,
    ) -> Result<usize, CoreError> {
        render(self.schedule, now, &self.filter, self.tz, renderer)
    }

    pub fn handle(
        &mut self,
        event: UiEvent,
        now: DateTime<Utc>,
        renderer: &mut dyn ChartRenderer,
        clipboard: &mut dyn Clipboard,
    ) -> Result<Outcome, CoreError> {
        debug!(?event, "handling ui event");
        match event {
            UiEvent::CompletedToggled(show_completed) => {
                self.filter.show_completed = show_completed;
                self.refresh(now, renderer).map(Outcome::Rendered)
            }
            UiEvent::NameFilterChanged(name_filter) => {
                self.filter.name_filter = name_filter;
                self.refresh(now, renderer).map(Outcome::Rendered)
            }
            UiEvent::CopyRequested(date) => {
                copy_day(self.schedule.tasks(), date, self.tz, clipboard).map(Outcome::Copied)
            }
        }
    }
}

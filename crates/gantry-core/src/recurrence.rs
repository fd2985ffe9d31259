use chrono_tz::Tz;
use tracing::debug;

use crate::error::CoreError;
use crate::models::Task;
use crate::time::{add_days, to_iso_string};

/// Generated instances of one recurring task, in chronological order.
///
/// Yields nothing for a task without a repeat rule. The original task itself
/// is never yielded.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    task: &'a Task,
    tz: Tz,
    step: i64,
    done: bool,
}

impl<'a> Occurrences<'a> {
    /// Fails when the task's repeat interval is not a positive number of days.
    pub fn new(task: &'a Task, tz: Tz) -> Result<Self, CoreError> {
        if let Some(rule) = &task.repeat {
            if rule.interval <= 0 {
                return Err(CoreError::InvalidRecurrence {
                    id: task.id.clone(),
                    interval: rule.interval,
                });
            }
        }
        Ok(Self {
            task,
            tz,
            step: 0,
            done: task.repeat.is_none(),
        })
    }
}

impl Iterator for Occurrences<'_> {
    type Item = Task;

    fn next(&mut self) -> Option<Task> {
        if self.done {
            return None;
        }
        let rule = self.task.repeat.as_ref()?;

        self.step += 1;
        // Offsets past the representable calendar lie beyond any end date.
        let shifted = self.step.checked_mul(rule.interval).and_then(|offset| {
            let start = add_days(self.task.start, offset, self.tz)?;
            let end = add_days(self.task.end, offset, self.tz)?;
            Some((start, end))
        });
        let (start, end) = match shifted {
            Some((start, end)) if start <= rule.end_date => (start, end),
            _ => {
                self.done = true;
                return None;
            }
        };

        Some(Task {
            id: format!("{}_repeat_{}", self.task.id, to_iso_string(start)),
            start,
            end,
            ..self.task.clone()
        })
    }
}

/// Generated instances of `task`, validated up front.
pub fn occurrences(task: &Task, tz: Tz) -> Result<Occurrences<'_>, CoreError> {
    Occurrences::new(task, tz)
}

/// Expands every recurring task into its instances.
///
/// Output keeps input order; each task is followed directly by its own
/// instances. Calendar-day steps are taken in `tz`.
pub fn expand(tasks: Vec<Task>, tz: Tz) -> Result<Vec<Task>, CoreError> {
    let mut expanded = Vec::with_capacity(tasks.len());

    for task in tasks {
        let instances: Vec<Task> = occurrences(&task, tz)?.collect();
        if !instances.is_empty() {
            debug!(task = %task.id, count = instances.len(), "expanded recurring task");
        }
        expanded.push(task);
        expanded.extend(instances);
    }

    Ok(expanded)
}

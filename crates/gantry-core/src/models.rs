use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::CoreError;
use crate::time::parse_timestamp;

/// A task record exactly as it appears in a source file.
///
/// Timestamps stay as strings here; they are only meaningful once a timezone
/// is known, see [`Task::from_raw`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawTask {
    pub id: String,
    pub name: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub repeat: Option<RawRepeat>,
    /// Any other fields, carried through expansion untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRepeat {
    pub interval: i64,
    pub end_date: String,
}

/// Fixed-day repetition bound by an inclusive end date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepeatRule {
    /// Whole days between occurrences.
    pub interval: i64,
    /// Last instant an occurrence may start at.
    pub end_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<RepeatRule>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start,
            end,
            repeat: None,
            extra: Map::new(),
        }
    }

    pub fn with_repeat(mut self, interval: i64, end_date: DateTime<Utc>) -> Self {
        self.repeat = Some(RepeatRule { interval, end_date });
        self
    }

    /// Resolves a source record's timestamps in `tz`.
    pub fn from_raw(raw: RawTask, tz: Tz) -> Result<Self, CoreError> {
        let repeat = raw
            .repeat
            .map(|r| -> Result<RepeatRule, CoreError> {
                Ok(RepeatRule {
                    interval: r.interval,
                    end_date: parse_timestamp(&r.end_date, tz)?,
                })
            })
            .transpose()?;

        Ok(Self {
            start: parse_timestamp(&raw.start, tz)?,
            end: parse_timestamp(&raw.end, tz)?,
            id: raw.id,
            name: raw.name,
            repeat,
            extra: raw.extra,
        })
    }
}

/// Progress bucket used to color a chart bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProgressClass {
    #[serde(rename = "progress-low")]
    Low,
    #[serde(rename = "progress-medium")]
    Medium,
    #[serde(rename = "progress-high")]
    High,
    #[serde(rename = "progress-complete")]
    Complete,
}

impl ProgressClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressClass::Low => "progress-low",
            ProgressClass::Medium => "progress-medium",
            ProgressClass::High => "progress-high",
            ProgressClass::Complete => "progress-complete",
        }
    }
}

impl fmt::Display for ProgressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task prepared for the chart: progress measured against one `now`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecoratedTask {
    #[serde(flatten)]
    pub task: Task,
    pub progress: u8,
    #[serde(rename = "custom_class")]
    pub class: ProgressClass,
}

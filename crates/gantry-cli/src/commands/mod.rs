use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::config::Config;

pub mod browse;
pub mod copy;
pub mod expand;
pub mod show;

/// Settings every command runs with, resolved from flags and configuration.
#[derive(Debug, Clone)]
pub struct Context {
    pub tz: Tz,
    /// Fixed by `--now`; otherwise read from the clock when needed.
    pub now_override: Option<DateTime<Utc>>,
    pub config: Config,
}

impl Context {
    pub fn now(&self) -> DateTime<Utc> {
        self.now_override.unwrap_or_else(Utc::now)
    }
}

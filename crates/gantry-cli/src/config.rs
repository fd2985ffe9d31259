use chrono_tz::Tz;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use gantry_core::view::DEFAULT_WINDOW_DAYS;

const DEFAULT_CONFIG_FILE: &str = "gantry.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Task files loaded in this order
    #[serde(default)]
    pub sources: Vec<PathBuf>,
    /// Directory whose *.json files are loaded after `sources`
    #[serde(default)]
    pub tasks_dir: Option<PathBuf>,
    /// IANA timezone used to read and display times
    #[serde(default = "detect_system_timezone")]
    pub timezone: String,
    /// Days ahead of now that the chart shows
    #[serde(default = "default_window_days")]
    pub window_days: i64,
    /// Whether ended tasks are shown by default
    #[serde(default)]
    pub show_completed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            tasks_dir: None,
            timezone: detect_system_timezone(),
            window_days: default_window_days(),
            show_completed: false,
        }
    }
}

fn default_window_days() -> i64 {
    DEFAULT_WINDOW_DAYS
}

impl Config {
    /// Reads `path` (or ./gantry.toml) and `GANTRY_*` environment variables.
    /// A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        Self::figment(file).extract()
    }

    fn figment(file: &Path) -> Figment {
        Figment::new()
            .merge(Toml::file(file))
            .merge(Env::prefixed("GANTRY_").ignore(&["log"]))
    }
}

/// Validates that a timezone string is a valid IANA timezone name
pub fn validate_timezone(timezone: &str) -> Result<Tz, String> {
    Tz::from_str(timezone).map_err(|_| {
        format!(
            "Invalid timezone: '{}'. Use IANA timezone names like 'Asia/Tokyo'",
            timezone
        )
    })
}

/// Detects the system timezone, falling back to UTC if detection fails
pub fn detect_system_timezone() -> String {
    if let Ok(tz) = std::env::var("TZ") {
        if validate_timezone(&tz).is_ok() {
            return tz;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(tz) = std::fs::read_to_string("/etc/timezone") {
            let tz = tz.trim();
            if validate_timezone(tz).is_ok() {
                return tz.to_string();
            }
        }
    }

    if let Ok(local_tz) = iana_time_zone::get_timezone() {
        if validate_timezone(&local_tz).is_ok() {
            return local_tz;
        }
    }

    "UTC".to_string()
}

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_english::{parse_date_string, Dialect};
use chrono_tz::Tz;
use gantry_core::time::{local_date, parse_timestamp};

/// Reads a calendar day: an ISO date, or a phrase like "tomorrow" or "next friday".
pub fn parse_date(date_str: &str, now: DateTime<Utc>, tz: Tz) -> Result<NaiveDate> {
    let trimmed = date_str.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(instant) = parse_timestamp(trimmed, tz) {
        return Ok(local_date(instant, tz));
    }
    parse_date_string(trimmed, now.with_timezone(&tz), Dialect::Us)
        .map(|dt| dt.date_naive())
        .map_err(|e| anyhow::anyhow!("Failed to parse date '{}': {}", date_str, e))
}

/// The `--now` override, or the real clock.
pub fn parse_now(raw: Option<&str>, tz: Tz) -> Result<DateTime<Utc>> {
    match raw {
        Some(raw) => Ok(parse_timestamp(raw, tz)?),
        None => Ok(Utc::now()),
    }
}

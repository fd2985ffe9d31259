use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::CoreError;

/// Wall-clock layouts accepted for timestamps that carry no UTC offset.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Offset-carrying layouts that RFC 3339 rejects (missing seconds).
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

/// Validate and parse an IANA timezone name.
pub fn parse_timezone(name: &str) -> Result<Tz, CoreError> {
    Tz::from_str(name.trim()).map_err(|_| CoreError::InvalidTimezone(name.to_string()))
}

/// Parses an ISO-8601 timestamp.
///
/// Strings with an explicit offset (or `Z`) are taken as-is. Strings without
/// one, including date-only values, are read as wall-clock time in `tz`.
pub fn parse_timestamp(raw: &str, tz: Tz) -> Result<DateTime<Utc>, CoreError> {
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(localize(naive, tz));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(localize(date.and_time(NaiveTime::MIN), tz));
    }

    Err(CoreError::InvalidTimestamp(raw.to_string()))
}

/// Resolves a wall-clock time in `tz` to an instant.
///
/// Ambiguous times (DST fall-back) take the earlier instant. Times that do not
/// exist (DST spring-forward) move one hour later.
pub fn localize(naive: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            let shifted = naive.checked_add_signed(Duration::hours(1));
            match shifted.and_then(|shifted| tz.from_local_datetime(&shifted).earliest()) {
                Some(dt) => dt.with_timezone(&Utc),
                None => tz.from_utc_datetime(&naive).with_timezone(&Utc),
            }
        }
    }
}

/// Moves `instant` by whole calendar days in `tz`, keeping its local time of day.
///
/// Returns `None` when the result falls outside the representable date range.
pub fn add_days(instant: DateTime<Utc>, days: i64, tz: Tz) -> Option<DateTime<Utc>> {
    let local = instant.with_timezone(&tz).naive_local();
    let moved = local.checked_add_signed(Duration::try_days(days)?)?;
    Some(localize(moved, tz))
}

/// First and last millisecond of `date` in `tz`.
pub fn day_bounds(date: NaiveDate, tz: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    let midnight = date.and_time(NaiveTime::MIN);
    let last_millisecond = date.and_hms_milli_opt(23, 59, 59, 999).unwrap_or(midnight);
    (localize(midnight, tz), localize(last_millisecond, tz))
}

/// Calendar date of `instant` in `tz`.
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Format `instant` as wall-clock time in `tz`.
pub fn format_local(instant: DateTime<Utc>, tz: Tz, format: &str) -> String {
    instant.with_timezone(&tz).format(format).to_string()
}

/// UTC ISO-8601 with milliseconds, e.g. `2024-01-08T00:00:00.000Z`.
pub fn to_iso_string(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

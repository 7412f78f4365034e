use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::error::{Result, SkillmapError};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a timestamp given on the command line or in a config file.
///
/// Accepts RFC 3339 (`2024-01-31T12:00:00+02:00`), a naive date-time
/// (`2024-01-31T12:00:00`, `2024-01-31 12:00:00`) or a bare date
/// (`2024-01-31`, read as midnight). Naive values are taken as UTC.
/// `key` names the setting in the error message.
pub fn parse_timestamp(key: &'static str, value: &str) -> Result<DateTime<FixedOffset>> {
    let s = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        });

    match naive {
        Some(n) => Ok(n.and_utc().fixed_offset()),
        None => Err(SkillmapError::InvalidTimestamp {
            key,
            value: value.to_string(),
        }),
    }
}

/// Same as [`parse_timestamp`] but normalised to UTC.
pub fn parse_instant(key: &'static str, value: &str) -> Result<DateTime<Utc>> {
    parse_timestamp(key, value).map(|dt| dt.with_timezone(&Utc))
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "util_test.rs"]
mod tests;

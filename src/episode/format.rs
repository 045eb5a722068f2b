// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, FixedOffset, Locale, NaiveDate, NaiveDateTime};

use crate::api::RawDuration;
use crate::error::EpisodeError;

/// Short publish date pattern: day without padding, abbreviated month, two-digit year
const PUBLISHED_AT_FORMAT: &str = "%-d %b %y";

/// Format a number of seconds as `HH:mm:ss`
///
/// Every field is zero-padded to two digits; hours keep growing past 99.
pub fn duration_to_time_string(duration: u64) -> String {
    let hours = duration / 3600;
    let minutes = (duration % 3600) / 60;
    let seconds = duration % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Parse an ISO-8601 timestamp as served by the API
///
/// Timestamps without an offset are taken as UTC, and a bare date as
/// midnight UTC.
pub fn parse_published_at(value: &str) -> Result<DateTime<FixedOffset>, EpisodeError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt);
    }

    let naive_formats = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
    for format in naive_formats {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }

    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Ok(date.and_time(chrono::NaiveTime::MIN).and_utc().fixed_offset()),
        Err(e) => Err(EpisodeError::InvalidDate {
            value: value.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Format a publish timestamp as a pt-BR short date, e.g. `15 Mar 21`
///
/// The month abbreviation is the pt-BR one (`fev`, `abr`, `set`, ...)
/// with its first letter capitalized.
pub fn format_published_at(value: &str) -> Result<String, EpisodeError> {
    let published_at = parse_published_at(value)?;
    let formatted = published_at
        .format_localized(PUBLISHED_AT_FORMAT, Locale::pt_BR)
        .to_string();

    Ok(formatted
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" "))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert the raw duration field into whole seconds
///
/// Accepts non-negative numbers, either as JSON numbers or numeric
/// strings. Fractional values are truncated to whole seconds.
pub fn parse_duration(id: &str, raw: Option<&RawDuration>) -> Result<u64, EpisodeError> {
    let raw = raw.ok_or_else(|| EpisodeError::MissingDuration { id: id.to_string() })?;

    let invalid = || EpisodeError::InvalidDuration {
        id: id.to_string(),
        value: raw.to_string(),
    };

    match raw {
        RawDuration::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().and_then(whole_seconds))
            .ok_or_else(invalid),
        RawDuration::Text(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_seconds))
                .ok_or_else(invalid)
        }
    }
}

fn whole_seconds(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0 && value <= u64::MAX as f64).then_some(value.trunc() as u64)
}

//! Duration and elapsed-period formatting

use chrono::{DateTime, Utc};
use std::time::Duration;

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Format a millisecond duration as e.g. `"1d 2h 3m 4.56s"`
///
/// Seconds are always present with two decimals. Days, hours and minutes
/// only appear when their own component is non-zero.
pub fn time_to_string(ms: u64) -> String {
    let days = ms / MS_PER_DAY;
    let hours = (ms / MS_PER_HOUR) % 24;
    let minutes = (ms / MS_PER_MINUTE) % 60;
    let seconds = (ms % MS_PER_MINUTE) as f64 / MS_PER_SECOND as f64;

    let mut parts = Vec::with_capacity(4);
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    parts.push(format!("{:.2}s", seconds));
    parts.join(" ")
}

/// [`time_to_string`] for a `Duration`, saturating at `u64::MAX` milliseconds
pub fn duration_to_string(duration: Duration) -> String {
    time_to_string(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PeriodUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl PeriodUnit {
    fn name(self) -> &'static str {
        match self {
            PeriodUnit::Second => "second",
            PeriodUnit::Minute => "minute",
            PeriodUnit::Hour => "hour",
            PeriodUnit::Day => "day",
            PeriodUnit::Week => "week",
            PeriodUnit::Month => "month",
            PeriodUnit::Year => "year",
        }
    }

    fn singular_article(self) -> &'static str {
        match self {
            PeriodUnit::Hour => "an",
            _ => "a",
        }
    }
}

/// Describe how long ago `date` was, relative to the current time
pub fn period_since(date: DateTime<Utc>) -> Option<String> {
    period_between(date, Utc::now())
}

/// Describe how long before `now` the `date` was, e.g. `"3 days ago"`
///
/// Buckets are floor-divided (weeks are 7 days, months 30, years 365) and
/// the largest non-zero one wins. Returns `None` when less than a second
/// has elapsed or `date` is in the future.
pub fn period_between(date: DateTime<Utc>, now: DateTime<Utc>) -> Option<String> {
    let seconds = now.signed_duration_since(date).num_seconds();
    if seconds <= 0 {
        return None;
    }

    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let weeks = days / 7;
    let months = days / 30;
    let years = days / 365;

    let (value, unit) = [
        (years, PeriodUnit::Year),
        (months, PeriodUnit::Month),
        (weeks, PeriodUnit::Week),
        (days, PeriodUnit::Day),
        (hours, PeriodUnit::Hour),
        (minutes, PeriodUnit::Minute),
    ]
    .into_iter()
    .find(|(value, _)| *value > 0)
    .unwrap_or((seconds, PeriodUnit::Second));

    Some(if value == 1 {
        format!("{} {} ago", unit.singular_article(), unit.name())
    } else {
        format!("{} {}s ago", value, unit.name())
    })
}

#[cfg(test)]
mod tests;

//! Tests for time formatting

use super::*;
use chrono::{Duration as ChronoDuration, TimeZone};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

#[test]
fn test_time_to_string_minutes_and_seconds() {
    assert_eq!(time_to_string(123456), "2m 3.46s");
}

#[test]
fn test_time_to_string_zero() {
    assert_eq!(time_to_string(0), "0.00s");
}

#[test]
fn test_time_to_string_skips_zero_components() {
    assert_eq!(time_to_string(3_605_000), "1h 5.00s");
    assert_eq!(time_to_string(86_400_000), "1d 0.00s");
    assert_eq!(time_to_string(90_061_010), "1d 1h 1m 1.01s");
    assert_eq!(time_to_string(999), "1.00s");
}

#[test]
fn test_duration_to_string() {
    assert_eq!(duration_to_string(Duration::from_millis(1_500)), "1.50s");
}

#[test]
fn test_period_one_minute_ago() {
    let date = now() - ChronoDuration::minutes(1);
    assert_eq!(period_between(date, now()), Some("a minute ago".to_string()));
}

#[test]
fn test_period_zero_elapsed() {
    assert_eq!(period_between(now(), now()), None);
}

#[test]
fn test_period_future_date() {
    let date = now() + ChronoDuration::hours(2);
    assert_eq!(period_between(date, now()), None);
}

#[test]
fn test_period_singular_and_plural() {
    let cases = [
        (ChronoDuration::seconds(1), "a second ago"),
        (ChronoDuration::seconds(45), "45 seconds ago"),
        (ChronoDuration::minutes(59), "59 minutes ago"),
        (ChronoDuration::hours(1), "an hour ago"),
        (ChronoDuration::hours(23), "23 hours ago"),
        (ChronoDuration::days(2), "2 days ago"),
        (ChronoDuration::days(7), "a week ago"),
        (ChronoDuration::days(29), "4 weeks ago"),
        (ChronoDuration::days(30), "a month ago"),
        (ChronoDuration::days(364), "12 months ago"),
        (ChronoDuration::days(800), "2 years ago"),
    ];

    for (elapsed, expected) in cases {
        let date = now() - elapsed;
        assert_eq!(
            period_between(date, now()).as_deref(),
            Some(expected),
            "elapsed {elapsed:?}"
        );
    }
}

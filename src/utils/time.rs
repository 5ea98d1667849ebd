//! Time utilities: the compact YYYYMMDD-HHMMSS stamp, interval rounding,
//! minute formatting.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDateTime, Timelike};

/// Timestamp layout used in log lines and evidence file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

pub fn parse_optional_timestamp(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    input.map(|s| parse_timestamp(s)).transpose()
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local wall-clock time, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Minutes elapsed from `from` to `to`, rounded to the nearest minute.
/// Exact half minutes go to the even neighbour (90 s → 2, 30 s → 0).
pub fn rounded_minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    let secs = (to - from).num_seconds();
    let whole = secs.div_euclid(60);
    let rest = secs.rem_euclid(60);

    match rest {
        r if r > 30 => whole + 1,
        30 if whole % 2 != 0 => whole + 1,
        _ => whole,
    }
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(s: &str) -> NaiveDateTime {
        parse_timestamp(s).unwrap()
    }

    #[test]
    fn rounds_to_nearest_minute() {
        let start = at("20230301-080000");
        assert_eq!(rounded_minutes_between(start, start), 0);
        assert_eq!(
            rounded_minutes_between(start, start + Duration::seconds(29)),
            0
        );
        assert_eq!(
            rounded_minutes_between(start, start + Duration::seconds(31)),
            1
        );
        assert_eq!(
            rounded_minutes_between(start, start + Duration::seconds(599)),
            10
        );
        assert_eq!(rounded_minutes_between(start, at("20230301-084500")), 45);
    }

    #[test]
    fn half_minutes_round_to_even() {
        let start = at("20230301-080000");
        assert_eq!(
            rounded_minutes_between(start, start + Duration::seconds(30)),
            0
        );
        assert_eq!(
            rounded_minutes_between(start, start + Duration::seconds(90)),
            2
        );
        assert_eq!(
            rounded_minutes_between(start, start + Duration::seconds(150)),
            2
        );
        assert_eq!(
            rounded_minutes_between(start + Duration::seconds(90), start),
            -2
        );
    }

    #[test]
    fn timestamp_parse_rejects_garbage() {
        assert!(parse_timestamp("2023-03-01 08:00").is_err());
        assert_eq!(format_timestamp(&at("20230301-080000")), "20230301-080000");
    }

    #[test]
    fn minutes_are_formatted_as_hours() {
        assert_eq!(format_minutes(45), "00:45");
        assert_eq!(format_minutes(135), "02:15");
        assert_eq!(format_minutes(-5), "-00:05");
    }
}

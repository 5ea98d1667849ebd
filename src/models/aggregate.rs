use chrono::NaiveDate;
use serde::Serialize;

pub const DATE_FORMAT: &str = "%Y%m%d";

/// Running total of minutes spent outside on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub minutes_outside: i64,
}

impl DailyAggregate {
    pub fn new(date: NaiveDate, minutes_outside: i64) -> Self {
        Self {
            date,
            minutes_outside,
        }
    }

    pub fn date_key(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Parse an aggregate line: the first field is the date, the last
    /// field is the day's current total. Intermediate fields are earlier
    /// totals left behind by same-day merges.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        let (date, rest) = line.split_once(',')?;
        let total = rest.rsplit(',').next()?;

        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()?;
        let minutes = total.trim().parse::<i64>().ok()?;

        Some(Self::new(date, minutes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_field_is_the_total() {
        let row = DailyAggregate::parse_line("20230301,45,60,75").unwrap();
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());
        assert_eq!(row.minutes_outside, 75);
        assert_eq!(row.date_key(), "20230301");
    }

    #[test]
    fn single_value_line() {
        let row = DailyAggregate::parse_line("20230302,12\n").unwrap();
        assert_eq!(row.minutes_outside, 12);
    }

    #[test]
    fn garbage_is_not_a_row() {
        assert!(DailyAggregate::parse_line("").is_none());
        assert!(DailyAggregate::parse_line("20230301").is_none());
        assert!(DailyAggregate::parse_line("20230301,").is_none());
        assert!(DailyAggregate::parse_line("2023-03-01,5").is_none());
        assert!(DailyAggregate::parse_line("20230301,5,x").is_none());
    }
}

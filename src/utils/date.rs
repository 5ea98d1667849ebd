use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Report filter: a whole year or a single month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Year(i32),
    Month(i32, u32),
}

impl Period {
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            Period::Year(y) => date.year() == y,
            Period::Month(y, m) => date.year() == y && date.month() == m,
        }
    }
}

/// Parse `YYYY` or `YYYY-MM`.
pub fn parse_period(p: &str) -> AppResult<Period> {
    let p = p.trim();

    // YYYY-MM
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        return Ok(Period::Month(d.year(), d.month()));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        return Ok(Period::Year(year));
    }

    Err(AppError::InvalidPeriod(p.to_string()))
}

/// First day of the month `date` belongs to.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

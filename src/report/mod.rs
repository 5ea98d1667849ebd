//! Reading the aggregate file back for reporting: one total per day, and
//! the monthly averages the dashboard plots.

mod output;

pub use output::{render_daily_table, render_monthly_table, write_rows};

use crate::errors::AppResult;
use crate::models::DailyAggregate;
use crate::utils::date::{Period, month_start};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Table,
    Json,
    Csv,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Table => "table",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyAverage {
    /// `YYYY-MM`
    pub month: String,
    pub days: usize,
    pub average_minutes: i64,
}

/// Parse the whole aggregate file. Blank lines are skipped, unreadable
/// ones are skipped with a warning; a day listed twice keeps its first
/// position and its last value.
pub fn parse_days(content: &str) -> Vec<DailyAggregate> {
    let mut days: Vec<DailyAggregate> = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let Some(row) = DailyAggregate::parse_line(line) else {
            log::warn!("skipping unreadable aggregate line {}: {:?}", idx + 1, line);
            continue;
        };

        match days.iter_mut().find(|d| d.date == row.date) {
            Some(existing) => existing.minutes_outside = row.minutes_outside,
            None => days.push(row),
        }
    }

    days
}

/// Load the aggregate file; a missing file is an empty report.
pub fn load_days(path: &Path) -> AppResult<Vec<DailyAggregate>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(parse_days(&content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

pub fn filter_period(days: Vec<DailyAggregate>, period: Option<Period>) -> Vec<DailyAggregate> {
    match period {
        Some(p) => days.into_iter().filter(|d| p.contains(d.date)).collect(),
        None => days,
    }
}

/// Mean of the recorded days of each month, rounded to whole minutes.
/// Months come out in calendar order.
pub fn monthly_averages(days: &[DailyAggregate]) -> Vec<MonthlyAverage> {
    let mut buckets: Vec<(NaiveDate, Vec<i64>)> = Vec::new();

    for d in days {
        let key = month_start(d.date);
        match buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(d.minutes_outside),
            None => buckets.push((key, vec![d.minutes_outside])),
        }
    }

    buckets.sort_by_key(|(k, _)| *k);

    buckets
        .into_iter()
        .map(|(key, values)| {
            let sum: i64 = values.iter().sum();
            let avg = (sum as f64 / values.len() as f64).round() as i64;
            MonthlyAverage {
                month: key.format("%Y-%m").to_string(),
                days: values.len(),
                average_minutes: avg,
            }
        })
        .collect()
}

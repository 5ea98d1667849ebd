use super::{MonthlyAverage, ReportFormat};
use crate::errors::{AppError, AppResult};
use crate::models::DailyAggregate;
use crate::utils::colors::colorize_minutes;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;
use serde::Serialize;
use std::io::Write;

pub fn render_daily_table(days: &[DailyAggregate], color: bool) -> String {
    let mut table = Table::new(vec![
        Column::left("Date", 10),
        Column::right("Minutes", 7),
        Column::right("Hours", 7),
    ]);

    for d in days {
        let hours = format_minutes(d.minutes_outside);
        table.add_row(vec![
            d.date.format("%Y-%m-%d").to_string(),
            d.minutes_outside.to_string(),
            if color {
                colorize_minutes(&hours, d.minutes_outside)
            } else {
                hours
            },
        ]);
    }

    table.render()
}

pub fn render_monthly_table(months: &[MonthlyAverage]) -> String {
    let mut table = Table::new(vec![
        Column::left("Month", 7),
        Column::right("Days", 5),
        Column::right("Avg/day", 8),
    ]);

    for m in months {
        table.add_row(vec![
            m.month.clone(),
            m.days.to_string(),
            format_minutes(m.average_minutes),
        ]);
    }

    table.render()
}

/// Serialize rows as pretty JSON or as CSV with a header row.
pub fn write_rows<T: Serialize, W: Write>(
    rows: &[T],
    format: ReportFormat,
    out: &mut W,
) -> AppResult<()> {
    match format {
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
        ReportFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut *out);
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        ReportFormat::Table => {
            return Err(AppError::Export(
                "table output is rendered, not serialized".to_string(),
            ));
        }
    }
    Ok(())
}

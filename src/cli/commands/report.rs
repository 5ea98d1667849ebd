use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::report::{
    ReportFormat, filter_period, load_days, monthly_averages, render_daily_table,
    render_monthly_table, write_rows,
};
use crate::storage::FileAggregateLog;
use crate::ui::messages::{info, success};
use crate::utils::date::parse_period;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Print or export the time-outside report.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        period,
        monthly,
        format,
        file,
    } = cmd
    {
        let period = period.as_deref().map(parse_period).transpose()?;

        let source = FileAggregateLog::in_dir(&cfg.logs_dir());
        let days = filter_period(load_days(source.path())?, period);

        if days.is_empty() {
            info("No time-outside data for the selected period.");
            return Ok(());
        }

        let mut out: Box<dyn Write> = match file {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(io::stdout().lock()),
        };

        match (format, *monthly) {
            (ReportFormat::Table, false) => {
                let color = file.is_none();
                write!(out, "{}", render_daily_table(&days, color))?;
            }
            (ReportFormat::Table, true) => {
                write!(out, "{}", render_monthly_table(&monthly_averages(&days)))?;
            }
            (fmt, false) => write_rows(&days, *fmt, &mut out)?,
            (fmt, true) => write_rows(&monthly_averages(&days), *fmt, &mut out)?,
        }
        out.flush()?;
        drop(out);

        if let Some(path) = file {
            success(format!("{} report written to {}", format.as_str(), path));
        }
    }

    Ok(())
}

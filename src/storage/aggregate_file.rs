//! `aggregate_data.txt`: one `YYYYMMDD,<total>[,<total>...]` line per day.
//!
//! A same-day merge does not rewrite the line. It appends the new running
//! total as one more comma field, so the last field of a line is always the
//! day's current total and earlier fields are its history.

use super::{AggregateLog, AggregateTail, tail};
use crate::errors::AppResult;
use crate::models::DailyAggregate;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

pub const AGGREGATE_FILE: &str = "aggregate_data.txt";

#[derive(Debug, Clone)]
pub struct FileAggregateLog {
    path: PathBuf,
}

impl FileAggregateLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Aggregate file placed in the log directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(AGGREGATE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> io::Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }
}

impl AggregateLog for FileAggregateLog {
    fn last_day(&self) -> AppResult<AggregateTail> {
        let mut file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(AggregateTail::Missing),
            Err(e) => return Err(e.into()),
        };

        let tail = match tail::last_line(&mut file) {
            Ok(Some(line)) => match DailyAggregate::parse_line(&line) {
                Some(row) => AggregateTail::Found(row),
                None => AggregateTail::Corrupt(line),
            },
            Ok(None) => AggregateTail::Empty,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                AggregateTail::Corrupt(String::from("<non utf-8 data>"))
            }
            Err(e) => return Err(e.into()),
        };

        Ok(tail)
    }

    fn append_day(&self, row: &DailyAggregate) -> AppResult<()> {
        self.ensure_parent()?;
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)?;

        // Files left by older writers end without a newline.
        let len = file.metadata()?.len();
        if len > 0 && tail::trailing_eol_len(&mut file)? == 0 {
            file.write_all(b"\n")?;
        }

        writeln!(file, "{},{}", row.date_key(), row.minutes_outside)?;
        Ok(())
    }

    fn merge_last_day(&self, row: &DailyAggregate) -> AppResult<()> {
        let mut file = OpenOptions::new().read(true).write(true).open(&self.path)?;

        let len = file.metadata()?.len();
        let eol = tail::trailing_eol_len(&mut file)?;
        file.set_len(len - eol)?;
        file.seek(SeekFrom::End(0))?;

        writeln!(file, ",{}", row.minutes_outside)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32, minutes: i64) -> DailyAggregate {
        DailyAggregate::new(NaiveDate::from_ymd_opt(2023, 3, d).unwrap(), minutes)
    }

    #[test]
    fn missing_then_found() {
        let tmp = tempfile::tempdir().unwrap();
        let agg = FileAggregateLog::in_dir(&tmp.path().join("logs"));

        assert_eq!(agg.last_day().unwrap(), AggregateTail::Missing);

        agg.append_day(&day(1, 45)).unwrap();
        assert_eq!(agg.last_day().unwrap(), AggregateTail::Found(day(1, 45)));
        assert_eq!(fs::read_to_string(agg.path()).unwrap(), "20230301,45\n");
    }

    #[test]
    fn merge_extends_trailing_line() {
        let tmp = tempfile::tempdir().unwrap();
        let agg = FileAggregateLog::in_dir(tmp.path());

        agg.append_day(&day(1, 45)).unwrap();
        agg.merge_last_day(&day(1, 60)).unwrap();
        agg.append_day(&day(2, 5)).unwrap();
        agg.merge_last_day(&day(2, 20)).unwrap();

        assert_eq!(
            fs::read_to_string(agg.path()).unwrap(),
            "20230301,45,60\n20230302,5,20\n"
        );
        assert_eq!(agg.last_day().unwrap(), AggregateTail::Found(day(2, 20)));
    }

    #[test]
    fn tolerates_legacy_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let agg = FileAggregateLog::in_dir(tmp.path());
        fs::write(agg.path(), "\n20230228,30,42").unwrap();

        assert_eq!(
            agg.last_day().unwrap(),
            AggregateTail::Found(DailyAggregate::new(
                NaiveDate::from_ymd_opt(2023, 2, 28).unwrap(),
                42
            ))
        );

        agg.append_day(&day(1, 7)).unwrap();
        assert_eq!(
            fs::read_to_string(agg.path()).unwrap(),
            "\n20230228,30,42\n20230301,7\n"
        );
    }

    #[test]
    fn blank_and_corrupt_tails() {
        let tmp = tempfile::tempdir().unwrap();
        let agg = FileAggregateLog::in_dir(tmp.path());

        fs::write(agg.path(), "\n").unwrap();
        assert_eq!(agg.last_day().unwrap(), AggregateTail::Empty);

        fs::write(agg.path(), "20230301,45\nnot a row\n").unwrap();
        assert_eq!(
            agg.last_day().unwrap(),
            AggregateTail::Corrupt("not a row".to_string())
        );
    }
}

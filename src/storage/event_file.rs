//! Monthly text partitions: `<dir>/YYYYMM_log.txt`, one
//! `YYYYMMDD-HHMMSS-label-LOCATION` line per event.

use super::{EventLog, Tail, tail};
use crate::errors::{AppError, AppResult};
use crate::models::LocationEvent;
use crate::models::event::partition_key;
use chrono::NaiveDateTime;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

pub const PARTITION_SUFFIX: &str = "_log.txt";

#[derive(Debug, Clone)]
pub struct FileEventLog {
    dir: PathBuf,
}

impl FileEventLog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn partition_path(&self, ts: &NaiveDateTime) -> PathBuf {
        self.dir
            .join(format!("{}{}", partition_key(ts), PARTITION_SUFFIX))
    }
}

impl EventLog for FileEventLog {
    fn append_event(&self, event: &LocationEvent) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.partition_path(&event.timestamp);

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{}", event.to_line())?;

        log::debug!("appended {} to {}", event.to_line(), path.display());
        Ok(())
    }

    fn read_last_event(&self, for_timestamp: NaiveDateTime) -> AppResult<Tail<LocationEvent>> {
        let path = self.partition_path(&for_timestamp);

        let mut file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Tail::Missing),
            Err(e) => return Err(e.into()),
        };

        let Some(line) = tail::last_line(&mut file)? else {
            return Ok(Tail::Empty);
        };

        LocationEvent::parse_line(&line)
            .map(Tail::Found)
            .ok_or(AppError::MalformedLogLine { path, line })
    }
}

use super::location::Location;
use crate::utils::time::{TIMESTAMP_FORMAT, format_timestamp};
use chrono::NaiveDateTime;
use serde::Serialize;

/// One logged observation: `YYYYMMDD-HHMMSS-label-LOCATION`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationEvent {
    pub timestamp: NaiveDateTime,
    pub label: String,
    pub location: Location,
}

impl LocationEvent {
    pub fn new(timestamp: NaiveDateTime, label: impl Into<String>, location: Location) -> Self {
        Self {
            timestamp,
            label: label.into(),
            location,
        }
    }

    /// Render as a log line, without the trailing newline.
    pub fn to_line(&self) -> String {
        format!(
            "{}-{}-{}",
            format_timestamp(&self.timestamp),
            self.label,
            self.location.code()
        )
    }

    /// Parse a log line. Returns `None` unless the line splits into exactly
    /// date, time, label and location.
    pub fn parse_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('-').collect();
        let [date, time, label, location] = fields.as_slice() else {
            return None;
        };

        let timestamp =
            NaiveDateTime::parse_from_str(&format!("{date}-{time}"), TIMESTAMP_FORMAT).ok()?;
        let location = Location::from_code(location)?;

        if label.is_empty() {
            return None;
        }

        Some(Self::new(timestamp, *label, location))
    }

    /// Partition key (`YYYYMM`) of this event.
    pub fn partition_key(&self) -> String {
        partition_key(&self.timestamp)
    }
}

pub fn partition_key(ts: &NaiveDateTime) -> String {
    ts.format("%Y%m").to_string()
}

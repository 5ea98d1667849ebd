//! Collaborators invoked after a significant event: a messaging hook and
//! an evidence (screenshot) grabber. Both are fire-and-forget. A failure is
//! logged and never undoes or blocks what the engine already stored.

pub mod command;

pub use command::{CommandCapture, CommandNotifier};

use crate::models::Location;
use chrono::NaiveDateTime;
use std::path::PathBuf;

/// Which trigger produced the event; decides the message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Message from the door's remote sensor; location is authoritative.
    Remote,
    /// Camera detection; location is inferred from the bounding box.
    Visual,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Remote => "remote",
            Source::Visual => "visual",
        }
    }
}

/// What gets sent to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub subject: String,
    pub source: Source,
    /// Where the cat was seen (before any inversion for the log).
    pub location: Location,
    pub evidence: Option<PathBuf>,
}

impl Notice {
    pub fn message(&self) -> String {
        match (self.source, self.location) {
            (Source::Visual, Location::In) => {
                format!("{} is waiting. Please let him OUT", self.subject)
            }
            (Source::Visual, Location::Out) => {
                format!("{} is waiting. Please let him IN", self.subject)
            }
            (Source::Remote, Location::In) => format!("{} is inside", self.subject),
            (Source::Remote, Location::Out) => format!("{} is outside", self.subject),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

pub trait EvidenceCapture: Send + Sync {
    /// Grab evidence for a detection at `timestamp`. `None` when nothing
    /// could be captured.
    fn capture(&self, timestamp: NaiveDateTime) -> Option<PathBuf>;
}

/// Notifier that only writes to the application log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        match &notice.evidence {
            Some(path) => log::info!("notify: {} [{}]", notice.message(), path.display()),
            None => log::info!("notify: {}", notice.message()),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoCapture;

impl EvidenceCapture for NoCapture {
    fn capture(&self, _timestamp: NaiveDateTime) -> Option<PathBuf> {
        None
    }
}

//! Persistence behind two small traits.
//!
//! The engine only ever needs the tail of each store: the last logged
//! event of a month, and the last aggregate row. Everything else is an
//! append. The file-backed implementations keep the plain text layout the
//! dashboard reads; [`memory::MemoryStore`] keeps the same semantics in RAM.

pub mod aggregate_file;
pub mod event_file;
pub mod lock;
pub mod memory;
pub mod tail;

pub use aggregate_file::FileAggregateLog;
pub use event_file::FileEventLog;
pub use lock::{DirLock, DirLockGuard};
pub use memory::MemoryStore;

use crate::errors::AppResult;
use crate::models::{DailyAggregate, LocationEvent};
use chrono::NaiveDateTime;

/// Outcome of probing the last event of a partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tail<T> {
    /// No partition for that month yet.
    Missing,
    /// Partition exists but holds no lines.
    Empty,
    Found(T),
}

impl<T> Tail<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Tail::Found(v) => Some(v),
            Tail::Missing | Tail::Empty => None,
        }
    }
}

/// Outcome of probing the last aggregate row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregateTail {
    Missing,
    Empty,
    /// The last line did not parse; carries the raw line.
    Corrupt(String),
    Found(DailyAggregate),
}

/// Month-partitioned, append-only event log.
pub trait EventLog: Send + Sync {
    /// Append one event to the partition of its own timestamp.
    fn append_event(&self, event: &LocationEvent) -> AppResult<()>;

    /// Last event of the partition that `for_timestamp` falls into.
    /// A line that is not a well formed event is an error, never `Empty`.
    fn read_last_event(&self, for_timestamp: NaiveDateTime) -> AppResult<Tail<LocationEvent>>;
}

/// Per-day running totals. Only the trailing row is ever read or changed.
pub trait AggregateLog: Send + Sync {
    fn last_day(&self) -> AppResult<AggregateTail>;

    /// Start a new row.
    fn append_day(&self, row: &DailyAggregate) -> AppResult<()>;

    /// Record a new running total on the trailing row. The caller has
    /// already checked that `row.date` matches it.
    fn merge_last_day(&self, row: &DailyAggregate) -> AppResult<()>;
}

//! In-memory store with the same tail semantics as the text files.
//! Used where a throwaway store is wanted (engine tests).

use super::{AggregateLog, AggregateTail, EventLog, Tail};
use crate::errors::AppResult;
use crate::models::event::partition_key;
use crate::models::{DailyAggregate, LocationEvent};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct MemoryStore {
    partitions: Mutex<BTreeMap<String, Vec<LocationEvent>>>,
    days: Mutex<Vec<(NaiveDate, Vec<i64>)>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate rows rendered the way the text file holds them.
    pub fn aggregate_lines(&self) -> Vec<String> {
        lock(&self.days)
            .iter()
            .map(|(date, totals)| {
                let mut line = date.format("%Y%m%d").to_string();
                for t in totals {
                    line.push_str(&format!(",{t}"));
                }
                line
            })
            .collect()
    }
}

impl EventLog for MemoryStore {
    fn append_event(&self, event: &LocationEvent) -> AppResult<()> {
        lock(&self.partitions)
            .entry(event.partition_key())
            .or_default()
            .push(event.clone());
        Ok(())
    }

    fn read_last_event(&self, for_timestamp: NaiveDateTime) -> AppResult<Tail<LocationEvent>> {
        let partitions = lock(&self.partitions);
        Ok(match partitions.get(&partition_key(&for_timestamp)) {
            None => Tail::Missing,
            Some(events) => events.last().cloned().map_or(Tail::Empty, Tail::Found),
        })
    }
}

impl AggregateLog for MemoryStore {
    fn last_day(&self) -> AppResult<AggregateTail> {
        let days = lock(&self.days);
        Ok(match days.last() {
            None => AggregateTail::Missing,
            Some((date, totals)) => match totals.last() {
                Some(total) => AggregateTail::Found(DailyAggregate::new(*date, *total)),
                None => AggregateTail::Empty,
            },
        })
    }

    fn append_day(&self, row: &DailyAggregate) -> AppResult<()> {
        lock(&self.days).push((row.date, vec![row.minutes_outside]));
        Ok(())
    }

    fn merge_last_day(&self, row: &DailyAggregate) -> AppResult<()> {
        let mut days = lock(&self.days);
        match days.last_mut() {
            Some((_, totals)) => totals.push(row.minutes_outside),
            None => days.push((row.date, vec![row.minutes_outside])),
        }
        Ok(())
    }
}

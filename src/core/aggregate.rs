//! Folding a finished OUT interval into the per-day running total.

use crate::errors::AppResult;
use crate::models::DailyAggregate;
use crate::storage::{AggregateLog, AggregateTail};
use chrono::NaiveDateTime;

/// Add `minutes` to the total of `timestamp`'s day.
///
/// Only the trailing row is considered: if it belongs to the same day the
/// new total is merged onto it, otherwise a new row is started. A missing,
/// blank or unreadable trailing row counts as "no previous day".
pub fn update_aggregate(
    store: &dyn AggregateLog,
    timestamp: NaiveDateTime,
    minutes: i64,
) -> AppResult<DailyAggregate> {
    let date = timestamp.date();
    let minutes = minutes.max(0);

    let previous = match store.last_day()? {
        AggregateTail::Found(row) => Some(row),
        AggregateTail::Missing | AggregateTail::Empty => None,
        AggregateTail::Corrupt(line) => {
            log::warn!("ignoring unreadable aggregate row {:?}", line);
            None
        }
    };

    match previous {
        Some(prev) if prev.date == date => {
            let row = DailyAggregate::new(date, prev.minutes_outside + minutes);
            store.merge_last_day(&row)?;
            log::debug!(
                "aggregate {} merged to {}",
                row.date_key(),
                row.minutes_outside
            );
            Ok(row)
        }
        _ => {
            let row = DailyAggregate::new(date, minutes);
            store.append_day(&row)?;
            log::debug!(
                "aggregate {} started at {}",
                row.date_key(),
                row.minutes_outside
            );
            Ok(row)
        }
    }
}

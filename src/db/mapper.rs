//! Row-to-domain mapping.
//!
//! Pure transformations from raw stored rows into the domain entities of
//! [`crate::libs`]. The storage layer writes timestamps as integer epoch
//! milliseconds, but the mapper also accepts RFC 3339 text values so that
//! rows written by other tools still normalize to the same instant. A value
//! that is neither shape surfaces as a conversion error.

use crate::libs::category::{Category, CategoryRef};
use crate::libs::task::{Priority, Task, TaskStatus};
use chrono::{DateTime, Utc};
use rusqlite::types::{Type, ValueRef};
use rusqlite::Row;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("timestamp is neither an integer epoch nor a date string")]
    UnsupportedType,
    #[error("integer timestamp {0} is out of range")]
    OutOfRange(i64),
    #[error("cannot parse '{0}' as an RFC 3339 date")]
    Unparsable(String),
}

/// Millisecond epoch value stored for a timestamp column.
pub(crate) fn to_epoch_ms(ts: DateTime<Utc>) -> i64 {
    ts.timestamp_millis()
}

fn conversion_failure(idx: usize, err: TimestampError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

fn normalize_timestamp(idx: usize, value: ValueRef<'_>) -> rusqlite::Result<DateTime<Utc>> {
    match value {
        ValueRef::Integer(ms) => DateTime::from_timestamp_millis(ms).ok_or_else(|| conversion_failure(idx, TimestampError::OutOfRange(ms))),
        ValueRef::Text(bytes) => {
            let raw = String::from_utf8_lossy(bytes);
            DateTime::parse_from_rfc3339(&raw)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|_| conversion_failure(idx, TimestampError::Unparsable(raw.into_owned())))
        }
        _ => Err(conversion_failure(idx, TimestampError::UnsupportedType)),
    }
}

/// Reads a required timestamp column.
pub(crate) fn timestamp_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    normalize_timestamp(idx, row.get_ref(idx)?)
}

/// Reads a nullable timestamp column.
pub(crate) fn opt_timestamp_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<DateTime<Utc>>> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(None),
        value => normalize_timestamp(idx, value).map(Some),
    }
}

fn status_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<TaskStatus> {
    let raw: String = row.get(idx)?;
    raw.parse().map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn priority_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Priority> {
    let raw: String = row.get(idx)?;
    raw.parse().map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Maps a category row with its aggregated task count.
///
/// Expected columns: id, name, color, created_at, updated_at, task_count.
pub(crate) fn map_category_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        color: row.get(2)?,
        created_at: timestamp_at(row, 3)?,
        updated_at: timestamp_at(row, 4)?,
        task_count: row.get(5)?,
    })
}

/// Maps a task row left-joined with its category.
///
/// Expected columns: id, title, description, status, priority, due_date,
/// position, completed_at, created_at, updated_at, then the joined
/// category's id, name and color (all NULL when the task is standalone).
pub(crate) fn map_task_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    let category = match row.get::<_, Option<String>>(10)? {
        Some(id) => Some(CategoryRef {
            id,
            name: row.get(11)?,
            color: row.get(12)?,
        }),
        None => None,
    };

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status: status_at(row, 3)?,
        priority: priority_at(row, 4)?,
        due_date: opt_timestamp_at(row, 5)?,
        position: row.get(6)?,
        completed_at: opt_timestamp_at(row, 7)?,
        created_at: timestamp_at(row, 8)?,
        updated_at: timestamp_at(row, 9)?,
        category,
    })
}

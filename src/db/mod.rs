pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod profiles;
pub mod sessions;
pub mod stats;

use crate::errors::AppError;
use crate::utils::time::from_db;
use chrono::NaiveDateTime;
use rusqlite::Row;

/// Read a NOT NULL timestamp column.
pub(crate) fn get_ts(row: &Row, col: &str) -> rusqlite::Result<NaiveDateTime> {
    let raw: String = row.get(col)?;
    parse_ts(row, col, raw)
}

/// Read a nullable timestamp column.
pub(crate) fn get_opt_ts(row: &Row, col: &str) -> rusqlite::Result<Option<NaiveDateTime>> {
    let raw: Option<String> = row.get(col)?;
    raw.map(|r| parse_ts(row, col, r)).transpose()
}

fn parse_ts(row: &Row, col: &str, raw: String) -> rusqlite::Result<NaiveDateTime> {
    from_db(&raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            row.as_ref().column_index(col).unwrap_or(0),
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw)),
        )
    })
}

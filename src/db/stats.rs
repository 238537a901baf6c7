use crate::db::migrate::current_version;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::OptionalExtension;
use std::fs;

/// Summary of a store for `db --info`.
#[derive(Debug, Clone)]
pub struct DbInfo {
    pub path: String,
    pub size_bytes: u64,
    pub schema_version: i64,
    pub profiles: i64,
    pub sessions: i64,
    pub open_sessions: i64,
    pub first_start: Option<String>,
    pub last_start: Option<String>,
}

pub fn collect_info(pool: &DbPool) -> AppResult<DbInfo> {
    let conn = &pool.conn;
    let count = |sql: &str| -> rusqlite::Result<i64> { conn.query_row(sql, [], |row| row.get(0)) };

    let first_start: Option<String> = conn
        .query_row("SELECT MIN(start) FROM session", [], |row| row.get(0))
        .optional()?
        .flatten();
    let last_start: Option<String> = conn
        .query_row("SELECT MAX(start) FROM session", [], |row| row.get(0))
        .optional()?
        .flatten();

    Ok(DbInfo {
        path: pool.path.to_string_lossy().to_string(),
        size_bytes: fs::metadata(&pool.path).map(|m| m.len()).unwrap_or(0),
        schema_version: current_version(conn)?,
        profiles: count("SELECT COUNT(*) FROM profile")?,
        sessions: count("SELECT COUNT(*) FROM session")?,
        open_sessions: count("SELECT COUNT(*) FROM session WHERE stop IS NULL")?,
        first_start,
        last_start,
    })
}

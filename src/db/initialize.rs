use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

/// Bring an open connection to the current schema.
/// All schema creation and upgrades go through the migration engine.
pub fn init_db(conn: &mut Connection) -> AppResult<Vec<i64>> {
    run_pending_migrations(conn)
}

/// Create the data directory if needed, open (or create) the store at
/// `path`, and apply every pending migration before any query runs.
pub fn ensure_schema(path: &Path) -> AppResult<DbPool> {
    let mut pool = DbPool::open(path)?;
    init_db(&mut pool.conn)?;
    Ok(pool)
}

//! Versioned schema migrations.
//!
//! Every migration runs in its own IMMEDIATE transaction together with the
//! `schema_migrations` row that records it, so a failure leaves the store
//! exactly as it was before that migration started.

use crate::db::log::try_log;
use crate::errors::{AppError, AppResult};
use crate::utils::time::{now, to_db};
use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};

pub struct Migration {
    pub version: i64,
    pub name: &'static str,
    pub sql: &'static str,
}

/// All migrations, strictly increasing by version.
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_profile",
        sql: r#"
        CREATE TABLE profile (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            slug        TEXT NOT NULL UNIQUE CHECK (length(slug) > 0),
            description TEXT,
            created_at  TEXT NOT NULL DEFAULT (datetime('now', 'localtime')),
            updated_at  TEXT NOT NULL DEFAULT (datetime('now', 'localtime'))
        );

        CREATE TRIGGER profile_touch_updated_at
        AFTER UPDATE OF slug, description ON profile
        BEGIN
            UPDATE profile SET updated_at = datetime('now', 'localtime') WHERE id = NEW.id;
        END;
        "#,
    },
    Migration {
        version: 2,
        name: "create_session",
        sql: r#"
        CREATE TABLE session (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            start      TEXT NOT NULL,
            stop       TEXT,
            note       TEXT,
            profile_id INTEGER NOT NULL REFERENCES profile(id)
        );

        CREATE INDEX idx_session_profile_start ON session(profile_id, start);
        "#,
    },
    Migration {
        version: 3,
        name: "seed_default_profile",
        sql: r#"
        INSERT OR IGNORE INTO profile (slug, description)
        VALUES ('default', 'Default profile');
        "#,
    },
    Migration {
        version: 4,
        name: "create_log",
        sql: r#"
        CREATE TABLE log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    },
];

/// Latest version this build knows about.
pub fn latest_version() -> i64 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

fn ensure_migrations_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version    INTEGER PRIMARY KEY,
            name       TEXT NOT NULL,
            applied_at TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: i64) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT 1 FROM schema_migrations WHERE version = ?1",
        [version],
        |_| Ok(()),
    )
    .optional()
    .map(|r| r.is_some())
}

/// Highest applied version, 0 on a fresh store.
pub fn current_version(conn: &Connection) -> AppResult<i64> {
    ensure_migrations_table(conn)?;
    let v: i64 = conn.query_row(
        "SELECT IFNULL(MAX(version), 0) FROM schema_migrations",
        [],
        |row| row.get(0),
    )?;
    Ok(v)
}

/// Migrations not yet recorded as applied, in version order.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static Migration>> {
    ensure_migrations_table(conn)?;
    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m);
        }
    }
    Ok(out)
}

fn apply(conn: &mut Connection, m: &Migration) -> rusqlite::Result<bool> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    // Another invocation may have applied it while we waited for the lock.
    if is_applied(&tx, m.version)? {
        return Ok(false);
    }

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO schema_migrations (version, name, applied_at) VALUES (?1, ?2, ?3)",
        params![m.version, m.name, to_db(&now())],
    )?;
    tx.commit()?;
    Ok(true)
}

/// Public entry point: run all pending migrations.
///
/// Returns the versions applied by this call; an empty list means the store
/// was already current.
pub fn run_pending_migrations(conn: &mut Connection) -> AppResult<Vec<i64>> {
    ensure_migrations_table(conn)?;

    let mut applied = Vec::new();
    for m in pending_migrations(conn)? {
        let done = apply(conn, m).map_err(|e| {
            AppError::Migration(format!("{}_{}: {}", m.version, m.name, e))
        })?;
        if done {
            applied.push(m.version);
        }
    }

    for version in &applied {
        if let Some(m) = MIGRATIONS.iter().find(|m| m.version == *version) {
            try_log(
                conn,
                "migration_applied",
                &format!("{}_{}", m.version, m.name),
                "Schema migration applied",
            );
        }
    }

    Ok(applied)
}

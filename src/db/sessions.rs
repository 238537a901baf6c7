//! Session store: open, close, delete and list sessions of a profile.
//!
//! The store does not enforce "one open session per profile" on its own:
//! `start_session` inserts unconditionally. Callers check `get_open_session`
//! first; `core::punch::punch_in` does both inside one IMMEDIATE transaction.

use crate::db::profiles::profile_id;
use crate::db::{get_opt_ts, get_ts};
use crate::errors::{AppError, AppResult};
use crate::models::session::{OpenSession, Session, SessionRange};
use crate::utils::time::{now, to_db};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Row, params};

pub fn map_row(row: &Row) -> rusqlite::Result<Session> {
    Ok(Session {
        id: row.get("id")?,
        start: get_ts(row, "start")?,
        stop: get_opt_ts(row, "stop")?,
        note: row.get("note")?,
        profile_id: row.get("profile_id")?,
    })
}

/// The open session of `profile_slug`, if any.
///
/// An unknown slug simply has no open session.
pub fn get_open_session(conn: &Connection, profile_slug: &str) -> AppResult<OpenSession> {
    let found = conn
        .query_row(
            "SELECT s.id, s.start, s.stop, s.note, s.profile_id
             FROM session s
             INNER JOIN profile p ON s.profile_id = p.id
             WHERE s.stop IS NULL AND p.slug = ?1
             ORDER BY s.id ASC
             LIMIT 1",
            [profile_slug],
            map_row,
        )
        .optional()?;

    Ok(match found {
        Some(s) => OpenSession::Found(s),
        None => OpenSession::NotOpen,
    })
}

pub fn get_session(conn: &Connection, id: i64) -> AppResult<Option<Session>> {
    let s = conn
        .query_row(
            "SELECT id, start, stop, note, profile_id FROM session WHERE id = ?1",
            [id],
            map_row,
        )
        .optional()?;
    Ok(s)
}

/// Open a new session for `profile_slug` starting now. Returns the new id.
pub fn start_session(conn: &Connection, profile_slug: &str) -> AppResult<i64> {
    start_session_at(conn, profile_slug, now())
}

pub fn start_session_at(
    conn: &Connection,
    profile_slug: &str,
    start: NaiveDateTime,
) -> AppResult<i64> {
    let pid = profile_id(conn, profile_slug)?;
    conn.execute(
        "INSERT INTO session (start, profile_id) VALUES (?1, ?2)",
        params![to_db(&start), pid],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Close `session` now, writing its note (None leaves the note unset).
pub fn end_session(conn: &Connection, session: &Session) -> AppResult<()> {
    end_session_at(conn, session, now())
}

/// Close `session` at `stop`. Only an open row is updated; a row that was
/// deleted, never existed or is already closed yields `SessionNotFound`.
pub fn end_session_at(conn: &Connection, session: &Session, stop: NaiveDateTime) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE session SET stop = ?1, note = ?2 WHERE id = ?3 AND stop IS NULL",
        params![to_db(&stop), session.note, session.id],
    )?;
    if n == 0 {
        return Err(AppError::SessionNotFound(session.id));
    }
    Ok(())
}

pub fn delete_session(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM session WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::SessionNotFound(id));
    }
    Ok(())
}

/// Sessions of `profile_slug` whose start lies in `[range.since, range.before]`,
/// ordered by id ascending. No match is an empty list, not an error.
pub fn list_sessions(
    conn: &Connection,
    profile_slug: &str,
    range: &SessionRange,
) -> AppResult<Vec<Session>> {
    let mut stmt = conn.prepare(
        "SELECT s.id, s.start, s.stop, s.note, s.profile_id
         FROM session s
         INNER JOIN profile p ON s.profile_id = p.id
         WHERE p.slug = ?1 AND s.start BETWEEN ?2 AND ?3
         ORDER BY s.id ASC",
    )?;

    let rows = stmt.query_map(
        params![profile_slug, to_db(&range.since), to_db(&range.before)],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

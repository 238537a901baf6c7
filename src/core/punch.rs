//! Punch in / punch out: the command-level guard around the session store.

use crate::db::log::try_log;
use crate::db::sessions::{
    delete_session, end_session_at, get_open_session, get_session, start_session_at,
};
use crate::errors::{AppError, AppResult};
use crate::models::session::{OpenSession, Session};
use crate::utils::time::now;
use chrono::NaiveDateTime;
use rusqlite::{Connection, TransactionBehavior};

/// What `punch_out` did with the open session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PunchOut {
    Closed(Session),
    Deleted(Session),
}

pub struct PunchLogic;

impl PunchLogic {
    /// Open a session for `profile_slug` unless one is already open.
    ///
    /// The open-session check and the insert share one IMMEDIATE transaction,
    /// so two concurrent invocations cannot both pass the check.
    pub fn punch_in(conn: &mut Connection, profile_slug: &str) -> AppResult<Session> {
        Self::punch_in_at(conn, profile_slug, now())
    }

    pub fn punch_in_at(
        conn: &mut Connection,
        profile_slug: &str,
        at: NaiveDateTime,
    ) -> AppResult<Session> {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        if let OpenSession::Found(_) = get_open_session(&tx, profile_slug)? {
            return Err(AppError::SessionAlreadyOpen(profile_slug.to_string()));
        }

        let id = start_session_at(&tx, profile_slug, at)?;
        let session = get_session(&tx, id)?.ok_or(AppError::SessionNotFound(id))?;
        tx.commit()?;

        try_log(conn, "punch_in", profile_slug, &format!("Started session {}", id));
        Ok(session)
    }

    /// Close the open session of `profile_slug` with `note`, or delete it
    /// when `delete` is set. No open session is `NoOpenSession`.
    pub fn punch_out(
        conn: &Connection,
        profile_slug: &str,
        note: Option<String>,
        delete: bool,
    ) -> AppResult<PunchOut> {
        Self::punch_out_at(conn, profile_slug, note, delete, now())
    }

    pub fn punch_out_at(
        conn: &Connection,
        profile_slug: &str,
        note: Option<String>,
        delete: bool,
        at: NaiveDateTime,
    ) -> AppResult<PunchOut> {
        let current = get_open_session(conn, profile_slug)?.require(profile_slug)?;

        if delete {
            delete_session(conn, current.id)?;
            try_log(
                conn,
                "session_delete",
                profile_slug,
                &format!("Deleted open session {}", current.id),
            );
            return Ok(PunchOut::Deleted(current));
        }

        let mut session = current.with_note(note);
        end_session_at(conn, &session, at)?;
        session.stop = Some(at);

        try_log(
            conn,
            "punch_out",
            profile_slug,
            &format!("Ended session {}", session.id),
        );
        Ok(PunchOut::Closed(session))
    }

    /// Delete any session by id, open or closed.
    pub fn delete(conn: &Connection, id: i64) -> AppResult<()> {
        delete_session(conn, id)?;
        try_log(conn, "session_delete", &id.to_string(), "Deleted session");
        Ok(())
    }
}

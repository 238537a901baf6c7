//! Session model and the types the session store hands back.

use crate::errors::{AppError, AppResult};
use crate::utils::time::{max_timestamp, min_timestamp};
use chrono::NaiveDateTime;
use serde::Serialize;

/// One interval of tracked work.
///
/// `stop == None` means the session is open. `note` can only be written by
/// closing the session; once `stop` is set the row is never updated again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub id: i64,
    pub start: NaiveDateTime,
    pub stop: Option<NaiveDateTime>,
    pub note: Option<String>,
    pub profile_id: i64,
}

impl Session {
    pub fn is_open(&self) -> bool {
        self.stop.is_none()
    }

    /// Elapsed seconds; open sessions are measured up to `now`.
    pub fn elapsed_secs(&self, now: NaiveDateTime) -> i64 {
        (self.stop.unwrap_or(now) - self.start).num_seconds()
    }

    /// Attach a note to be written when the session is closed.
    /// An empty string leaves the note unset.
    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note.filter(|n| !n.is_empty());
        self
    }
}

/// Outcome of looking up the open session of a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenSession {
    Found(Session),
    NotOpen,
}

impl OpenSession {
    pub fn is_open(&self) -> bool {
        matches!(self, OpenSession::Found(_))
    }

    /// Turn "nothing open" into `AppError::NoOpenSession` for callers
    /// where absence is a failure (punch out, status).
    pub fn require(self, profile_slug: &str) -> AppResult<Session> {
        match self {
            OpenSession::Found(s) => Ok(s),
            OpenSession::NotOpen => Err(AppError::NoOpenSession(profile_slug.to_string())),
        }
    }

    pub fn into_option(self) -> Option<Session> {
        match self {
            OpenSession::Found(s) => Some(s),
            OpenSession::NotOpen => None,
        }
    }
}

/// Inclusive `[since, before]` filter on session start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRange {
    pub since: NaiveDateTime,
    pub before: NaiveDateTime,
}

impl Default for SessionRange {
    fn default() -> Self {
        Self {
            since: min_timestamp(),
            before: max_timestamp(),
        }
    }
}

impl SessionRange {
    /// Build a range, filling missing bounds with the all-time sentinels.
    pub fn new(since: Option<NaiveDateTime>, before: Option<NaiveDateTime>) -> AppResult<Self> {
        let range = Self {
            since: since.unwrap_or_else(min_timestamp),
            before: before.unwrap_or_else(max_timestamp),
        };
        if range.since > range.before {
            return Err(AppError::InvalidRange {
                since: range.since.to_string(),
                before: range.before.to_string(),
            });
        }
        Ok(range)
    }

    pub fn contains(&self, ts: &NaiveDateTime) -> bool {
        self.since <= *ts && *ts <= self.before
    }
}

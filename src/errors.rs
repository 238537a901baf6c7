//! Unified application error type.
//! Stores, core logic and CLI handlers all return AppError so the command
//! layer can branch on the kinds it cares about and print the rest.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Profiles
    // ---------------------------
    #[error("Invalid profile slug: {0:?}")]
    InvalidSlug(String),

    #[error("Profile '{0}' already exists")]
    DuplicateSlug(String),

    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    // ---------------------------
    // Sessions
    // ---------------------------
    #[error("No open session for profile '{0}'")]
    NoOpenSession(String),

    #[error("Session already open for profile '{0}', cannot punch in")]
    SessionAlreadyOpen(String),

    #[error("Session {0} does not exist")]
    SessionNotFound(i64),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {since} is after {before}")]
    InvalidRange { since: String, before: String },

    // ---------------------------
    // Config / output
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// True for the "nothing to punch out" signal, as opposed to a broken store.
    pub fn is_no_open_session(&self) -> bool {
        matches!(self, AppError::NoOpenSession(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;

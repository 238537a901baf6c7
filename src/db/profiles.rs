//! Profile store: list and create named profiles.

use crate::db::get_ts;
use crate::errors::{AppError, AppResult};
use crate::models::profile::Profile;
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_PROFILE: &str =
    "SELECT id, slug, description, created_at, updated_at FROM profile";

pub fn map_row(row: &Row) -> rusqlite::Result<Profile> {
    Ok(Profile {
        id: row.get("id")?,
        slug: row.get("slug")?,
        description: row.get("description")?,
        created_at: get_ts(row, "created_at")?,
        updated_at: get_ts(row, "updated_at")?,
    })
}

/// All profiles, ordered by id ascending.
pub fn list_profiles(conn: &Connection) -> AppResult<Vec<Profile>> {
    let mut stmt = conn.prepare(&format!("{SELECT_PROFILE} ORDER BY id ASC"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_profile(conn: &Connection, slug: &str) -> AppResult<Option<Profile>> {
    let p = conn
        .query_row(&format!("{SELECT_PROFILE} WHERE slug = ?1"), [slug], map_row)
        .optional()?;
    Ok(p)
}

/// Resolve a slug to its id, or `UnknownProfile`.
pub fn profile_id(conn: &Connection, slug: &str) -> AppResult<i64> {
    conn.query_row("SELECT id FROM profile WHERE slug = ?1", [slug], |row| {
        row.get(0)
    })
    .optional()?
    .ok_or_else(|| AppError::UnknownProfile(slug.to_string()))
}

/// Slugs are non-empty and contain no whitespace.
pub fn validate_slug(slug: &str) -> AppResult<&str> {
    let trimmed = slug.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return Err(AppError::InvalidSlug(slug.to_string()));
    }
    Ok(trimmed)
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

/// Insert a new profile. A slug already in use surfaces as `DuplicateSlug`.
pub fn create_profile(
    conn: &Connection,
    slug: &str,
    description: Option<&str>,
) -> AppResult<Profile> {
    let slug = validate_slug(slug)?;
    let description = description.map(str::trim).filter(|d| !d.is_empty());

    conn.execute(
        "INSERT INTO profile (slug, description) VALUES (?1, ?2)",
        params![slug, description],
    )
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::DuplicateSlug(slug.to_string())
        } else {
            AppError::Db(e)
        }
    })?;

    let id = conn.last_insert_rowid();
    let p = conn.query_row(&format!("{SELECT_PROFILE} WHERE id = ?1"), [id], map_row)?;
    Ok(p)
}

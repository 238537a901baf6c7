//! Date utilities for the CLI: parse `--since` / `--before` values and
//! compute day bounds.

use crate::errors::{AppError, AppResult};
use crate::utils::time::DB_FORMAT;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a range bound: either `YYYY-MM-DD` (midnight) or a full
/// `YYYY-MM-DD HH:MM:SS` timestamp.
pub fn parse_bound(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();
    if let Ok(ts) = NaiveDateTime::parse_from_str(s, DB_FORMAT) {
        return Ok(ts);
    }
    parse_date(s)
        .map(|d| d.and_time(NaiveTime::MIN))
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// First and last second of the given day, both inclusive.
pub fn day_bounds(d: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = d.and_time(NaiveTime::MIN);
    let end = d
        .and_hms_opt(23, 59, 59)
        .unwrap_or(start);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_accepts_date_and_timestamp() {
        assert_eq!(
            parse_bound("2024-05-01").unwrap().to_string(),
            "2024-05-01 00:00:00"
        );
        assert_eq!(
            parse_bound("2024-05-01 13:14:15").unwrap().to_string(),
            "2024-05-01 13:14:15"
        );
    }

    #[test]
    fn bound_rejects_garbage() {
        assert!(matches!(
            parse_bound("yesterday"),
            Err(AppError::InvalidDate(_))
        ));
    }

    #[test]
    fn day_bounds_cover_whole_day() {
        let (s, e) = day_bounds(parse_date("2024-02-29").unwrap());
        assert_eq!(s.to_string(), "2024-02-29 00:00:00");
        assert_eq!(e.to_string(), "2024-02-29 23:59:59");
    }
}

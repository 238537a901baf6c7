//! Time utilities: the on-disk timestamp format, "now", and the open-ended
//! range sentinels used when listing sessions.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Fixed-width text format used for every timestamp in the store.
/// Lexicographic order of this format equals chronological order.
pub const DB_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local wall-clock time, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let t = Local::now().naive_local();
    t.with_nanosecond(0).unwrap_or(t)
}

pub fn to_db(ts: &NaiveDateTime) -> String {
    ts.format(DB_FORMAT).to_string()
}

pub fn from_db(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DB_FORMAT).ok()
}

/// Lower bound covering all time: 0001-01-01 00:00:00.
pub fn min_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .unwrap_or(NaiveDate::MIN)
        .and_time(NaiveTime::MIN)
}

/// Far-future upper bound: 9999-12-31 23:59:59.
pub fn max_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(9999, 12, 31)
        .unwrap_or(NaiveDate::MAX)
        .and_hms_opt(23, 59, 59)
        .unwrap_or(NaiveDateTime::MAX)
}

/// Human readable "HH:MM:SS" for a duration in seconds.
pub fn format_seconds(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    format!("{}{:02}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}

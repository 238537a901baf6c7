pub mod config;
pub mod db;
pub mod delete;
pub mod init;
pub mod list;
pub mod log;
pub mod profiles;
pub mod punch;

use crate::errors::AppResult;
use serde::Serialize;

/// Print `value` as JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> AppResult<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

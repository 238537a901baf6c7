use crate::cli::commands::print_json;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::{PunchLogic, PunchOut};
use crate::db::initialize::ensure_schema;
use crate::db::sessions::get_open_session;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::time::{format_seconds, now};

/// Handle `in`, `out` and `status`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::In { profile } => {
            let slug = cfg.profile_or_default(profile);
            let mut pool = ensure_schema(&cfg.database_path())?;

            PunchLogic::punch_in(&mut pool.conn, slug)?;
            success("Started session");
        }

        Commands::Out {
            profile,
            note,
            delete,
        } => {
            let slug = cfg.profile_or_default(profile);
            let pool = ensure_schema(&cfg.database_path())?;

            match PunchLogic::punch_out(&pool.conn, slug, note.clone(), *delete)? {
                PunchOut::Closed(s) => success(format!(
                    "Session ended ({})",
                    format_seconds(s.elapsed_secs(now()))
                )),
                PunchOut::Deleted(s) => success(format!("Session {} deleted", s.id)),
            }
        }

        Commands::Status { profile } => {
            let slug = cfg.profile_or_default(profile);
            let pool = ensure_schema(&cfg.database_path())?;

            match get_open_session(&pool.conn, slug)?.into_option() {
                Some(s) => print_json(&s, false)?,
                None => info(format!("No open session for profile '{}'", slug)),
            }
        }

        _ => {}
    }

    Ok(())
}

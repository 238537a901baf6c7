use crate::cli::commands::print_json;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::ensure_schema;
use crate::db::sessions::list_sessions;
use crate::errors::AppResult;
use crate::models::session::SessionRange;
use crate::utils::date::{day_bounds, parse_bound, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        profile,
        since,
        before,
        today: only_today,
        pretty,
    } = cmd
    {
        let range = resolve_range(since, before, *only_today)?;
        let slug = cfg.profile_or_default(profile);
        let pool = ensure_schema(&cfg.database_path())?;

        let sessions = list_sessions(&pool.conn, slug, &range)?;
        print_json(&sessions, *pretty)?;
    }
    Ok(())
}

fn resolve_range(
    since: &Option<String>,
    before: &Option<String>,
    only_today: bool,
) -> AppResult<SessionRange> {
    if only_today {
        let (s, b) = day_bounds(today());
        return SessionRange::new(Some(s), Some(b));
    }

    let since = since.as_deref().map(parse_bound).transpose()?;
    let before = before.as_deref().map(parse_bound).transpose()?;
    SessionRange::new(since, before)
}

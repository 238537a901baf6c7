use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::db::initialize::ensure_schema;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Delete { id } = cmd {
        let pool = ensure_schema(&cfg.database_path())?;
        PunchLogic::delete(&pool.conn, *id)?;
        success(format!("Session {} deleted", id));
    }
    Ok(())
}

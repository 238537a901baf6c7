use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::ensure_schema;
use crate::db::log::try_log;
use crate::db::migrate::current_version;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes the configuration file (skipped in test mode) and creates or
/// migrates the store it points to.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if !cli.test {
        let path = Config::config_file();
        cfg.save_to(&path)?;
        info(format!("Config file : {}", path.display()));
    }

    let db_path = cfg.database_path();
    info(format!("Database    : {}", db_path.display()));

    let pool = ensure_schema(&db_path)?;
    let version = current_version(&pool.conn)?;

    try_log(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_path.display()),
    );

    success(format!("Store ready (schema version {})", version));
    Ok(())
}

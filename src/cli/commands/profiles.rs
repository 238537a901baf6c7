use crate::cli::commands::print_json;
use crate::cli::parser::{Commands, ProfileCommands};
use crate::config::Config;
use crate::db::initialize::ensure_schema;
use crate::db::log::try_log;
use crate::db::profiles::{create_profile, list_profiles};
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profiles { action } = cmd {
        let pool = ensure_schema(&cfg.database_path())?;

        match action {
            ProfileCommands::List { pretty } => {
                let profiles = list_profiles(&pool.conn)?;
                print_json(&profiles, *pretty)?;
            }
            ProfileCommands::Add { slug, description } => {
                let p = create_profile(&pool.conn, slug, description.as_deref())?;
                try_log(&pool.conn, "profile_add", &p.slug, "Profile added");
                success(format!("Profile '{}' added", p.slug));
            }
        }
    }
    Ok(())
}

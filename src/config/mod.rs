use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "punch";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_profile")]
    pub default_profile: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_profile() -> String {
    "default".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_profile: default_profile(),
        }
    }
}

impl Config {
    /// Platform config directory, e.g. `~/.config/punch`.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// User-scoped application data directory, e.g. `~/.local/share/punch`.
    pub fn data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punch.conf")
    }

    /// Return the default path of the SQLite store
    pub fn database_file() -> PathBuf {
        Self::data_dir().join("punch.db")
    }

    /// Load configuration from the standard location, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Resolved store path with `~` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Profile to use when the command line does not name one.
    pub fn profile_or_default<'a>(&'a self, requested: &'a Option<String>) -> &'a str {
        requested.as_deref().unwrap_or(&self.default_profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/x.db\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.db");
        assert_eq!(cfg.default_profile, "default");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("punch_missing_config_for_test.conf");
        fs::remove_file(&path).ok();
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.default_profile, "default");
        assert!(cfg.database.ends_with("punch.db"));
    }

    #[test]
    fn save_then_load() {
        let path = std::env::temp_dir().join("punch_config_save_test.conf");
        let cfg = Config {
            database: "/tmp/work.db".into(),
            default_profile: "work".into(),
        };
        cfg.save_to(&path).unwrap();
        let back = Config::load_from(&path).unwrap();
        assert_eq!(back.default_profile, "work");
        fs::remove_file(&path).ok();
    }
}

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database: String,
    /// Username allowed to edit and delete places.
    #[serde(default = "default_admin_user")]
    pub admin_user: String,
    /// Labels offered for "Jam Buka".
    #[serde(default = "default_hours_options")]
    pub hours_options: Vec<String>,
    /// Labels offered for "Harga", cheapest first.
    #[serde(default = "default_price_options")]
    pub price_options: Vec<String>,
    #[serde(default = "default_rating")]
    pub default_rating: f64,
}

fn default_admin_user() -> String {
    "nadjakencana".to_string()
}
fn default_hours_options() -> Vec<String> {
    vec!["24 Jam".to_string(), "Nggak 24 Jam".to_string()]
}
fn default_price_options() -> Vec<String> {
    vec![
        "Murah".to_string(),
        "Mending Mahal".to_string(),
        "Mahal".to_string(),
    ]
}
fn default_rating() -> f64 {
    4.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            admin_user: default_admin_user(),
            hours_options: default_hours_options(),
            price_options: default_price_options(),
            default_rating: default_rating(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.nongkrong`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".nongkrong")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("nongkrong.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("nongkrong.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Is `label` one of the configured opening-hours options?
    pub fn is_known_hours(&self, label: &str) -> bool {
        self.hours_options.iter().any(|h| h == label)
    }

    /// Is `label` one of the configured price tiers?
    pub fn is_known_price(&self, label: &str) -> bool {
        self.price_options.iter().any(|p| p == label)
    }

    /// Resolve a `--db` override. `~/` is expanded; any other relative path
    /// stays relative to the working directory, for every command.
    pub fn resolve_db_path(raw: &str) -> PathBuf {
        crate::utils::path::expand_tilde(raw)
    }

    /// Create the config directory, the config file (unless `is_test`) and
    /// the parent directory of the database. Returns the database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(raw) => Self::resolve_db_path(raw),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}

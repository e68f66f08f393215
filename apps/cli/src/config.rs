//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --api-url, --db-path                                               │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     ROCKET_API_URL=http://localhost:3333                               │
//! │     ROCKET_API_TIMEOUT=10                                              │
//! │     ROCKET_DB_PATH=/tmp/cart.db                                        │
//! │     ROCKET_STORAGE_KEY=@RocketShoes:cart                               │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/rocketshoes/config.toml (Linux)                          │
//! │     --config <path> to use another file                                │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [api]
//! base_url = "http://localhost:3333"
//! timeout_secs = 10
//!
//! [storage]
//! database_path = "/home/me/.local/share/rocketshoes/cart.db"
//! key = "@RocketShoes:cart"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use rocket_api::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use rocket_api::ApiConfig;
use rocket_core::CART_STORAGE_KEY;
use rocket_db::DbConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// File name of the SQLite database inside the data directory.
const DATABASE_FILE: &str = "cart.db";

// =============================================================================
// Sections
// =============================================================================

/// Storefront API settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Local storage settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// SQLite file. `None` means the platform data directory.
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Namespace the cart snapshot is stored under.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_key() -> String {
    CART_STORAGE_KEY.to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            database_path: None,
            key: default_storage_key(),
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub storage: StorageSettings,
}

impl AppConfig {
    /// Loads configuration from file and process environment.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        Self::load_with_env(config_path, |name| std::env::var(name).ok())
    }

    /// Loads configuration, reading environment variables through `env`.
    ///
    /// Validation is left to the caller so command-line flags can still be
    /// applied on top.
    pub fn load_with_env<F>(config_path: Option<PathBuf>, env: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides(env)?;
        Ok(config)
    }

    fn from_file(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    fn apply_env_overrides<F>(&mut self, env: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = env("ROCKET_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Some(timeout) = env("ROCKET_API_TIMEOUT") {
            self.api.timeout_secs = timeout.trim().parse().map_err(|_| {
                AppError::InvalidConfig(format!(
                    "ROCKET_API_TIMEOUT must be a whole number of seconds, got: {}",
                    timeout
                ))
            })?;
        }

        if let Some(path) = env("ROCKET_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.storage.database_path = Some(PathBuf::from(path));
        }

        if let Some(key) = env("ROCKET_STORAGE_KEY") {
            self.storage.key = key;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        let url = &self.api.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::InvalidConfig(format!(
                "API URL must start with http:// or https://, got: {}",
                url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        if self.storage.key.trim().is_empty() {
            return Err(AppError::InvalidConfig("storage key must not be empty".into()));
        }

        Ok(())
    }

    /// Platform config file location.
    pub fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Resolves the SQLite file path, falling back to the platform data
    /// directory.
    pub fn database_path(&self) -> AppResult<PathBuf> {
        match &self.storage.database_path {
            Some(path) => Ok(path.clone()),
            None => project_dirs()
                .map(|dirs| dirs.data_dir().join(DATABASE_FILE))
                .ok_or(AppError::NoDataDir),
        }
    }

    pub fn api_config(&self) -> AppResult<ApiConfig> {
        let config = ApiConfig::from_url_str(&self.api.base_url)?
            .timeout(Duration::from_secs(self.api.timeout_secs));
        Ok(config)
    }

    pub fn db_config(&self) -> AppResult<DbConfig> {
        Ok(DbConfig::new(self.database_path()?))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "rocketshoes", "rocketshoes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:3333");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.storage.key, "@RocketShoes:cart");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config = AppConfig::load_with_env(Some(path), env_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[api]\nbase_url = \"https://shop.example.com\"\n");

        let config = AppConfig::load_with_env(Some(path), env_from(&[])).unwrap();
        assert_eq!(config.api.base_url, "https://shop.example.com");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.storage.key, "@RocketShoes:cart");
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "[api]\nbase_url = \"https://shop.example.com\"\ntimeout_secs = 3\n",
        );
        let env = env_from(&[
            ("ROCKET_API_URL", "http://127.0.0.1:4000"),
            ("ROCKET_DB_PATH", "/tmp/other.db"),
            ("ROCKET_STORAGE_KEY", "@Test:cart"),
        ]);

        let config = AppConfig::load_with_env(Some(path), env).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:4000");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.database_path().unwrap(), PathBuf::from("/tmp/other.db"));
        assert_eq!(config.storage.key, "@Test:cart");
    }

    #[test]
    fn test_bad_timeout_env_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let env = env_from(&[("ROCKET_API_TIMEOUT", "soon")]);

        let result = AppConfig::load_with_env(Some(dir.path().join("none.toml")), env);
        assert!(matches!(result, Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[api\nbase_url = ");

        let result = AppConfig::load_with_env(Some(path), env_from(&[]));
        assert!(matches!(result, Err(AppError::ConfigParse(_))));
    }

    #[test]
    fn test_validation() {
        let mut config = AppConfig::default();
        config.api.base_url = "ftp://shop.example.com".into();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.storage.key = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_config_conversion() {
        let mut config = AppConfig::default();
        config.api.timeout_secs = 4;

        let api = config.api_config().unwrap();
        assert_eq!(api.base_url.as_str(), "http://localhost:3333/");
        assert_eq!(api.timeout, Duration::from_secs(4));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.storage.database_path = Some(PathBuf::from("/var/lib/rocketshoes/cart.db"));

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}

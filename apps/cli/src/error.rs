//! # CLI Error Types
//!
//! Startup failures. Cart operations never produce one of these; they report
//! through the notifier instead.

use rocket_api::ApiError;
use rocket_db::DbError;
use thiserror::Error;

/// Result type alias for CLI startup.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("No data directory available; set ROCKET_DB_PATH or --db-path")]
    NoDataDir,

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("HTTP client error: {0}")]
    Api(#[from] ApiError),
}

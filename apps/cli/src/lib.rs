//! # RocketShoes CLI Library
//!
//! Wiring for the `rocketshoes` command.
//!
//! ## Module Organization
//! ```text
//! rocket_cli/
//! ├── lib.rs          ◄─── You are here (logging, wiring, run)
//! ├── commands.rs     ◄─── Argument definitions, dispatch, cart rendering
//! ├── config.rs       ◄─── AppConfig (TOML + environment)
//! └── error.rs        ◄─── Startup errors
//! ```

pub mod commands;
pub mod config;
pub mod error;

use std::sync::Arc;

use rocket_api::HttpStorefrontClient;
use rocket_cart::{CartManager, CartServices};
use rocket_db::{Database, SqliteCartStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::{Cli, ConsoleNotifier};
use config::AppConfig;
use error::AppResult;

/// Runs one CLI invocation.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load config      file → environment → flags, then validate         │
/// │  2. Open database    create data dir, SQLite WAL, run migrations       │
/// │  3. Build client     reqwest with configured timeout                   │
/// │  4. Build manager    restores the persisted cart                       │
/// │  5. Execute command  rejected mutations print a warning                │
/// │  6. Print cart                                                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> AppResult<()> {
    let mut config = AppConfig::load(cli.config.clone())?;
    apply_cli_overrides(&mut config, &cli);
    config.validate()?;

    let db_path = config.database_path()?;
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    info!(?db_path, "Database path determined");

    let db = Database::new(config.db_config()?).await?;
    let client = Arc::new(HttpStorefrontClient::new(&config.api_config()?)?);
    info!(base_url = %client.base_url(), "Storefront client ready");

    let services = CartServices {
        catalog: client.clone(),
        stock: client,
        store: Arc::new(SqliteCartStore::new(&db, config.storage.key.clone())),
        notifier: Arc::new(ConsoleNotifier),
    };

    let mut manager = CartManager::new(services).await;
    commands::execute(&mut manager, &cli.command).await;
    print!("{}", commands::CartView(manager.cart()));

    db.close().await;
    Ok(())
}

/// Applies command-line flags, which win over file and environment.
fn apply_cli_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(path) = &cli.db_path {
        config.storage.database_path = Some(path.clone());
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=rocket=trace` - Show trace for rocket crates only
/// - Default: WARN, INFO for rocket crates
///
/// Logs go to stderr so the printed cart stays clean on stdout.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,rocket=info,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "rocketshoes",
            "--api-url",
            "https://shop.example.com",
            "--db-path",
            "/tmp/flag.db",
            "show",
        ]);
        let mut config = AppConfig::default();
        config.storage.database_path = Some(PathBuf::from("/tmp/file.db"));

        apply_cli_overrides(&mut config, &cli);

        assert_eq!(config.api.base_url, "https://shop.example.com");
        assert_eq!(config.database_path().unwrap(), PathBuf::from("/tmp/flag.db"));
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let cli = Cli::parse_from(["rocketshoes", "show"]);
        let mut config = AppConfig::default();

        apply_cli_overrides(&mut config, &cli);

        assert_eq!(config, AppConfig::default());
    }
}

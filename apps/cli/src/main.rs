//! # RocketShoes CLI Entry Point
//!
//! ```text
//! rocketshoes show
//! rocketshoes add <product-id>
//! rocketshoes update <product-id> <amount>
//! rocketshoes remove <product-id>
//! ```

use std::process::ExitCode;

use clap::Parser;
use rocket_cli::commands::Cli;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    rocket_cli::init_tracing();

    let cli = Cli::parse();
    match rocket_cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Startup failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

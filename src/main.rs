//! AynBeauty Server — beauty storefront and back office.
//!
//! Main entry point that loads configuration, prepares the database,
//! and starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use aynbeauty_core::config::AppConfig;
use aynbeauty_core::error::AppError;
use aynbeauty_database::connection::DatabasePool;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration for the current environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("AYNBEAUTY_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting AynBeauty v{}", env!("CARGO_PKG_VERSION"));

    let db = DatabasePool::connect(&config.database).await?;
    aynbeauty_database::migration::run_migrations(db.pool()).await?;

    let result = aynbeauty_api::run_server(config, db.pool().clone()).await;
    db.close().await;
    result
}

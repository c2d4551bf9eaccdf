//! services/storage/src/bin/migrate.rs
//!
//! Provisions the durable store: loads configuration, connects, and applies
//! the schema migrations.

use storage_lib::{adapters::db::PgTrackingStore, config::StoreConfig, error::StorageError};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), StorageError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = StoreConfig::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Connecting to the database...");

    // --- 2. Connect to Database & Run Migrations ---
    let store = PgTrackingStore::connect(&config).await?;
    info!("Running database migrations...");
    store.run_migrations().await?;
    info!("Database migrations complete.");

    Ok(())
}

//! services/storage/src/error.rs
//!
//! Defines the primary error type for the entire storage service.

use crate::config::ConfigError;
use habit_tracker_core::ports::TrackerError;

/// The primary error type for the `storage` service.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from the core tracker port.
    #[error("Tracker error: {0}")]
    Tracker(#[from] TrackerError),

    /// Represents an error from the underlying database library.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Represents an error while applying database migrations.
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

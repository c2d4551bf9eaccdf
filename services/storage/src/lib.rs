pub mod adapters;
pub mod config;
pub mod error;

pub use adapters::PgTrackingStore;
pub use config::{ConfigError, StoreConfig};
pub use error::StorageError;

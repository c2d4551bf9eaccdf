//! services/storage/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development. The loaded `StoreConfig` is an explicit
//! value threaded into the store adapter; nothing reads the environment after
//! startup.

use sqlx::postgres::PgConnectOptions;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds the five connection values the durable store needs, plus the log level.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub host: String,
    pub database: String,
    pub user: String,
    pub password: String,
    pub port: u16,
    pub log_level: Level,
}

impl StoreConfig {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup. Exists so
    /// tests can supply values without mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| -> Result<String, ConfigError> {
            lookup(name).ok_or_else(|| ConfigError::MissingVar(name.to_string()))
        };

        let host = require("POSTGRES_HOST")?;
        let database = require("POSTGRES_DB")?;
        let user = require("POSTGRES_USER")?;
        let password = require("POSTGRES_PASSWORD")?;
        let port_str = require("POSTGRES_PORT")?;
        let port = port_str.parse::<u16>().map_err(|_| {
            ConfigError::InvalidValue(
                "POSTGRES_PORT".to_string(),
                format!("'{}' is not a valid port number", port_str),
            )
        })?;

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            host,
            database,
            user,
            password,
            port,
            log_level,
        })
    }

    /// Builds the structured connection options the store adapter dials.
    ///
    /// The five values are passed as separate fields, never assembled into a
    /// URL, so secret material containing URL metacharacters (`/`, `?`, `#`,
    /// `%`, whitespace) cannot misparse.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

//! services/storage/src/adapters/db.rs
//!
//! This module contains the database adapter, which is the concrete implementation
//! of the `TrackingStore` port from the `core` crate. It handles all interactions
//! with the PostgreSQL database using `sqlx`.

use async_trait::async_trait;
use habit_tracker_core::domain::{NewRecord, NewTrackingType, TrackingType};
use habit_tracker_core::ports::{TrackerError, TrackerResult, TrackingStore};
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::info;

use crate::config::StoreConfig;
use crate::error::StorageError;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements the `TrackingStore` port.
///
/// Every port operation is a self-contained unit of work: it takes its own
/// pooled connection, runs one statement inside a transaction, and commits.
/// A transaction dropped on an error path rolls back, so the connection is
/// released on every exit.
#[derive(Clone)]
pub struct PgTrackingStore {
    pool: PgPool,
}

impl PgTrackingStore {
    /// Creates a new `PgTrackingStore` around an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens the connection pool from the supplied configuration.
    ///
    /// A single attempt, no retry or backoff. Any failure (auth, network,
    /// misconfiguration) surfaces as an error here; callers see later
    /// per-operation acquisition failures as `TrackerError::Store`.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(config.connect_options())
            .await?;
        info!(host = %config.host, database = %config.database, "connected to store");
        Ok(Self::new(pool))
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

fn store_err(e: sqlx::Error) -> TrackerError {
    TrackerError::Store(e.to_string())
}

//=========================================================================================
// "Impure" Database Record Structs
//=========================================================================================

#[derive(FromRow)]
struct TrackingTypeRow {
    id: i64,
    title: String,
    drop_down_fields: Json<Vec<String>>,
    include_notes: bool,
}

impl TrackingTypeRow {
    fn to_domain(self) -> TrackingType {
        TrackingType {
            id: self.id,
            title: self.title,
            options: self.drop_down_fields.0,
            notes_enabled: self.include_notes,
        }
    }
}

//=========================================================================================
// `TrackingStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl TrackingStore for PgTrackingStore {
    async fn insert_tracking_type(
        &self,
        definition: &NewTrackingType,
    ) -> TrackerResult<TrackingType> {
        let mut tx = self.pool.begin().await.map_err(store_err)?;
        let row: TrackingTypeRow = sqlx::query_as(
            "INSERT INTO habit_tracking_types (title, drop_down_fields, include_notes) \
             VALUES ($1, $2, $3) \
             RETURNING id, title, drop_down_fields, include_notes",
        )
        .bind(&definition.title)
        .bind(Json(&definition.options))
        .bind(definition.notes_enabled)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                TrackerError::DuplicateTitle(definition.title.clone())
            }
            _ => store_err(e),
        })?;
        tx.commit().await.map_err(store_err)?;
        Ok(row.to_domain())
    }

    async fn list_tracking_types(&self) -> TrackerResult<Vec<TrackingType>> {
        // Ordered by id so a map built by title is deterministically
        // last-write-wins for legacy duplicate titles.
        let rows: Vec<TrackingTypeRow> = sqlx::query_as(
            "SELECT id, title, drop_down_fields, include_notes \
             FROM habit_tracking_types \
             ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;
        Ok(rows.into_iter().map(|r| r.to_domain()).collect())
    }

    async fn upsert_record(&self, record: &NewRecord) -> TrackerResult<()> {
        // One conflict-aware statement: the (entry_date, entry_title) unique
        // constraint resolves racing writers in the store.
        let mut tx = self.pool.begin().await.map_err(store_err)?;
        sqlx::query(
            "INSERT INTO habit_tracking_fields (entry_date, entry_title, outcome_option, notes) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (entry_date, entry_title) \
             DO UPDATE SET outcome_option = EXCLUDED.outcome_option, notes = EXCLUDED.notes",
        )
        .bind(record.entry_date)
        .bind(&record.entry_title)
        .bind(&record.outcome_option)
        .bind(&record.notes)
        .execute(&mut *tx)
        .await
        .map_err(store_err)?;
        tx.commit().await.map_err(store_err)?;
        Ok(())
    }
}

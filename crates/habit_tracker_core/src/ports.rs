//! crates/habit_tracker_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like databases.

use async_trait::async_trait;

use crate::domain::{NewRecord, NewTrackingType, TrackingType};

//=========================================================================================
// Error and Result Types
//=========================================================================================

/// The error taxonomy shared by every tracker operation.
///
/// Both failure kinds come back as ordinary results: the core performs no
/// retries and no logging-as-recovery. It is the caller's job to inform the
/// user and allow re-submission.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// The caller supplied structurally invalid input. Raised before any
    /// store interaction; nothing is ever partially applied.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// A tracking type with this title already exists.
    #[error("A tracking type titled '{0}' already exists")]
    DuplicateTitle(String),

    /// The store connection could not be acquired, or a read/write failed
    /// after acquisition. The operation was aborted cleanly and any acquired
    /// connection released.
    #[error("Store error: {0}")]
    Store(String),
}

/// A convenience type alias for `Result<T, TrackerError>`.
pub type TrackerResult<T> = Result<T, TrackerError>;

//=========================================================================================
// Store Port (Trait)
//=========================================================================================

/// The durable-store boundary.
///
/// Implementations must make each operation a self-contained unit of work:
/// acquire whatever handle they need, write or read, and release the handle
/// on every exit path. `upsert_record` must be a single conflict-aware
/// write so two writers racing on the same (date, title) key resolve in the
/// store, never via an application-level check-then-write.
#[async_trait]
pub trait TrackingStore: Send + Sync {
    /// Inserts exactly one new tracking type and returns the stored form
    /// (with its assigned id).
    async fn insert_tracking_type(
        &self,
        definition: &NewTrackingType,
    ) -> TrackerResult<TrackingType>;

    /// Reads every tracking type, in insertion order.
    async fn list_tracking_types(&self) -> TrackerResult<Vec<TrackingType>>;

    /// Inserts a record for (`entry_date`, `entry_title`), or replaces the
    /// outcome and notes in place when one already exists for that key.
    async fn upsert_record(&self, record: &NewRecord) -> TrackerResult<()>;
}

//! crates/habit_tracker_core/src/registry.rs
//!
//! The Tracking-Type Registry: validates and persists habit category
//! definitions, and reads the current category set back as a map by title.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{NewTrackingType, TrackingType};
use crate::ports::{TrackerResult, TrackingStore};

/// Validates and persists habit category definitions.
#[derive(Clone)]
pub struct TrackingTypeRegistry {
    store: Arc<dyn TrackingStore>,
}

impl TrackingTypeRegistry {
    pub fn new(store: Arc<dyn TrackingStore>) -> Self {
        Self { store }
    }

    /// Creates a new tracking type.
    ///
    /// A validation failure never reaches the store. On success exactly one
    /// new row exists; on any failure, zero. A title collision surfaces as
    /// `TrackerError::DuplicateTitle`.
    pub async fn create(&self, definition: NewTrackingType) -> TrackerResult<TrackingType> {
        definition.validate()?;
        debug!(title = %definition.title, "creating tracking type");
        self.store.insert_tracking_type(&definition).await
    }

    /// Returns every tracking type, keyed by title.
    ///
    /// A store outage is surfaced as `Err`, never collapsed into an empty
    /// map. If legacy rows with duplicate titles exist, the later row wins.
    /// Map iteration order is not display order; consumers wanting a stable
    /// presentation must sort explicitly.
    pub async fn list_all(&self) -> TrackerResult<BTreeMap<String, TrackingType>> {
        let types = self.store.list_tracking_types().await?;
        debug!(count = types.len(), "listed tracking types");
        Ok(types
            .into_iter()
            .map(|t| (t.title.clone(), t))
            .collect())
    }
}

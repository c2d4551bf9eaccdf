//! crates/habit_tracker_core/src/ledger.rs
//!
//! The Record Ledger: validates and upserts one outcome record per
//! (calendar day, category title) pair.

use std::sync::Arc;

use tracing::debug;

use crate::domain::NewRecord;
use crate::ports::{TrackerResult, TrackingStore};

/// Validates and persists daily outcome records.
#[derive(Clone)]
pub struct RecordLedger {
    store: Arc<dyn TrackingStore>,
}

impl RecordLedger {
    pub fn new(store: Arc<dyn TrackingStore>) -> Self {
        Self { store }
    }

    /// Saves the outcome for a category on a day.
    ///
    /// A validation failure never reaches the store. On success exactly one
    /// row exists for (`entry_date`, `entry_title`); a prior row for that
    /// key has its outcome and notes replaced in place. Whether
    /// `entry_title` names an existing tracking type is not checked here.
    pub async fn upsert(&self, record: NewRecord) -> TrackerResult<()> {
        record.validate()?;
        debug!(
            entry_date = %record.entry_date,
            entry_title = %record.entry_title,
            "upserting record"
        );
        self.store.upsert_record(&record).await
    }
}

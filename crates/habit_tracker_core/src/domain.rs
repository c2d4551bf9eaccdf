//! crates/habit_tracker_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any database or serialization format.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ports::{TrackerError, TrackerResult};

/// A habit category as stored: the title is both the human-facing label and
/// the key that daily records reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingType {
    /// Surrogate key assigned by the store on creation, immutable thereafter.
    pub id: i64,
    pub title: String,
    /// Ordered labels for the selectable outcomes. May be empty.
    pub options: Vec<String>,
    pub notes_enabled: bool,
}

/// A request to create a new habit category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTrackingType {
    pub title: String,
    pub options: Vec<String>,
    pub notes_enabled: bool,
}

impl NewTrackingType {
    /// Checks the definition before any store interaction.
    pub fn validate(&self) -> TrackerResult<()> {
        if self.title.trim().is_empty() {
            return Err(TrackerError::Validation(
                "tracking type title must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// One outcome for a category on a calendar day, ready to be upserted.
///
/// The pair (`entry_date`, `entry_title`) is the natural key: at most one
/// record exists per category per day, and a later save for the same pair
/// replaces the outcome and notes in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    pub entry_date: NaiveDate,
    /// Title of the `TrackingType` this record belongs to.
    pub entry_title: String,
    pub outcome_option: String,
    /// Free-text notes. Always required, even for categories created with
    /// `notes_enabled = false`.
    pub notes: String,
}

impl NewRecord {
    /// Builds a record from boundary input, parsing the date as `%Y-%m-%d`.
    /// A string that is not a real calendar date is a validation failure,
    /// never a panic.
    pub fn from_parts(
        entry_date: &str,
        entry_title: &str,
        outcome_option: &str,
        notes: &str,
    ) -> TrackerResult<Self> {
        let entry_date = NaiveDate::parse_from_str(entry_date, "%Y-%m-%d").map_err(|e| {
            TrackerError::Validation(format!("'{}' is not a valid date: {}", entry_date, e))
        })?;
        Ok(Self {
            entry_date,
            entry_title: entry_title.to_string(),
            outcome_option: outcome_option.to_string(),
            notes: notes.to_string(),
        })
    }

    /// Checks the record before any store interaction.
    pub fn validate(&self) -> TrackerResult<()> {
        if self.entry_title.trim().is_empty() {
            return Err(TrackerError::Validation(
                "entry title must not be empty".to_string(),
            ));
        }
        if self.outcome_option.trim().is_empty() {
            return Err(TrackerError::Validation(
                "outcome option must not be empty".to_string(),
            ));
        }
        if self.notes.trim().is_empty() {
            return Err(TrackerError::Validation(
                "notes must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

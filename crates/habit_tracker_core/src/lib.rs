pub mod domain;
pub mod ledger;
pub mod ports;
pub mod registry;

pub use domain::{NewRecord, NewTrackingType, TrackingType};
pub use ledger::RecordLedger;
pub use ports::{TrackerError, TrackerResult, TrackingStore};
pub use registry::TrackingTypeRegistry;

pub mod db;

pub use db::PgTrackingStore;

use chrono::{DateTime, Utc};

pub mod hashmap_session_store;
pub mod sql_chirp_store;
pub mod sql_session_store;
pub mod sql_user_store;

pub use hashmap_session_store::*;
pub use sql_chirp_store::*;
pub use sql_session_store::*;
pub use sql_user_store::*;

// Timestamps are stored as epoch milliseconds so postgres and sqlite share one schema.
pub(crate) fn to_millis(at: DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

pub(crate) fn from_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

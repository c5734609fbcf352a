use chrono::{DateTime, Utc};

use super::{SessionRecord, SessionStoreError};
use crate::domain::SessionToken;

/// Persistence contract for session tokens.
///
/// Every mutation is one atomic operation on the backing store; callers never
/// read-modify-write a row. Implementations must not cache rows in process, so
/// a revocation is visible to the very next lookup.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert a new active row. A duplicate token is a `StoreError`.
    async fn create(&self, record: SessionRecord) -> Result<(), SessionStoreError>;

    async fn lookup(&self, token: &SessionToken) -> Result<SessionRecord, SessionStoreError>;

    /// Stamp `revoked_at` (and `updated_at`) with `now`. Revoking an already
    /// revoked token succeeds and overwrites the timestamp.
    async fn revoke(&self, token: &SessionToken, now: DateTime<Utc>)
        -> Result<(), SessionStoreError>;
}

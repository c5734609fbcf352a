use std::collections::{hash_map::Entry, HashMap};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::{SessionRecord, SessionStore, SessionStoreError, SessionToken};

/// In-process session store. Each operation holds the lock for exactly one
/// map access, so callers never observe a half-applied change.
#[derive(Default)]
pub struct HashmapSessionStore {
    sessions: RwLock<HashMap<SessionToken, SessionRecord>>,
}

#[async_trait::async_trait]
impl SessionStore for HashmapSessionStore {
    async fn create(&self, record: SessionRecord) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        match sessions.entry(record.token.clone()) {
            Entry::Occupied(_) => Err(SessionStoreError::StoreError(
                "duplicate session token".to_owned(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn lookup(&self, token: &SessionToken) -> Result<SessionRecord, SessionStoreError> {
        self.sessions
            .read()
            .await
            .get(token)
            .cloned()
            .ok_or(SessionStoreError::NotFound)
    }

    async fn revoke(
        &self,
        token: &SessionToken,
        now: DateTime<Utc>,
    ) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        let record = sessions.get_mut(token).ok_or(SessionStoreError::NotFound)?;
        record.revoked_at = Some(now);
        record.updated_at = now;
        Ok(())
    }
}

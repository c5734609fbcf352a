use chrono::{DateTime, Utc};
use sqlx::{AnyPool, FromRow};

use super::{from_millis, to_millis};
use crate::domain::{SessionRecord, SessionStore, SessionStoreError, SessionToken, UserId};

/// Session tokens in the `refresh_tokens` table. Every call is a single SQL
/// statement; nothing is cached between calls.
#[derive(Clone)]
pub struct SqlSessionStore {
    pool: AnyPool,
}

impl SqlSessionStore {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct SessionRow {
    token: String,
    user_id: String,
    created_at: i64,
    updated_at: i64,
    expires_at: i64,
    revoked_at: Option<i64>,
}

impl TryFrom<SessionRow> for SessionRecord {
    type Error = SessionStoreError;

    fn try_from(row: SessionRow) -> Result<Self, Self::Error> {
        let corrupt =
            |what: &str| SessionStoreError::StoreError(format!("corrupt session row: {what}"));

        let revoked_at = match row.revoked_at {
            Some(ms) => Some(from_millis(ms).ok_or_else(|| corrupt("revoked_at"))?),
            None => None,
        };

        Ok(SessionRecord {
            token: SessionToken::parse(row.token).map_err(|_| corrupt("token"))?,
            user_id: UserId::parse(&row.user_id).map_err(|_| corrupt("user_id"))?,
            created_at: from_millis(row.created_at).ok_or_else(|| corrupt("created_at"))?,
            updated_at: from_millis(row.updated_at).ok_or_else(|| corrupt("updated_at"))?,
            expires_at: from_millis(row.expires_at).ok_or_else(|| corrupt("expires_at"))?,
            revoked_at,
        })
    }
}

fn store_error(e: sqlx::Error) -> SessionStoreError {
    SessionStoreError::StoreError(e.to_string())
}

#[async_trait::async_trait]
impl SessionStore for SqlSessionStore {
    async fn create(&self, record: SessionRecord) -> Result<(), SessionStoreError> {
        // New rows are always active; revoked_at starts out NULL.
        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (token, user_id, created_at, updated_at, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(record.token.as_ref())
        .bind(record.user_id.to_string())
        .bind(to_millis(record.created_at))
        .bind(to_millis(record.updated_at))
        .bind(to_millis(record.expires_at))
        .execute(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(())
    }

    async fn lookup(&self, token: &SessionToken) -> Result<SessionRecord, SessionStoreError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT token, user_id, created_at, updated_at, expires_at, revoked_at
            FROM refresh_tokens WHERE token = $1
            "#,
        )
        .bind(token.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?
        .ok_or(SessionStoreError::NotFound)?;

        row.try_into()
    }

    async fn revoke(
        &self,
        token: &SessionToken,
        now: DateTime<Utc>,
    ) -> Result<(), SessionStoreError> {
        let now = to_millis(now);
        let result = sqlx::query(
            r#"
            UPDATE refresh_tokens SET revoked_at = $1, updated_at = $2
            WHERE token = $3
            "#,
        )
        .bind(now)
        .bind(now)
        .bind(token.as_ref())
        .execute(&self.pool)
        .await
        .map_err(store_error)?;

        match result.rows_affected() {
            0 => Err(SessionStoreError::NotFound),
            _ => Ok(()),
        }
    }
}

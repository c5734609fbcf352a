use chrono::Utc;
use sqlx::{AnyPool, FromRow};
use uuid::Uuid;

use super::{from_millis, to_millis};
use crate::domain::{Chirp, ChirpBody, ChirpStore, ChirpStoreError, UserId};

pub struct SqlChirpStore {
    pool: AnyPool,
}

impl SqlChirpStore {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ChirpRow {
    id: String,
    body: String,
    user_id: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ChirpRow> for Chirp {
    type Error = ChirpStoreError;

    fn try_from(row: ChirpRow) -> Result<Self, Self::Error> {
        let corrupt =
            |what: &str| ChirpStoreError::UnexpectedError(format!("corrupt chirp row: {what}"));

        Ok(Chirp {
            id: Uuid::parse_str(&row.id).map_err(|_| corrupt("id"))?,
            created_at: from_millis(row.created_at).ok_or_else(|| corrupt("created_at"))?,
            updated_at: from_millis(row.updated_at).ok_or_else(|| corrupt("updated_at"))?,
            body: row.body,
            user_id: UserId::parse(&row.user_id).map_err(|_| corrupt("user_id"))?,
        })
    }
}

fn unexpected(e: sqlx::Error) -> ChirpStoreError {
    ChirpStoreError::UnexpectedError(e.to_string())
}

#[async_trait::async_trait]
impl ChirpStore for SqlChirpStore {
    async fn add_chirp(&self, author: &UserId, body: ChirpBody) -> Result<Chirp, ChirpStoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let stamp = to_millis(now);

        sqlx::query(
            r#"
            INSERT INTO chirps (id, body, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id.to_string())
        .bind(body.as_ref())
        .bind(author.to_string())
        .bind(stamp)
        .bind(stamp)
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        let created_at = from_millis(stamp).unwrap_or(now);
        Ok(Chirp {
            id,
            created_at,
            updated_at: created_at,
            body: body.as_ref().to_owned(),
            user_id: *author,
        })
    }

    async fn list_chirps(&self) -> Result<Vec<Chirp>, ChirpStoreError> {
        sqlx::query_as::<_, ChirpRow>(
            r#"
            SELECT id, body, user_id, created_at, updated_at
            FROM chirps ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?
        .into_iter()
        .map(Chirp::try_from)
        .collect()
    }

    async fn get_chirp(&self, id: Uuid) -> Result<Chirp, ChirpStoreError> {
        sqlx::query_as::<_, ChirpRow>(
            r#"
            SELECT id, body, user_id, created_at, updated_at
            FROM chirps WHERE id = $1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?
        .ok_or(ChirpStoreError::ChirpNotFound)?
        .try_into()
    }
}

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};
use chrono::Utc;
use log::error;
use sqlx::{AnyPool, FromRow};

use super::{from_millis, to_millis};
use crate::domain::{Credentials, Email, Password, User, UserId, UserStore, UserStoreError};

pub struct SqlUserStore {
    pool: AnyPool,
}

impl SqlUserStore {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    // Helper method to hash passwords
    async fn hash_password(&self, password: &str) -> Result<String, UserStoreError> {
        let password_clone = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let params = Params::new(15000, 2, 1, None)
                .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);
            let password_hash = argon2
                .hash_password(password_clone.as_bytes(), &salt)
                .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?
                .to_string();
            Ok(password_hash)
        })
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?
    }

    // Helper method to verify passwords
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, UserStoreError> {
        let password_clone = password.to_owned();
        let hash_clone = hash.to_owned();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash_clone)
                .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
            let argon2 = Argon2::default();
            Ok(argon2
                .verify_password(password_clone.as_bytes(), &parsed_hash)
                .is_ok())
        })
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?
    }

    async fn find_by_email(&self, email: &Email) -> Result<UserRow, UserStoreError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, hashed_password, created_at, updated_at, is_chirpy_red
            FROM users WHERE email = $1
            "#,
        )
        .bind(email.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?
        .ok_or(UserStoreError::UserNotFound)
    }
}

#[derive(FromRow)]
struct UserRow {
    id: String,
    email: String,
    hashed_password: String,
    created_at: i64,
    updated_at: i64,
    is_chirpy_red: i64,
}

impl TryFrom<UserRow> for User {
    type Error = UserStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let corrupt =
            |what: &str| UserStoreError::UnexpectedError(format!("corrupt user row: {what}"));

        Ok(User {
            id: UserId::parse(&row.id).map_err(|_| corrupt("id"))?,
            email: row.email,
            created_at: from_millis(row.created_at).ok_or_else(|| corrupt("created_at"))?,
            updated_at: from_millis(row.updated_at).ok_or_else(|| corrupt("updated_at"))?,
            is_chirpy_red: row.is_chirpy_red != 0,
        })
    }
}

fn unexpected(e: sqlx::Error) -> UserStoreError {
    UserStoreError::UnexpectedError(e.to_string())
}

// Unique email violations surface as a conflict, everything else is unexpected.
fn write_error(e: sqlx::Error) -> UserStoreError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            UserStoreError::UserAlreadyExists
        }
        _ => unexpected(e),
    }
}

#[async_trait::async_trait]
impl UserStore for SqlUserStore {
    async fn add_user(&self, credentials: Credentials) -> Result<User, UserStoreError> {
        let hashed_password = self.hash_password(credentials.password.as_ref()).await?;
        let id = UserId::default();
        let now = Utc::now();
        let stamp = to_millis(now);

        sqlx::query(
            r#"
            INSERT INTO users (id, email, hashed_password, created_at, updated_at, is_chirpy_red)
            VALUES ($1, $2, $3, $4, $5, 0)
            "#,
        )
        .bind(id.to_string())
        .bind(credentials.email.as_ref())
        .bind(hashed_password)
        .bind(stamp)
        .bind(stamp)
        .execute(&self.pool)
        .await
        .map_err(write_error)?;

        let created_at = from_millis(stamp).unwrap_or(now);
        Ok(User {
            id,
            email: credentials.email.as_ref().to_owned(),
            created_at,
            updated_at: created_at,
            is_chirpy_red: false,
        })
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, hashed_password, created_at, updated_at, is_chirpy_red
            FROM users WHERE id = $1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?
        .ok_or(UserStoreError::UserNotFound)?
        .try_into()
    }

    async fn update_user(
        &self,
        id: &UserId,
        credentials: Credentials,
    ) -> Result<User, UserStoreError> {
        let hashed_password = self.hash_password(credentials.password.as_ref()).await?;

        let result = sqlx::query(
            r#"
            UPDATE users SET email = $1, hashed_password = $2, updated_at = $3
            WHERE id = $4
            "#,
        )
        .bind(credentials.email.as_ref())
        .bind(hashed_password)
        .bind(to_millis(Utc::now()))
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(write_error)?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }
        self.get_user(id).await
    }

    async fn validate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        let row = self.find_by_email(email).await?;

        if self
            .verify_password(password.as_ref(), &row.hashed_password)
            .await
            .inspect_err(|e| error!("password verification failed: {e}"))?
        {
            row.try_into()
        } else {
            Err(UserStoreError::InvalidCredentials)
        }
    }

    async fn upgrade_to_chirpy_red(&self, id: &UserId) -> Result<(), UserStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET is_chirpy_red = 1, updated_at = $1
            WHERE id = $2
            "#,
        )
        .bind(to_millis(Utc::now()))
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        match result.rows_affected() {
            0 => Err(UserStoreError::UserNotFound),
            _ => Ok(()),
        }
    }
}

//! Session lifecycle: login, refresh and revoke.
//!
//! A login issues two credentials. The short-lived access token is a signed
//! JWT that is verified without touching storage. The long-lived session
//! token is opaque and only means something through its row in the
//! `SessionStore`:
//!
//! 1. `login` mints both and persists the session row.
//! 2. `refresh` trades a live session token for a new access token. The
//!    session token itself is not rotated.
//! 3. `revoke` marks the row revoked; every later `refresh` with it fails.
//!
//! Already-issued access tokens stay valid until they expire, revocation only
//! stops new ones from being minted.
use std::sync::Arc;

use axum::http::HeaderMap;
use chrono::{DateTime, Duration, Utc};
use log::{debug, error, info};

use crate::domain::{
    IssuedTokens, SessionRecord, SessionStore, SessionStoreError, SessionToken, UserId,
};
use crate::errors::{AuthError, SessionError};
use crate::utils::auth::issue_access_token_at;
use crate::utils::config::ConfigError;
use crate::utils::consts::env::{ACCESS_TTL_SECONDS_ENV_VAR, REFRESH_TTL_DAYS_ENV_VAR};
use crate::utils::{authenticate, Config};

/// Secret and lifetimes the service signs and persists with.
#[derive(Clone)]
pub struct TokenSettings {
    pub jwt_secret: String,
    pub access_ttl: Duration,
    pub session_ttl: Duration,
}

impl TokenSettings {
    /// Lifetimes outside what a `Duration` can hold are rejected, not clamped.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            jwt_secret: config.jwt_secret().to_owned(),
            access_ttl: Duration::try_seconds(config.access_ttl_seconds())
                .ok_or(ConfigError::Invalid(ACCESS_TTL_SECONDS_ENV_VAR))?,
            session_ttl: Duration::try_days(config.refresh_ttl_days())
                .ok_or(ConfigError::Invalid(REFRESH_TTL_DAYS_ENV_VAR))?,
        })
    }
}

impl std::fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSettings")
            .field("jwt_secret", &"..")
            .field("access_ttl", &self.access_ttl)
            .field("session_ttl", &self.session_ttl)
            .finish()
    }
}

#[derive(Clone)]
pub struct TokenService {
    settings: TokenSettings,
    store: Arc<dyn SessionStore>,
}

impl TokenService {
    pub fn new(settings: TokenSettings, store: Arc<dyn SessionStore>) -> Self {
        Self { settings, store }
    }

    /// Resolve the caller of a protected request from its bearer token.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<UserId, AuthError> {
        authenticate(headers, &self.settings.jwt_secret)
    }

    /// Issue an access token and a fresh session token for `user_id`.
    ///
    /// Nothing is handed out unless the session row was persisted.
    pub async fn login(&self, user_id: &UserId) -> Result<IssuedTokens, SessionError> {
        self.login_at(user_id, Utc::now()).await
    }

    pub async fn login_at(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<IssuedTokens, SessionError> {
        let access_token =
            issue_access_token_at(user_id, &self.settings.jwt_secret, self.settings.access_ttl, now)
                .map_err(|e| {
                    error!("failed to issue access token for user {user_id}: {e}");
                    SessionError::InternalServerError
                })?;

        let refresh_token = SessionToken::generate().map_err(|e| {
            error!("failed to generate session token: {e}");
            SessionError::InternalServerError
        })?;

        let expires_at = now
            .checked_add_signed(self.settings.session_ttl)
            .ok_or_else(|| {
                error!("session expiry out of range for ttl {:?}", self.settings.session_ttl);
                SessionError::InternalServerError
            })?;

        self.store
            .create(SessionRecord::new(
                refresh_token.clone(),
                *user_id,
                now,
                expires_at,
            ))
            .await
            .map_err(|e| {
                error!("failed to persist session for user {user_id}: {e}");
                SessionError::InternalServerError
            })?;

        info!("opened session for user {user_id}");
        Ok(IssuedTokens {
            user_id: *user_id,
            access_token,
            refresh_token,
        })
    }

    /// Mint a new access token from a live session token.
    pub async fn refresh(&self, presented: &str) -> Result<String, SessionError> {
        self.refresh_at(presented, Utc::now()).await
    }

    pub async fn refresh_at(
        &self,
        presented: &str,
        now: DateTime<Utc>,
    ) -> Result<String, SessionError> {
        let token = parse_presented(presented)?;
        let record = self.store.lookup(&token).await.map_err(|e| match e {
            SessionStoreError::NotFound => {
                debug!("refresh with unknown session token");
                SessionError::Unauthenticated
            }
            SessionStoreError::StoreError(e) => {
                error!("session lookup failed: {e}");
                SessionError::InternalServerError
            }
        })?;

        if !record.is_usable_at(now) {
            let reason = if record.is_revoked() { "revoked" } else { "expired" };
            debug!("refresh with {reason} session of user {}", record.user_id);
            return Err(SessionError::Unauthenticated);
        }

        issue_access_token_at(
            &record.user_id,
            &self.settings.jwt_secret,
            self.settings.access_ttl,
            now,
        )
        .map_err(|e| {
            error!("failed to issue access token for user {}: {e}", record.user_id);
            SessionError::InternalServerError
        })
    }

    /// Mark a session token revoked. Revoking twice succeeds.
    pub async fn revoke(&self, presented: &str) -> Result<(), SessionError> {
        self.revoke_at(presented, Utc::now()).await
    }

    pub async fn revoke_at(&self, presented: &str, now: DateTime<Utc>) -> Result<(), SessionError> {
        let token = parse_presented(presented)?;
        self.store.revoke(&token, now).await.map_err(|e| match e {
            SessionStoreError::NotFound => {
                debug!("revoke with unknown session token");
                SessionError::Unauthenticated
            }
            SessionStoreError::StoreError(e) => {
                error!("session revoke failed: {e}");
                SessionError::InternalServerError
            }
        })
    }
}

// A string that is not a well-formed token cannot name any stored row.
fn parse_presented(presented: &str) -> Result<SessionToken, SessionError> {
    SessionToken::parse(presented.to_owned()).map_err(|e| {
        debug!("rejected session token: {e}");
        SessionError::Unauthenticated
    })
}

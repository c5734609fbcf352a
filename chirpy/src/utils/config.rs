use std::env;

use chrono::Duration;
use dotenvy::dotenv;
use thiserror::Error;

use super::consts::{
    env::*, DEFAULT_ACCESS_TTL_SECONDS, DEFAULT_ASSETS_DIR, DEFAULT_DB_MAX_CONNECTIONS,
    DEFAULT_LISTEN_ADDRESS, DEFAULT_REFRESH_TTL_DAYS,
};

#[derive(Clone, Debug)]
pub struct Config {
    db_url: String,
    jwt_secret: String,
    polka_key: String,
    access_ttl_seconds: i64,
    refresh_ttl_days: i64,
    listen_address: String,
    assets_dir: String,
    db_max_connections: u32,
}

impl Config {
    pub fn db_url(&self) -> &str {
        &self.db_url
    }
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
    pub fn polka_key(&self) -> &str {
        &self.polka_key
    }
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl_seconds
    }
    pub fn refresh_ttl_days(&self) -> i64 {
        self.refresh_ttl_days
    }
    pub fn listen_address(&self) -> &str {
        &self.listen_address
    }
    pub fn assets_dir(&self) -> &str {
        &self.assets_dir
    }
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    /// Build a config with defaults for everything but the three required values.
    pub fn new(db_url: String, jwt_secret: String, polka_key: String) -> Self {
        Self {
            db_url,
            jwt_secret,
            polka_key,
            access_ttl_seconds: DEFAULT_ACCESS_TTL_SECONDS,
            refresh_ttl_days: DEFAULT_REFRESH_TTL_DAYS,
            listen_address: DEFAULT_LISTEN_ADDRESS.to_owned(),
            assets_dir: DEFAULT_ASSETS_DIR.to_owned(),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
        }
    }

    pub fn with_access_ttl_seconds(mut self, seconds: i64) -> Self {
        self.access_ttl_seconds = seconds;
        self
    }

    pub fn with_refresh_ttl_days(mut self, days: i64) -> Self {
        self.refresh_ttl_days = days;
        self
    }

    pub fn with_assets_dir(mut self, dir: impl Into<String>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    pub fn with_db_max_connections(mut self, max: u32) -> Self {
        self.db_max_connections = max;
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let db_url = req_var(DB_URL_ENV_VAR)?;
        let jwt_secret = req_var(JWT_SECRET_ENV_VAR)?;
        if jwt_secret.trim().is_empty() {
            return Err(ConfigError::Invalid(JWT_SECRET_ENV_VAR));
        }
        let polka_key = req_var(POLKA_KEY_ENV_VAR)?;

        let access_ttl_seconds =
            parse_or(ACCESS_TTL_SECONDS_ENV_VAR, DEFAULT_ACCESS_TTL_SECONDS)?;
        if access_ttl_seconds <= 0 || Duration::try_seconds(access_ttl_seconds).is_none() {
            return Err(ConfigError::Invalid(ACCESS_TTL_SECONDS_ENV_VAR));
        }
        let refresh_ttl_days = parse_or(REFRESH_TTL_DAYS_ENV_VAR, DEFAULT_REFRESH_TTL_DAYS)?;
        if refresh_ttl_days <= 0 || Duration::try_days(refresh_ttl_days).is_none() {
            return Err(ConfigError::Invalid(REFRESH_TTL_DAYS_ENV_VAR));
        }
        let db_max_connections =
            parse_or(DB_MAX_CONNECTIONS_ENV_VAR, DEFAULT_DB_MAX_CONNECTIONS)?;

        let listen_address =
            opt_var(LISTEN_ADDRESS_ENV_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDRESS.into());
        let assets_dir = opt_var(ASSETS_DIR_ENV_VAR).unwrap_or_else(|| DEFAULT_ASSETS_DIR.into());

        Ok(Self {
            db_url,
            jwt_secret,
            polka_key,
            access_ttl_seconds,
            refresh_ttl_days,
            listen_address,
            assets_dir,
            db_max_connections,
        })
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_or<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match opt_var(key) {
        Some(v) => v.trim().parse::<T>().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

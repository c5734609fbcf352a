use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use sqlx::AnyPool;

use crate::domain::{ChirpStore, SessionStore, UserStore};
use crate::services::{SqlChirpStore, SqlSessionStore, SqlUserStore, TokenService, TokenSettings};
use crate::utils::config::ConfigError;
use crate::utils::Config;

// Using type aliases to improve readability!
pub type UserStoreType = Arc<dyn UserStore>;
pub type ChirpStoreType = Arc<dyn ChirpStore>;
pub type SessionStoreType = Arc<dyn SessionStore>;
pub type TokenServiceType = Arc<TokenService>;
pub type ConfigType = Arc<Config>;
pub type HitCounterType = Arc<AtomicU64>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub chirp_store: ChirpStoreType,
    pub token_service: TokenServiceType,
    pub config: ConfigType,
    pub fileserver_hits: HitCounterType,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        chirp_store: ChirpStoreType,
        token_service: TokenServiceType,
        config: ConfigType,
    ) -> Self {
        Self {
            user_store,
            chirp_store,
            token_service,
            config,
            fileserver_hits: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Wire every store to the same database pool.
    pub fn with_sql_stores(pool: AnyPool, config: Config) -> Result<Self, ConfigError> {
        let session_store: SessionStoreType = Arc::new(SqlSessionStore::new(pool.clone()));
        let token_service = TokenService::new(TokenSettings::from_config(&config)?, session_store);

        Ok(Self::new(
            Arc::new(SqlUserStore::new(pool.clone())),
            Arc::new(SqlChirpStore::new(pool)),
            Arc::new(token_service),
            Arc::new(config),
        ))
    }
}

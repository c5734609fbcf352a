pub mod env {
    pub const DB_URL_ENV_VAR: &str = "DB_URL";
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const POLKA_KEY_ENV_VAR: &str = "POLKA_KEY";
    pub const ACCESS_TTL_SECONDS_ENV_VAR: &str = "ACCESS_TTL_SECONDS";
    pub const REFRESH_TTL_DAYS_ENV_VAR: &str = "REFRESH_TTL_DAYS";
    pub const LISTEN_ADDRESS_ENV_VAR: &str = "LISTEN_ADDRESS";
    pub const ASSETS_DIR_ENV_VAR: &str = "ASSETS_DIR";
    pub const DB_MAX_CONNECTIONS_ENV_VAR: &str = "DB_MAX_CONNECTIONS";
}

/// Issuer label embedded in every access token.
pub const JWT_ISSUER: &str = "chirpy";

pub const DEFAULT_ACCESS_TTL_SECONDS: i64 = 60 * 60;
pub const DEFAULT_REFRESH_TTL_DAYS: i64 = 60;
pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_ASSETS_DIR: &str = ".";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

pub const BEARER_SCHEME: &str = "Bearer";
pub const API_KEY_SCHEME: &str = "ApiKey";

pub const MAX_CHIRP_LENGTH: usize = 140;
pub const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];
pub const PROFANITY_MASK: &str = "****";

pub const USER_UPGRADED_EVENT: &str = "user.upgraded";

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub iss: String, // Issuer
    pub iat: i64,    // Issued at, epoch seconds
    pub exp: i64,    // Expiration time, epoch seconds
    pub sub: String, // Subject (user ID)
}

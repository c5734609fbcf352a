use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use thiserror::Error;

use crate::domain::{AccessClaims, UserId};
use crate::errors::CredentialError;

use super::JWT_ISSUER;

#[derive(Error, Debug)]
pub enum GenerateTokenError {
    #[error("failed to sign access token: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    #[error("access token expiry is out of range")]
    UnexpectedError,
}

// Create JWT access token for `user_id`, valid for `ttl` from now
pub fn issue_access_token(
    user_id: &UserId,
    secret: &str,
    ttl: Duration,
) -> Result<String, GenerateTokenError> {
    issue_access_token_at(user_id, secret, ttl, Utc::now())
}

pub fn issue_access_token_at(
    user_id: &UserId,
    secret: &str,
    ttl: Duration,
    now: DateTime<Utc>,
) -> Result<String, GenerateTokenError> {
    let exp = now
        .checked_add_signed(ttl)
        .ok_or(GenerateTokenError::UnexpectedError)?
        .timestamp();

    let claims = AccessClaims {
        iss: JWT_ISSUER.to_owned(),
        iat: now.timestamp(),
        exp,
        sub: user_id.to_string(),
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

// Check signature first, then expiry, then the subject
pub fn verify_access_token(token: &str, secret: &str) -> Result<UserId, CredentialError> {
    verify_access_token_at(token, secret, Utc::now())
}

pub fn verify_access_token_at(
    token: &str,
    secret: &str,
    now: DateTime<Utc>,
) -> Result<UserId, CredentialError> {
    let claims = decode_claims(token, secret)?;

    // No leeway: expired from the exp second onwards.
    if now.timestamp() >= claims.exp {
        return Err(CredentialError::Expired);
    }

    UserId::parse(&claims.sub).map_err(|_| CredentialError::SubjectInvalid)
}

fn decode_claims(token: &str, secret: &str) -> Result<AccessClaims, CredentialError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // exp is compared by hand against the caller's clock
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.leeway = 0;

    decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature => CredentialError::SignatureInvalid,
        ErrorKind::ExpiredSignature => CredentialError::Expired,
        _ => CredentialError::Malformed,
    })
}

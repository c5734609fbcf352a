use axum::http::{header::AUTHORIZATION, HeaderMap};
use log::debug;

use crate::domain::UserId;
use crate::errors::{AuthError, HeaderError};

use super::auth::verify_access_token;
use super::{API_KEY_SCHEME, BEARER_SCHEME};

/// Pull the token out of `Authorization: Bearer <token>`.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, HeaderError> {
    parse_authorization(authorization_value(headers)?, BEARER_SCHEME)
}

/// Pull the key out of `Authorization: ApiKey <key>`.
pub fn extract_api_key(headers: &HeaderMap) -> Result<&str, HeaderError> {
    parse_authorization(authorization_value(headers)?, API_KEY_SCHEME)
}

fn authorization_value(headers: &HeaderMap) -> Result<&str, HeaderError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(HeaderError::MissingHeader)?
        .to_str()
        .map_err(|_| HeaderError::MalformedHeader)?;

    if value.is_empty() {
        return Err(HeaderError::MissingHeader);
    }
    Ok(value)
}

/// Exactly `<scheme> <token>`: one single space, case-sensitive scheme and a
/// token that is not blank.
pub fn parse_authorization<'a>(value: &'a str, scheme: &str) -> Result<&'a str, HeaderError> {
    let parts: Vec<&str> = value.split(' ').collect();

    match parts.as_slice() {
        [s, token] if *s == scheme && !token.trim().is_empty() => Ok(*token),
        _ => Err(HeaderError::MalformedHeader),
    }
}

/// Resolve the caller of a request from its bearer access token. Every
/// failure is logged with its reason and collapsed into `Unauthenticated`.
pub fn authenticate(headers: &HeaderMap, secret: &str) -> Result<UserId, AuthError> {
    let token = extract_bearer(headers).map_err(|e| {
        debug!("rejected bearer header: {e}");
        AuthError::from(e)
    })?;

    verify_access_token(token, secret).map_err(|e| {
        debug!("rejected access token: {e}");
        AuthError::from(e)
    })
}

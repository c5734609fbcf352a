use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

/// Why an `Authorization` header could not be turned into a token.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum HeaderError {
    #[error("no auth header has been provided")]
    MissingHeader,

    #[error("auth header is malformed")]
    MalformedHeader,
}

/// Why an access token was rejected by the codec.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum CredentialError {
    #[error("token could not be parsed")]
    Malformed,

    #[error("token signature does not match")]
    SignatureInvalid,

    #[error("token has expired")]
    Expired,

    #[error("token subject is not a valid user id")]
    SubjectInvalid,
}

/// The only authentication failure a client ever sees.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum AuthError {
    #[error("Unauthorized")]
    Unauthenticated,
}

impl From<HeaderError> for AuthError {
    fn from(_: HeaderError) -> Self {
        AuthError::Unauthenticated
    }
}

impl From<CredentialError> for AuthError {
    fn from(_: CredentialError) -> Self {
        AuthError::Unauthenticated
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
    }
}

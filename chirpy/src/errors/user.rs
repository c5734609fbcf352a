use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use super::AuthError;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UserError {
    #[error("invalid email address")]
    InvalidEmail,

    #[error("password must be at least 8 characters long")]
    InvalidPassword,

    #[error("User with email {0} already exists.")]
    UserAlreadyExists(String),

    #[error("User not found.")]
    UserNotFound,

    #[error("Unauthorized")]
    Unauthenticated,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl From<AuthError> for UserError {
    fn from(_: AuthError) -> Self {
        UserError::Unauthenticated
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            UserError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            UserError::InvalidPassword => StatusCode::UNPROCESSABLE_ENTITY,
            UserError::UserAlreadyExists(_) => StatusCode::CONFLICT,
            UserError::UserNotFound => StatusCode::NOT_FOUND,
            UserError::Unauthenticated => StatusCode::UNAUTHORIZED,
            UserError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WebhookError {
    #[error("Unauthorized")]
    Unauthenticated,

    #[error("invalid user id")]
    InvalidUserId,

    #[error("User not found.")]
    UserNotFound,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            WebhookError::Unauthenticated => StatusCode::UNAUTHORIZED,
            WebhookError::InvalidUserId => StatusCode::BAD_REQUEST,
            WebhookError::UserNotFound => StatusCode::NOT_FOUND,
            WebhookError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Unauthorized")]
    Unauthenticated,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            SessionError::Unauthenticated => StatusCode::UNAUTHORIZED,
            SessionError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChirpError {
    #[error("Chirp is too long")]
    TooLong,

    #[error("Chirp not found")]
    NotFound,

    #[error("Something went wrong")]
    InternalServerError,
}

#[derive(Serialize)]
struct ChirpErrorBody {
    error: String,
}

impl IntoResponse for ChirpError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            ChirpError::TooLong => StatusCode::BAD_REQUEST,
            ChirpError::NotFound => StatusCode::NOT_FOUND,
            ChirpError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ChirpErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

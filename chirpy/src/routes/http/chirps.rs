use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use log::error;
use uuid::Uuid;

use super::AuthenticatedUser;
use crate::app_state::AppState;
use crate::domain::{ChirpBody, ChirpRequestBody, ChirpResponse, ChirpStoreError};
use crate::errors::ChirpError;

pub async fn create_chirp(
    State(state): State<AppState>,
    AuthenticatedUser(author): AuthenticatedUser,
    Json(request): Json<ChirpRequestBody>,
) -> Result<impl IntoResponse, ChirpError> {
    let body = ChirpBody::parse(request.body).or(Err(ChirpError::TooLong))?;

    let chirp = state
        .chirp_store
        .add_chirp(&author, body)
        .await
        .map_err(|e| {
            error!("failed to store chirp for user {author}: {e}");
            ChirpError::InternalServerError
        })?;

    Ok((StatusCode::CREATED, Json(ChirpResponse::from(chirp))))
}

pub async fn get_chirps(State(state): State<AppState>) -> Result<impl IntoResponse, ChirpError> {
    let chirps = state.chirp_store.list_chirps().await.map_err(|e| {
        error!("failed to list chirps: {e}");
        ChirpError::InternalServerError
    })?;

    let response: Vec<ChirpResponse> = chirps.into_iter().map(ChirpResponse::from).collect();
    Ok(Json(response))
}

pub async fn get_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<Uuid>,
) -> Result<impl IntoResponse, ChirpError> {
    let chirp = state
        .chirp_store
        .get_chirp(chirp_id)
        .await
        .map_err(|e| match e {
            ChirpStoreError::ChirpNotFound => ChirpError::NotFound,
            e => {
                error!("failed to load chirp {chirp_id}: {e}");
                ChirpError::InternalServerError
            }
        })?;

    Ok(Json(ChirpResponse::from(chirp)))
}

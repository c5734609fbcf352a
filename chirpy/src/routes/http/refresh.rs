use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::{RefreshRequestBody, RefreshResponse};
use crate::errors::SessionError;

pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequestBody>,
) -> Result<impl IntoResponse, SessionError> {
    let token = state.token_service.refresh(&request.refresh_token).await?;

    Ok((StatusCode::OK, Json(RefreshResponse { token })))
}

pub async fn revoke(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequestBody>,
) -> Result<StatusCode, SessionError> {
    state.token_service.revoke(&request.refresh_token).await?;

    Ok(StatusCode::NO_CONTENT)
}

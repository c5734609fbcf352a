use axum::{extract::State, http::StatusCode, Json};
use log::{error, info};

use super::PolkaApiKey;
use crate::app_state::AppState;
use crate::domain::{UserId, UserStoreError, WebhookRequestBody};
use crate::errors::WebhookError;
use crate::utils::USER_UPGRADED_EVENT;

pub async fn polka_webhook(
    State(state): State<AppState>,
    _key: PolkaApiKey,
    Json(request): Json<WebhookRequestBody>,
) -> Result<StatusCode, WebhookError> {
    // Acknowledge events we don't act on so the provider stops retrying.
    if request.event != USER_UPGRADED_EVENT {
        return Ok(StatusCode::NO_CONTENT);
    }

    let user_id = UserId::parse(&request.data.user_id).or(Err(WebhookError::InvalidUserId))?;
    state
        .user_store
        .upgrade_to_chirpy_red(&user_id)
        .await
        .map_err(|e| match e {
            UserStoreError::UserNotFound => WebhookError::UserNotFound,
            e => {
                error!("failed to upgrade user {user_id}: {e}");
                WebhookError::InternalServerError
            }
        })?;

    info!("upgraded user {user_id} to chirpy red");
    Ok(StatusCode::NO_CONTENT)
}

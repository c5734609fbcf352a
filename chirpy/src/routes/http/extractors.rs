use axum::{extract::FromRequestParts, http::request::Parts};
use log::debug;

use crate::app_state::AppState;
use crate::domain::UserId;
use crate::errors::{AuthError, WebhookError};
use crate::utils::extract_api_key;

/// The caller of a protected route, resolved from its bearer access token.
/// Handlers taking this never run for unauthenticated requests.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub UserId);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .token_service
            .authenticate(&parts.headers)
            .map(AuthenticatedUser)
    }
}

/// Proof that the request carries the payment provider's API key.
#[derive(Debug, Clone, Copy)]
pub struct PolkaApiKey;

impl FromRequestParts<AppState> for PolkaApiKey {
    type Rejection = WebhookError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let key = extract_api_key(&parts.headers).map_err(|e| {
            debug!("rejected webhook auth header: {e}");
            WebhookError::Unauthenticated
        })?;

        if key != state.config.polka_key() {
            debug!("rejected webhook with wrong api key");
            return Err(WebhookError::Unauthenticated);
        }
        Ok(PolkaApiKey)
    }
}

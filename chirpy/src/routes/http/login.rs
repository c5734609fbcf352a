use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::{Email, LoginRequestBody, LoginResponse, Password, UserResponse};
use crate::errors::LoginError;
use crate::services::AuthService;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequestBody>,
) -> Result<impl IntoResponse, LoginError> {
    // Malformed input cannot match an account; don't tell the caller which part was wrong.
    let email = Email::parse(request.email).or(Err(LoginError::IncorrectCredentials))?;
    let password = Password::parse(request.password).or(Err(LoginError::IncorrectCredentials))?;

    let (user, issued) = AuthService::login(&state, &email, &password).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            user: UserResponse::from(user),
            token: issued.access_token,
            refresh_token: issued.refresh_token.into_inner(),
        }),
    ))
}

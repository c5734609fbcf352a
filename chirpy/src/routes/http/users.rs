use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use super::AuthenticatedUser;
use crate::app_state::AppState;
use crate::domain::{Credentials, Email, Password, UserRequestBody, UserResponse};
use crate::errors::UserError;
use crate::services::AuthService;

fn parse_credentials(request: UserRequestBody) -> Result<Credentials, UserError> {
    let email = Email::parse(request.email).or(Err(UserError::InvalidEmail))?;
    let password = Password::parse(request.password).or(Err(UserError::InvalidPassword))?;
    Ok(Credentials::new(email, password))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<UserRequestBody>,
) -> Result<impl IntoResponse, UserError> {
    let credentials = parse_credentials(request)?;
    let user = AuthService::signup(&state, credentials).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

pub async fn update_user(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Json(request): Json<UserRequestBody>,
) -> Result<impl IntoResponse, UserError> {
    let credentials = parse_credentials(request)?;
    let user = AuthService::update(&state, &user_id, credentials).await?;

    Ok((StatusCode::OK, Json(UserResponse::from(user))))
}

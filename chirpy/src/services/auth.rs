use log::{error, info};

use crate::app_state::AppState;
use crate::domain::{Credentials, Email, IssuedTokens, Password, User, UserId, UserStoreError};
use crate::errors::{LoginError, UserError};

pub struct AuthService;

impl AuthService {
    pub async fn signup(state: &AppState, credentials: Credentials) -> Result<User, UserError> {
        let email = credentials.email.as_ref().to_owned();
        let user = state
            .user_store
            .add_user(credentials)
            .await
            .map_err(|e| match e {
                UserStoreError::UserAlreadyExists => UserError::UserAlreadyExists(email),
                e => {
                    error!("failed to create user: {e}");
                    UserError::InternalServerError
                }
            })?;

        info!("created user {}", user.id);
        Ok(user)
    }

    pub async fn update(
        state: &AppState,
        user_id: &UserId,
        credentials: Credentials,
    ) -> Result<User, UserError> {
        let email = credentials.email.as_ref().to_owned();
        state
            .user_store
            .update_user(user_id, credentials)
            .await
            .map_err(|e| match e {
                UserStoreError::UserAlreadyExists => UserError::UserAlreadyExists(email),
                UserStoreError::UserNotFound => UserError::UserNotFound,
                e => {
                    error!("failed to update user {user_id}: {e}");
                    UserError::InternalServerError
                }
            })
    }

    /// Check the password, then open a session for the user.
    pub async fn login(
        state: &AppState,
        email: &Email,
        password: &Password,
    ) -> Result<(User, IssuedTokens), LoginError> {
        let user = state
            .user_store
            .validate_user(email, password)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound | UserStoreError::InvalidCredentials => {
                    LoginError::IncorrectCredentials
                }
                e => {
                    error!("failed to validate credentials: {e}");
                    LoginError::InternalServerError
                }
            })?;

        let tokens = state
            .token_service
            .login(&user.id)
            .await
            .map_err(|_| LoginError::InternalServerError)?;

        Ok((user, tokens))
    }
}

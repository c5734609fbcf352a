use super::UserStoreError;
use crate::domain::{Credentials, Email, Password, User, UserId};

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&self, credentials: Credentials) -> Result<User, UserStoreError>;
    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError>;
    async fn update_user(
        &self,
        id: &UserId,
        credentials: Credentials,
    ) -> Result<User, UserStoreError>;
    async fn validate_user(&self, email: &Email, password: &Password)
        -> Result<User, UserStoreError>;
    async fn upgrade_to_chirpy_red(&self, id: &UserId) -> Result<(), UserStoreError>;
}

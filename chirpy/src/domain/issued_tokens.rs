use super::{SessionToken, UserId};

/// Everything a successful login hands back to the client.
#[derive(Debug, Clone)]
pub struct IssuedTokens {
    pub user_id: UserId,
    pub access_token: String,
    pub refresh_token: SessionToken,
}

use serde::{Deserialize, Serialize};

use super::UserResponse;

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
    pub refresh_token: String,
}

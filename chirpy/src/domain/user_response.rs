use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{User, UserId};

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct UserResponse {
    pub id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
    pub is_chirpy_red: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            created_at: user.created_at,
            updated_at: user.updated_at,
            email: user.email,
            is_chirpy_red: user.is_chirpy_red,
        }
    }
}

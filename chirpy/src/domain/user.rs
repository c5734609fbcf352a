use chrono::{DateTime, Utc};

use super::{Email, Password, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_chirpy_red: bool,
}

/// Validated input for creating or updating an account.
#[derive(Debug)]
pub struct Credentials {
    pub email: Email,
    pub password: Password,
}

impl Credentials {
    pub fn new(email: Email, password: Password) -> Self {
        Credentials { email, password }
    }
}

use serde::{Deserialize, Serialize};

/// Body of both `POST /api/users` and `PUT /api/users`.
#[derive(Deserialize, Serialize, Debug)]
pub struct UserRequestBody {
    pub email: String,
    pub password: String,
}

use serde::{Deserialize, Serialize};

/// Body of `POST /api/refresh` and `POST /api/revoke`.
#[derive(Deserialize, Serialize, Debug)]
pub struct RefreshRequestBody {
    pub refresh_token: String,
}

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct WebhookRequestBody {
    pub event: String,
    pub data: WebhookData,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct WebhookData {
    pub user_id: String,
}

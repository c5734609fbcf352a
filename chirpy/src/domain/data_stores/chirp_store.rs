use uuid::Uuid;

use super::ChirpStoreError;
use crate::domain::{Chirp, ChirpBody, UserId};

#[async_trait::async_trait]
pub trait ChirpStore: Send + Sync {
    async fn add_chirp(&self, author: &UserId, body: ChirpBody) -> Result<Chirp, ChirpStoreError>;
    /// All chirps, oldest first.
    async fn list_chirps(&self) -> Result<Vec<Chirp>, ChirpStoreError>;
    async fn get_chirp(&self, id: Uuid) -> Result<Chirp, ChirpStoreError>;
}

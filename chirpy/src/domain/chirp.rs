use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::UserId;
use crate::utils::MAX_CHIRP_LENGTH;
use crate::validation::filter_profane_words;

#[derive(Debug, Clone, PartialEq)]
pub struct Chirp {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: UserId,
}

/// Chirp text that fits the length limit, with profanity already masked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChirpBody(String);

impl ChirpBody {
    pub fn parse(body: String) -> Result<Self, String> {
        if body.chars().count() > MAX_CHIRP_LENGTH {
            return Err("Chirp is too long".to_string());
        }
        Ok(ChirpBody(filter_profane_words(&body)))
    }
}

impl AsRef<str> for ChirpBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

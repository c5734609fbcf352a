use rand::{rngs::OsRng, TryRngCore};
use thiserror::Error;

const TOKEN_BYTES: usize = 32;
const TOKEN_HEX_LEN: usize = TOKEN_BYTES * 2;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionTokenError {
    #[error("failed to read from the OS random source: {0}")]
    Entropy(String),

    #[error("session token must be 64 lowercase hex characters")]
    InvalidFormat,
}

/// Opaque long-lived session (refresh) token: 32 random bytes, lowercase hex.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Draws fresh bytes straight from the OS. A failing entropy source is an
    /// error, never a fallback.
    pub fn generate() -> Result<Self, SessionTokenError> {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| SessionTokenError::Entropy(e.to_string()))?;
        Ok(SessionToken(hex::encode(bytes)))
    }

    pub fn parse(token: String) -> Result<Self, SessionTokenError> {
        let well_formed = token.len() == TOKEN_HEX_LEN
            && token
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        match well_formed {
            true => Ok(SessionToken(token)),
            false => Err(SessionTokenError::InvalidFormat),
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Keep tokens out of logs.
impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

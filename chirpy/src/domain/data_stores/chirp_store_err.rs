use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChirpStoreError {
    #[error("chirp not found")]
    ChirpNotFound,

    #[error("unexpected chirp store error: {0}")]
    UnexpectedError(String),
}

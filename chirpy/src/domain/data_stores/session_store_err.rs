use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionStoreError {
    #[error("session token not found")]
    NotFound,

    #[error("session store failure: {0}")]
    StoreError(String),
}

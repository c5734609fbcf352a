pub mod auth;
pub mod data_stores;
pub mod token_service;

pub use auth::*;
pub use data_stores::*;
pub use token_service::*;

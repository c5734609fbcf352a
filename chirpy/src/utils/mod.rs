pub mod auth;
pub mod config;
pub mod consts;
pub mod headers;

pub use config::Config;
pub use consts::*;
pub use headers::*;

pub mod access_claims;
pub mod chirp;
pub mod chirp_request;
pub mod chirp_response;
pub mod data_stores;
pub mod email;
pub mod issued_tokens;
pub mod login_request;
pub mod login_response;
pub mod password;
pub mod refresh_request;
pub mod refresh_response;
pub mod session_token;
mod user;
pub mod user_id;
pub mod user_request;
pub mod user_response;
pub mod webhook_request;

pub use access_claims::*;
pub use chirp::*;
pub use chirp_request::*;
pub use chirp_response::*;
pub use data_stores::*;
pub use email::*;
pub use issued_tokens::*;
pub use login_request::*;
pub use login_response::*;
pub use password::*;
pub use refresh_request::*;
pub use refresh_response::*;
pub use session_token::*;
pub use user::*;
pub use user_id::*;
pub use user_request::*;
pub use user_response::*;
pub use webhook_request::*;

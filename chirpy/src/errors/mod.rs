mod auth;
mod chirp;
mod login;
mod session;
mod user;
mod webhook;

pub use auth::*;
pub use chirp::*;
pub use login::*;
pub use session::*;
pub use user::*;
pub use webhook::*;

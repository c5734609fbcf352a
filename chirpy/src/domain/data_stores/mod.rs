pub mod chirp_store;
pub mod chirp_store_err;
pub mod session_record;
pub mod session_store;
pub mod session_store_err;
pub mod user_store;
pub mod user_store_err;

pub use chirp_store::*;
pub use chirp_store_err::*;
pub use session_record::*;
pub use session_store::*;
pub use session_store_err::*;
pub use user_store::*;
pub use user_store_err::*;

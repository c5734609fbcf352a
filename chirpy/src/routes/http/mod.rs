pub(crate) mod admin;
pub(crate) mod chirps;
pub(crate) mod extractors;
pub(crate) mod health;
pub(crate) mod login;
pub(crate) mod refresh;
pub(crate) mod users;
pub(crate) mod webhooks;

// re-export items from sub-modules
pub use admin::*;
pub use chirps::*;
pub use extractors::*;
pub use health::*;
pub use login::*;
pub use refresh::*;
pub use users::*;
pub use webhooks::*;

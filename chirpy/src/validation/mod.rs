mod email;
mod password;
mod profanity;

pub use email::is_valid_email;
pub use password::is_valid_password;
pub use profanity::filter_profane_words;

const MIN_PASSWORD_LEN: usize = 8;

/// True if pw has at least 8 characters and is not only whitespace.
pub fn is_valid_password(pw: &str) -> bool {
    pw.chars().count() >= MIN_PASSWORD_LEN && !pw.trim().is_empty()
}

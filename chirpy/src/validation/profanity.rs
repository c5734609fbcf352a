use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::{PROFANE_WORDS, PROFANITY_MASK};

static PROFANITY_RE: Lazy<Regex> = Lazy::new(|| {
    let alternatives = PROFANE_WORDS
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternatives})\b")).expect("profanity pattern is valid")
});

/// Replace each profane word (whole word, any case) with `****`.
pub fn filter_profane_words(text: &str) -> String {
    PROFANITY_RE.replace_all(text, PROFANITY_MASK).into_owned()
}

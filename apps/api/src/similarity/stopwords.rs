//! English stop-word list, loaded once per process on first use.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use stop_words::{get, LANGUAGE};

static ENGLISH: Lazy<HashSet<String>> = Lazy::new(|| {
    get(LANGUAGE::English)
        .into_iter()
        .map(|w| w.to_lowercase())
        .collect()
});

/// True when `token` (already lowercased) is an English stop word.
pub fn is_stop_word(token: &str) -> bool {
    ENGLISH.contains(token)
}

//! Tokenizer — turns raw document text into the ordered token sequence that
//! every similarity strategy consumes.

/// Tokens of this many chars or fewer are dropped.
const MAX_DROPPED_LEN: usize = 2;

/// Splits raw text into lowercase word tokens.
///
/// Steps, in order:
/// 1. lowercase
/// 2. strip every char that is neither a word char (alphanumeric or `_`) nor
///    whitespace; stripping joins neighbours, so `machine-learning` becomes
///    `machinelearning`
/// 3. split on whitespace runs
/// 4. drop tokens of length ≤ 2 (counted in chars, not bytes)
/// 5. drop tokens made only of digits (`123`, `2024`)
///
/// Never fails: empty or punctuation-only input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() > MAX_DROPPED_LEN)
        .filter(|token| !token.chars().all(|c| c.is_numeric()))
        .map(String::from)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

//! Input sanitization and stop-word filtering.
//!
//! Raw input is stripped to `[a-z0-9 ]`, lowercased, and split on
//! whitespace. Stop words are then removed from the whole token list,
//! before the verb is split from the arguments; a verb that happens to be
//! a stop word is therefore filtered too. That ordering is a deliberate
//! carry-over from the system this game descends from.

/// Filler words dropped from the token list.
const STOP_WORDS: [&str; 9] = [
    "from", "with", "at", "a", "the", "this", "that", "those", "my",
];

/// Sanitizes and tokenizes one line of raw input.
///
/// Returns an empty vector when nothing survives sanitization; the caller
/// treats that as "say nothing, do nothing".
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();
    cleaned
        .to_lowercase()
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .map(String::from)
        .collect()
}

//! Tokenizer — lowercased alphanumeric runs of length ≥ 2.
//!
//! Matches the common TF-IDF vectorizer default (the `\w\w+` word-boundary
//! convention): single-character tokens and punctuation are discarded.
//! No stop-word removal by default; callers may opt in via the flag.

/// Common English stop words, applied only when stop-word filtering is
/// explicitly enabled. The default ranking pipeline does NOT use this list.
const STOP_WORDS: &[&str] = &[
    "an", "and", "are", "as", "at", "be", "been", "but", "by", "for", "from",
    "had", "has", "have", "he", "her", "his", "if", "in", "is", "it", "its",
    "not", "of", "on", "or", "she", "that", "the", "their", "them", "they",
    "this", "to", "was", "we", "were", "will", "with", "you", "your",
];

/// Splits `text` into lowercased alphanumeric runs of at least two characters.
/// Any non-alphanumeric character is a boundary; comparison is Unicode-aware.
pub fn tokenize(text: &str, filter_stop_words: bool) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| !filter_stop_words || !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

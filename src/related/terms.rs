//! Term extraction: raw text to normalized, stopword-filtered tokens.
//!
//! Matching and scoring both work over these terms, so the rules are
//! deliberately dumb and total: lowercase, strip punctuation, drop short
//! tokens and function words. No stemming, no language detection.

/// Tokens shorter than this are dropped.
pub const MIN_TERM_LENGTH: usize = 4;

/// Common English function words that carry no relatedness signal.
/// Words shorter than `MIN_TERM_LENGTH` are filtered by length anyway;
/// they stay in the list so the list stands on its own.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being",
    "in", "on", "at", "to", "for", "of", "with", "by", "from", "as",
    "and", "or", "but", "not", "no", "so", "if", "then", "than", "this",
    "that", "these", "those", "there", "their", "they", "them", "have",
    "has", "had", "will", "would", "could", "should", "what", "when",
    "where", "which", "while", "about", "into", "over", "under", "some",
    "such", "only", "very", "just", "also", "more", "most", "other",
    "each", "both", "because", "your", "yours",
];

/// Extract normalized terms from raw text.
///
/// Lowercases the input, replaces every non-word character with a space,
/// and splits on whitespace. Tokens shorter than [`MIN_TERM_LENGTH`] and
/// stopwords are dropped. In strict mode, tokens containing non-letter
/// characters (digits, underscores) are dropped too.
///
/// Never fails; empty input yields an empty vec.
pub fn extract_terms(text: &str, strict: bool) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|t| t.len() >= MIN_TERM_LENGTH)
        .filter(|t| !STOP_WORDS.contains(t))
        .filter(|t| !strict || t.chars().all(|c| c.is_alphabetic()))
        .map(str::to_string)
        .collect()
}

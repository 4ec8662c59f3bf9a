//! Text normalization and keyword comparison for the semantic delta scorer.
//!
//! Everything in this module is a pure function over its inputs. The keyword
//! heuristic deliberately stands in for a learned similarity model; the
//! scoring contract depends on these exact normalization and filtering rules.

use std::collections::HashSet;

/// Tokens shorter than this are discarded during keyword extraction.
pub const MIN_KEYWORD_LENGTH: usize = 3;

/// Common English words that carry no signal for mission/action comparison.
const STOP_WORDS: [&str; 46] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "should", "could", "may", "might", "must", "can", "this",
    "that", "these", "those", "it", "its", "they", "them", "their",
];

/// Normalize text for comparison: lowercase, strip punctuation, collapse whitespace.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract the set of meaningful keywords from free text.
///
/// Splits normalized text on whitespace, then drops stop words and tokens
/// shorter than `min_length`. Duplicates collapse into the set.
pub fn extract_keywords(text: &str, min_length: usize) -> HashSet<String> {
    normalize(text)
        .split_whitespace()
        .filter(|w| w.chars().count() >= min_length)
        .filter(|w| !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Jaccard similarity between two keyword sets, in [0.0, 1.0].
///
/// Degenerate cases: two empty sets are vacuously identical (1.0); an empty
/// set against a non-empty one shares nothing (0.0).
pub fn keyword_overlap(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    intersection as f64 / union as f64
}

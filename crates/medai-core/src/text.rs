//! Input text normalization applied before classification

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Collapse every whitespace run to a single space and trim both ends
pub fn normalize_text(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Number of Unicode scalar values in `text`
///
/// Live-mode length thresholds count characters, not bytes.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

//! Answer normalization for typed vocabulary answers.
//!
//! Typed answers are compared case-insensitively and with collapsed
//! whitespace, but otherwise exactly: spelling (including umlauts and
//! Bengali vowel signs) is what the quiz is testing, so no accent or
//! combining-mark stripping happens here. NFC normalization makes
//! composed and decomposed forms of the same character compare equal,
//! which matters for Bengali input methods that emit decomposed marks.

use unicode_normalization::UnicodeNormalization;

/// Normalize a string for answer comparison: NFC, lowercase, collapsed
/// whitespace.
pub fn normalize_answer(s: &str) -> String {
    s.nfc()
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case- and whitespace-insensitive equality of a typed answer against the
/// expected translation.
pub fn answers_match(submitted: &str, expected: &str) -> bool {
    normalize_answer(submitted) == normalize_answer(expected)
}

//! Whitespace word splitting

/// Split text into maximal runs of non-whitespace characters
///
/// Any Unicode whitespace separates words; runs of whitespace never
/// produce empty words.
#[must_use]
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

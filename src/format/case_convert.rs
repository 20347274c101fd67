//! Case conversion for the `(cap)`, `(up)` and `(low)` commands
//!
//! Implements the three case modes:
//! - Capitalize: first character upper, the rest lower
//! - Upper: every character upper
//! - Lower: every character lower
//!
//! Case folding is ASCII-only; other characters pass through unchanged.

/// Case conversion mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    Capitalize,
    Upper,
    Lower,
}

/// Apply case conversion based on mode
#[must_use]
pub fn apply_case(word: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::Capitalize => capitalize(word),
        CaseMode::Upper => word.to_ascii_uppercase(),
        CaseMode::Lower => word.to_ascii_lowercase(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut result = String::with_capacity(word.len());
    result.push(first.to_ascii_uppercase());
    result.push_str(&chars.as_str().to_ascii_lowercase());
    result
}

/// Convert the last `count` words in place, newest first
///
/// Stops at the start of the slice, so a count larger than the number of
/// words converts all of them.
pub fn convert_last_words(words: &mut [String], mode: CaseMode, count: usize) {
    for word in words.iter_mut().rev().take(count) {
        *word = apply_case(word, mode);
    }
}

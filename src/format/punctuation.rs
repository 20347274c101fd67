//! Spacing around punctuation
//!
//! Two rewrites in a single pass over the joined text:
//! - every space right before punctuation is removed
//! - punctuation followed by anything other than a space or more punctuation
//!   gets one space after it

const PUNCTUATION: &[char] = &['.', '!', ',', '?', ':', ';'];

fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Normalize spacing around `. ! , ? : ;`
///
/// Idempotent: a second application changes nothing.
#[must_use]
pub fn fix_punctuation_spacing(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(current) = chars.next() {
        if is_punctuation(current) {
            let kept = result.trim_end_matches(' ').len();
            result.truncate(kept);
        }

        result.push(current);

        let next = chars.peek().copied();
        if is_punctuation(current) && next.is_some_and(|c| c != ' ' && !is_punctuation(c)) {
            result.push(' ');
        }
    }

    result
}

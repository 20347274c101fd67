//! Spacing inside single-quote spans
//!
//! Apostrophes toggle an open/closed state in document order. Inside a span,
//! the space right after the opening quote and the space right before the
//! closing quote are removed.

/// Remove spaces adjacent to `'` inside quote spans
#[must_use]
pub fn fix_single_quotes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());
    let mut in_quote = false;

    for (i, &current) in chars.iter().enumerate() {
        if current == '\'' {
            in_quote = !in_quote;
            result.push(current);
            continue;
        }

        if in_quote && current == ' ' {
            let after_quote = i > 0 && chars[i - 1] == '\'';
            let before_quote = chars.get(i + 1) == Some(&'\'');
            if after_quote || before_quote {
                continue;
            }
        }

        result.push(current);
    }

    result
}

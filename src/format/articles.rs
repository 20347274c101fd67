//! Indefinite article correction
//!
//! Rewrites `a` to `an` (and `A` to `An`) when the following word starts with a
//! vowel or `h`. Punctuation glued to either word is ignored for the check and
//! kept in the output, so `a, apple` becomes `an, apple`.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Letters that select "an" over "a"
const VOWELS_AND_H: &str = "aeiouh";

/// Any character in a Unicode punctuation category (`P*`)
///
/// Symbols such as `$`, `+` and `|` are not punctuation.
fn is_punctuation(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

fn takes_an(next_word: &str) -> bool {
    next_word
        .trim_start_matches(is_punctuation)
        .chars()
        .next()
        .is_some_and(|c| VOWELS_AND_H.contains(c.to_ascii_lowercase()))
}

/// Fix indefinite articles in a word sequence, in place
///
/// Single left-to-right pass over adjacent pairs; a rewritten article is never
/// looked at again.
pub fn fix_indefinite_articles(words: &mut [String]) {
    for i in 1..words.len() {
        let stripped = words[i - 1].trim_end_matches(is_punctuation);
        let replacement = match stripped {
            "a" => "an",
            "A" => "An",
            _ => continue,
        };

        if takes_an(&words[i]) {
            let trailing = &words[i - 1][stripped.len()..];
            words[i - 1] = format!("{replacement}{trailing}");
        }
    }
}

//! Inline command interpreter
//!
//! Walks the word sequence left to right and builds the result sequence.
//! Ordinary words are appended; command tokens are removed and rewrite the
//! words already emitted:
//! - `(cap,N)` / `(up,N)` / `(low,N)` convert the last N words
//! - `(cap)` / `(up)` / `(low)` convert the last word
//! - `(hex)` / `(bin)` replace the last word with its decimal value
//!
//! An indexed command whose closing `)` sits in the next token (`(up, 2)`) is
//! rejoined with exactly one token of lookahead.

use std::fmt;

use crate::error::{ConversionError, Radix};
use crate::format::{convert_base, convert_last_words};
use crate::parser::{is_indexed_candidate, parse_bare, parse_indexed, Command};

/// A recoverable problem found while applying commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Index of the affected word in the result sequence
    pub position: usize,
    pub error: ConversionError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

/// Output of [`convert_text`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interpreted {
    /// Words with every command applied and removed
    pub words: Vec<String>,
    /// Failed base conversions, in document order
    pub diagnostics: Vec<Diagnostic>,
}

/// Apply all inline commands in `words`
#[must_use]
pub fn convert_text(words: &[&str]) -> Interpreted {
    let mut out = Interpreted::default();
    let mut i = 0;

    while i < words.len() {
        let word = words[i];
        i += 1;

        if !word.starts_with('(') {
            out.words.push(word.to_string());
            continue;
        }

        if is_indexed_candidate(word) {
            let mut text = word.to_string();
            if !word.ends_with(')') {
                if let Some(next) = words.get(i) {
                    text.push(' ');
                    text.push_str(next);
                    i += 1;
                }
            }

            match parse_indexed(&text) {
                Some(command) => apply_command(&mut out, command, &text),
                None => log::debug!("Dropping malformed command {text:?}"),
            }
            continue;
        }

        match parse_bare(word) {
            Some(command) => apply_command(&mut out, command, word),
            None => out.words.push(word.to_string()),
        }
    }

    out
}

/// Run one command against the result sequence
///
/// Commands seen before any word has been emitted are dropped.
fn apply_command(out: &mut Interpreted, command: Command, source: &str) {
    let Some(last) = out.words.len().checked_sub(1) else {
        log::debug!("Dropping {source:?}: no preceding word");
        return;
    };

    match command {
        Command::Case { mode, count } => convert_last_words(&mut out.words, mode, count),
        Command::Hex => convert_word(out, last, Radix::Hex),
        Command::Bin => convert_word(out, last, Radix::Bin),
    }
}

/// Replace the word at `position` with its decimal value, or record why not
fn convert_word(out: &mut Interpreted, position: usize, radix: Radix) {
    match convert_base(&out.words[position], radix) {
        Ok(decimal) => out.words[position] = decimal,
        Err(error) => {
            log::debug!("{error}: {:?} left unchanged", error.word);
            out.diagnostics.push(Diagnostic { position, error });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> String {
        let words: Vec<&str> = text.split_whitespace().collect();
        convert_text(&words).words.join(" ")
    }

    #[test]
    fn test_plain_words_pass_through() {
        assert_eq!(run("nothing to do here"), "nothing to do here");
        assert_eq!(run(""), "");
    }

    #[test]
    fn test_bare_case_commands() {
        assert_eq!(run("fix (cap) this"), "Fix this");
        assert_eq!(run("loud (up) quiet"), "LOUD quiet");
        assert_eq!(run("QUIET (low) now"), "quiet now");
    }

    #[test]
    fn test_indexed_case_commands() {
        assert_eq!(run("one two three (up,2)"), "one TWO THREE");
        assert_eq!(
            run("it was the age of foolishness (cap, 6)"),
            "It Was The Age Of Foolishness"
        );
        assert_eq!(run("SO LOUD (low,1)"), "SO loud");
    }

    #[test]
    fn test_indexed_count_beyond_start() {
        assert_eq!(run("x (cap,5)"), "X");
    }

    #[test]
    fn test_indexed_zero_count() {
        assert_eq!(run("keep (up,0) going"), "keep going");
    }

    #[test]
    fn test_split_indexed_command() {
        assert_eq!(run("a b c (up, 2) d"), "a B C d");
    }

    #[test]
    fn test_split_lookahead_consumes_one_token_only() {
        // `)` stays behind as a word because only one token is merged
        assert_eq!(run("a b (up, 2 ) c"), "A B ) c");
    }

    #[test]
    fn test_malformed_indexed_dropped() {
        assert_eq!(run("a b (up,x) c"), "a b c");
        assert_eq!(run("a b (up,1,2) c"), "a b c");
        assert_eq!(run("say (hello, world) now"), "say now");
    }

    #[test]
    fn test_indexed_at_end_without_paren() {
        assert_eq!(run("a b (up,"), "a b");
        assert_eq!(run("a b (up,2"), "A B");
    }

    #[test]
    fn test_commands_without_preceding_word() {
        assert_eq!(run("(up) start"), "start");
        assert_eq!(run("(up,2) start"), "start");
        assert_eq!(run("(hex) start"), "start");
    }

    #[test]
    fn test_base_conversion() {
        assert_eq!(run("ff (hex)"), "255");
        assert_eq!(run("101 (bin)"), "5");
        assert_eq!(run("1E (hex) files were added"), "30 files were added");
    }

    #[test]
    fn test_base_conversion_failure_reported() {
        let result = convert_text(&["word", "zz", "(hex)", "end"]);
        assert_eq!(result.words, vec!["word", "zz", "end"]);
        assert_eq!(
            result.diagnostics,
            vec![Diagnostic {
                position: 1,
                error: ConversionError {
                    radix: Radix::Hex,
                    word: "zz".to_string(),
                },
            }]
        );
        assert_eq!(
            result.diagnostics[0].to_string(),
            "Error converting hex to dec"
        );
    }

    #[test]
    fn test_malformed_indexed_has_no_diagnostic() {
        let result = convert_text(&["a", "(up,x)"]);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_bracketed_word_kept() {
        assert_eq!(run("see (note) here"), "see (note) here");
        assert_eq!(run("a (b)"), "a (b)");
    }

    #[test]
    fn test_command_glued_to_word_is_a_word() {
        assert_eq!(run("ff(hex)"), "ff(hex)");
    }

    #[test]
    fn test_commands_chain() {
        assert_eq!(run("ff (hex) (up)"), "255");
        assert_eq!(run("hello world (up,2) (cap)"), "HELLO World");
    }
}

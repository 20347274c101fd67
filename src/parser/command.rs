//! Inline command parsing
//!
//! Recognizes the two command shapes embedded in document text:
//! - bare: `(cap)`, `(up)`, `(low)`, `(hex)`, `(bin)`
//! - indexed: `(cap,N)`, `(up,N)`, `(low,N)`, possibly written as `(up, N)`
//!   and split across two whitespace-delimited tokens
//!
//! Joining the split form is the interpreter's job; the functions here only see
//! the already merged text.

use crate::format::CaseMode;
use crate::parser::patterns::{BARE_COMMAND_RE, INDEXED_NAME_RE};

/// A parsed inline command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Change the case of the last `count` emitted words
    Case { mode: CaseMode, count: usize },
    /// Replace the last emitted word, read as base 16, with its decimal form
    Hex,
    /// Replace the last emitted word, read as base 2, with its decimal form
    Bin,
}

fn case_mode(name: &str) -> Option<CaseMode> {
    match name {
        "cap" => Some(CaseMode::Capitalize),
        "up" => Some(CaseMode::Upper),
        "low" => Some(CaseMode::Lower),
        _ => None,
    }
}

/// Whether a token must be treated as an indexed command
///
/// Such tokens never reach the output, even when they fail to parse.
#[must_use]
pub fn is_indexed_candidate(token: &str) -> bool {
    token.starts_with('(') && token.contains(',')
}

/// Parse an indexed command from (possibly merged) text like `(up, 2)`
///
/// Returns `None` for an unknown name, more than one comma, or a count that is
/// not a non-negative base-10 integer.
#[must_use]
pub fn parse_indexed(text: &str) -> Option<Command> {
    let (name, count) = text.split_once(',')?;
    if count.contains(',') {
        return None;
    }

    let caps = INDEXED_NAME_RE.captures(name.trim())?;
    let mode = case_mode(&caps[1])?;

    let count = count.trim().trim_end_matches(')').parse::<usize>().ok()?;
    Some(Command::Case { mode, count })
}

/// Parse a complete no-count command token
///
/// Case commands written without a count apply to one word.
#[must_use]
pub fn parse_bare(token: &str) -> Option<Command> {
    let caps = BARE_COMMAND_RE.captures(token)?;
    match &caps[1] {
        "hex" => Some(Command::Hex),
        "bin" => Some(Command::Bin),
        name => case_mode(name).map(|mode| Command::Case { mode, count: 1 }),
    }
}

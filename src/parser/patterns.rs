//! Precompiled regex patterns for inline command tokens
//!
//! Patterns are compiled once on first use via `LazyLock`.

use std::sync::LazyLock;

use regex::Regex;

/// A complete no-count command token, e.g. `(hex)` or `(cap)`
pub static BARE_COMMAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((cap|up|low|hex|bin)\)$").unwrap());

/// The name part of an indexed command, i.e. the text before the comma
pub static INDEXED_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((cap|up|low)$").unwrap());

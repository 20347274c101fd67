//! Text tokenizing and command recognition.
//!
//! This module turns raw document text into the pieces the interpreter works on:
//! - [`split_words`]: Splits text into whitespace-delimited tokens
//! - [`Command`]: Typed form of an inline `(name)` / `(name,count)` command
//! - [`patterns`]: Precompiled regex patterns for command names
//!
//! Commands are never nested or escaped. A token either is a command, looks like
//! an indexed command that fails to parse, or is an ordinary word.

pub mod command;
pub mod patterns;
pub mod words;

pub use command::{is_indexed_candidate, parse_bare, parse_indexed, Command};
pub use words::split_words;

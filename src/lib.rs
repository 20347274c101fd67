//! retext - Inline text commands and spacing cleanup
//!
//! Applies `(cap)`, `(up,2)`, `(hex)` style commands embedded in a document and
//! normalizes articles, punctuation spacing and quote spacing.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod parser;
pub mod process;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use error::{ConversionError, Radix, Result, RetextError};
pub use process::{fix_text, format_file, Diagnostic, FixReport};

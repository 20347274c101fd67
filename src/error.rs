//! Error types and result aliases for retext.
//!
//! This module defines the error handling infrastructure:
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used by the driver code
//! - [`RetextError`]: Fatal I/O failures, one variant per step of a run
//! - [`ConversionError`]: Recoverable failure of a `(hex)` / `(bin)` command

use std::fmt;

use anyhow::Result as AnyhowResult;
use thiserror::Error;

pub type Result<T> = AnyhowResult<T>;

/// Fatal errors that abort processing of a document.
///
/// The `Display` text is what the CLI prints before giving up.
#[derive(Debug, Error)]
pub enum RetextError {
    #[error("Error opening file: {0}")]
    Open(#[source] std::io::Error),

    #[error("Error reading file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Error creating file: {0}")]
    Create(#[source] std::io::Error),

    #[error("Error writing to destination file: {0}")]
    Write(#[source] std::io::Error),

    #[error("Error reading file: input too large ({size} bytes exceeds limit of {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },
}

/// Numeric base understood by the conversion commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Hex,
    Bin,
}

impl Radix {
    #[must_use]
    pub fn value(self) -> u32 {
        match self {
            Radix::Hex => 16,
            Radix::Bin => 2,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radix::Hex => f.write_str("hex"),
            Radix::Bin => f.write_str("bin"),
        }
    }
}

/// A word that could not be parsed in the requested base.
///
/// The word itself is left untouched in the output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error converting {radix} to dec")]
pub struct ConversionError {
    pub radix: Radix,
    pub word: String,
}

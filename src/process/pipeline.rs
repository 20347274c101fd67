//! Document pipeline
//!
//! Implements the main processing pipeline:
//! - Word stage: split, interpret commands, fix articles (optional)
//! - Text stage: join, punctuation spacing (optional), quote spacing (optional)

use std::io::{Read, Write};

use crate::config::Config;
use crate::error::RetextError;
use crate::format::{fix_indefinite_articles, fix_punctuation_spacing, fix_single_quotes};
use crate::parser::split_words;
use crate::process::interpreter::{convert_text, Diagnostic};
use crate::Result;

/// Result of running the pipeline over one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixReport {
    /// The transformed document
    pub text: String,
    /// Conversion failures, in document order
    pub diagnostics: Vec<Diagnostic>,
}

/// Run every enabled pass over `text`
#[must_use]
pub fn fix_text(text: &str, config: &Config) -> FixReport {
    let words = split_words(text);
    log::debug!("Split input into {} words", words.len());

    let interpreted = convert_text(&words);
    let mut words = interpreted.words;

    if config.fix_articles {
        fix_indefinite_articles(&mut words);
    }

    let mut text = words.join(" ");

    if config.fix_punctuation {
        text = fix_punctuation_spacing(&text);
    }
    if config.fix_quotes {
        text = fix_single_quotes(&text);
    }

    FixReport {
        text,
        diagnostics: interpreted.diagnostics,
    }
}

/// Read a whole document, refusing anything over `limit` bytes
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
pub fn read_source<R: Read>(input: R, limit: u64) -> std::result::Result<String, RetextError> {
    let mut contents = Vec::new();
    input
        .take(limit.saturating_add(1))
        .read_to_end(&mut contents)
        .map_err(RetextError::Read)?;

    let size = contents.len() as u64;
    if size > limit {
        return Err(RetextError::TooLarge { size, limit });
    }

    Ok(String::from_utf8_lossy(&contents).into_owned())
}

/// Write the transformed document; no trailing newline is added
pub fn write_output<W: Write>(output: &mut W, text: &str) -> std::result::Result<(), RetextError> {
    output
        .write_all(text.as_bytes())
        .and_then(|()| output.flush())
        .map_err(RetextError::Write)
}

/// Run the pipeline from `input` to `output`
///
/// Returns the conversion diagnostics; I/O failures are errors.
pub fn format_file<R: Read, W: Write>(
    input: R,
    output: &mut W,
    config: &Config,
    source_name: &str,
) -> Result<Vec<Diagnostic>> {
    let text = read_source(input, config.max_file_size)?;
    log::debug!("Read {} bytes from {source_name}", text.len());

    let report = fix_text(&text, config);
    write_output(output, &report.text)?;

    if !report.diagnostics.is_empty() {
        log::debug!(
            "{} conversion failure(s) in {source_name}",
            report.diagnostics.len()
        );
    }

    Ok(report.diagnostics)
}

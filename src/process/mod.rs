//! Document processing pipeline.
//!
//! This module runs a document through every stage in a fixed order:
//!
//! **Word stage:**
//! - Split the text into whitespace-delimited words
//! - Apply inline commands, which rewrite already emitted words
//! - Fix indefinite articles
//!
//! **Text stage:**
//! - Join the words with single spaces
//! - Normalize spacing around punctuation
//! - Normalize spacing inside single-quote spans
//!
//! The main entry points are [`fix_text`] for in-memory text and
//! [`format_file`], which reads any `Read` source and writes to any `Write` sink.

pub mod interpreter;
pub mod pipeline;

pub use interpreter::{convert_text, Diagnostic, Interpreted};
pub use pipeline::{fix_text, format_file, read_source, write_output, FixReport};

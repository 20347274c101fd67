//! Word and text rewriting passes.
//!
//! This module contains the transformations applied to a document:
//! - [`case_convert`]: Case changes behind `(cap)`, `(up)` and `(low)`
//! - [`base_convert`]: Hexadecimal and binary to decimal behind `(hex)` and `(bin)`
//! - [`articles`]: Turns "a" into "an" before vowel-or-h words
//! - [`punctuation`]: Fixes spaces around `. ! , ? : ;`
//! - [`quotes`]: Removes spaces just inside single-quote spans

pub mod articles;
pub mod base_convert;
pub mod case_convert;
pub mod punctuation;
pub mod quotes;

pub use articles::fix_indefinite_articles;
pub use base_convert::convert_base;
pub use case_convert::{apply_case, convert_last_words, CaseMode};
pub use punctuation::fix_punctuation_spacing;
pub use quotes::fix_single_quotes;

//! Command-line front end for the punctuation-aware tokenizer.
//!
//! The `punc` binary is a thin argument dispatcher over [`commands`].
//! Punctuation tables come from definition files ([`punct_file`]) or the
//! built-in operator set.

pub mod commands;
pub mod punct_file;

//! Low-level tokenizer core: punctuation table, byte cursor, raw scanner.
//!
//! This crate turns a byte buffer into `(kind, start, len, line)` records
//! and nothing more. It does not own token text, report diagnostics, or
//! manage a read cursor over the results. Those live in `punc_lexer`.
//!
//! # Scanning model
//!
//! The scanner walks the buffer once. At each token start it skips
//! separators, then tries, in order:
//!
//! 1. the longest registered punctuation literal at the current offset,
//! 2. a quoted span, when the quote character is enabled in [`ScanOptions`],
//! 3. a plain word running up to the next separator or punctuation.
//!
//! Malformed input never stops the scan. An unterminated quote is encoded
//! as [`RawKind::Quoted`] with `terminated: false` and absorbs the rest of
//! the buffer.

mod cursor;
mod options;
mod scanner;
mod table;

pub use cursor::{is_separator, Cursor};
pub use options::ScanOptions;
pub use scanner::{RawKind, RawToken, Scanner, EOF_LEN};
pub use table::{PunctuationEntry, PunctuationTable, Shadowed, TableError};

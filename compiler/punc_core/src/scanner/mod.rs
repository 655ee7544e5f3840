//! Single-pass scanner producing raw token records.
//!
//! The scanner operates on a [`Cursor`] and a borrowed
//! [`PunctuationTable`]. It produces [`RawToken`] values with zero heap
//! allocation: token text is not copied here, only boundaries and the
//! line each token starts on.
//!
//! # Design
//!
//! One token per call. Separators before a token are skipped (newlines
//! among them advance the line counter), then the first applicable rule
//! wins: longest punctuation match, quoted span, plain word. Every rule
//! consumes at least one byte, so zero-length tokens cannot occur and the
//! scan always terminates.

use crate::cursor::{is_separator, Cursor};
use crate::options::ScanOptions;
use crate::table::PunctuationTable;

/// Synthetic length reported for the end-of-stream token.
pub const EOF_LEN: usize = 3;

/// What a raw token is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawKind {
    /// Bytes up to the next separator or punctuation.
    Word,
    /// A registered punctuation literal.
    Punct { id: i32 },
    /// A quoted span including its delimiters. `terminated` is `false` when
    /// the closing quote was missing and the span ran to the end of input.
    Quoted { terminated: bool },
    /// The buffer is exhausted.
    Eof,
}

/// A token boundary record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub kind: RawKind,
    /// Byte offset of the first byte.
    pub start: usize,
    /// Byte length; [`EOF_LEN`] for [`RawKind::Eof`].
    pub len: usize,
    /// Zero-based line the token starts on.
    pub line: usize,
}

impl RawToken {
    /// Byte offset just past the token's source bytes.
    ///
    /// For [`RawKind::Eof`] this is the end of the buffer.
    #[inline]
    pub fn end(&self) -> usize {
        match self.kind {
            RawKind::Eof => self.start,
            _ => self.start + self.len,
        }
    }
}

/// Allocation-free scanner over one buffer.
///
/// Produces one token at a time. Anomalies are encoded in [`RawKind`], not
/// as `Result::Err`.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    table: &'a PunctuationTable,
    options: ScanOptions,
    /// Line of the most recently produced non-EOF token.
    last_line: Option<usize>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner at the start of `source`.
    pub fn new(source: &'a [u8], table: &'a PunctuationTable, options: ScanOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            table,
            options,
            last_line: None,
        }
    }

    /// Produce the next raw token.
    ///
    /// Returns [`RawKind::Eof`] once the source is exhausted, and keeps
    /// returning it on every later call.
    pub fn next_token(&mut self) -> RawToken {
        self.cursor.eat_while(is_separator);

        let start = self.cursor.pos();
        let line = self.cursor.line();
        let Some(byte) = self.cursor.current() else {
            return self.eof();
        };

        let kind = if let Some(entry) = self.table.match_longest(self.cursor.buf(), start) {
            self.cursor.advance_n(entry.byte_len());
            RawKind::Punct { id: entry.id() }
        } else if self.options.accepts_quote(byte) {
            let terminated = self.cursor.eat_quoted(byte);
            RawKind::Quoted { terminated }
        } else {
            self.word();
            RawKind::Word
        };

        self.last_line = Some(line);
        RawToken {
            kind,
            start,
            len: self.cursor.pos() - start,
            line,
        }
    }

    /// Consume a plain word. The current byte is known to start neither
    /// punctuation nor a quoted span, so at least one byte is consumed.
    fn word(&mut self) {
        self.cursor.advance();
        while let Some(byte) = self.cursor.current() {
            if is_separator(byte) || self.punct_at_cursor(byte) {
                break;
            }
            self.cursor.advance();
        }
    }

    #[inline]
    fn punct_at_cursor(&self, byte: u8) -> bool {
        self.table.starts_with_byte(byte)
            && self
                .table
                .match_longest(self.cursor.buf(), self.cursor.pos())
                .is_some()
    }

    fn eof(&self) -> RawToken {
        RawToken {
            kind: RawKind::Eof,
            start: self.cursor.pos(),
            len: EOF_LEN,
            line: self.last_line.map_or(0, |line| line + 1),
        }
    }
}

#[cfg(test)]
mod tests;

//! Owned tokens with source provenance.

use std::fmt;

use punc_core::{RawKind, RawToken, EOF_LEN};

use crate::LexError;

/// What a token is.
///
/// Quoted spans are [`TokenKind::Word`] tokens whose text keeps its quotes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Word,
    Punctuation,
    EndOfStream,
}

impl TokenKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Word => "Word",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::EndOfStream => "EndOfStream",
        }
    }
}

/// A token with owned text.
///
/// `line` and `offset` are zero-based. `len` is the byte length in the
/// source; for [`TokenKind::EndOfStream`] it is the synthetic
/// [`Token::EOF_LEN`] and `text` is empty.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// [`Token::WORD_ID`], [`Token::EOF_ID`], or the registered punctuation ID.
    pub id: i32,
    pub text: Box<[u8]>,
    pub line: usize,
    pub offset: usize,
    pub len: usize,
}

impl Token {
    /// ID carried by every word token.
    pub const WORD_ID: i32 = -1;
    /// ID carried by the end-of-stream sentinel.
    pub const EOF_ID: i32 = -2;
    /// Synthetic length of the end-of-stream sentinel.
    pub const EOF_LEN: usize = EOF_LEN;

    /// Materialize a raw token, copying its bytes out of `source`.
    pub(crate) fn from_raw(raw: RawToken, source: &[u8]) -> Result<Self, LexError> {
        let (kind, id) = match raw.kind {
            RawKind::Word | RawKind::Quoted { .. } => (TokenKind::Word, Self::WORD_ID),
            RawKind::Punct { id } => (TokenKind::Punctuation, id),
            RawKind::Eof => return Ok(Self::end_of_stream(raw.line, raw.start)),
        };

        let bytes = &source[raw.start..raw.end()];
        let mut text = Vec::new();
        text.try_reserve_exact(bytes.len())
            .map_err(LexError::allocation("token text"))?;
        text.extend_from_slice(bytes);

        Ok(Token {
            kind,
            id,
            text: text.into_boxed_slice(),
            line: raw.line,
            offset: raw.start,
            len: raw.len,
        })
    }

    /// The end-of-stream sentinel at `offset` on `line`.
    pub fn end_of_stream(line: usize, offset: usize) -> Self {
        Token {
            kind: TokenKind::EndOfStream,
            id: Self::EOF_ID,
            text: Box::default(),
            line,
            offset,
            len: Self::EOF_LEN,
        }
    }

    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// The text as UTF-8, if it is valid.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.text).ok()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfStream
    }

    #[inline]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    #[inline]
    pub fn is_punctuation(&self) -> bool {
        self.kind == TokenKind::Punctuation
    }

    /// Byte offset just past the token's source bytes.
    pub fn end(&self) -> usize {
        if self.is_eof() {
            self.offset
        } else {
            self.offset + self.len
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfStream => write!(f, "EndOfStream")?,
            TokenKind::Word => write!(f, "Word \"{}\"", self.text.escape_ascii())?,
            TokenKind::Punctuation => {
                write!(f, "Punctuation \"{}\" ({})", self.text.escape_ascii(), self.id)?;
            }
        }
        write!(f, " @ {}:{}", self.line, self.offset)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

//! Token stream with a get/peek/unget cursor.
//!
//! The token sequence is built once, eagerly, and never changes
//! afterwards; only the cursor moves. The last token is always the
//! end-of-stream sentinel, and every cursor operation clamps instead of
//! failing:
//!
//! - `get_token` past the end keeps returning the sentinel,
//! - `unget_token` at position 0 stays at 0,
//! - `peek_*` past the end returns the sentinel.
//!
//! [`TokenCursor`] is the same cursor detached from the stream: it borrows
//! the immutable token slice, so any number of readers (on any number of
//! threads) can walk one stream, each with its own position.

use punc_core::{PunctuationTable, ScanOptions};
use punc_diagnostic::Diagnostic;
use tracing::trace;

use crate::{tokenize_with_sink, LexError, LexOptions, Token};

/// Owned token sequence over a borrowed source buffer, plus a cursor.
#[derive(Clone, Debug)]
pub struct TokenStream<'src> {
    source: &'src [u8],
    /// Non-empty; the last element is the end-of-stream sentinel.
    tokens: Vec<Token>,
    /// Cursor in `0..=tokens.len()`.
    pos: usize,
}

impl<'src> TokenStream<'src> {
    /// Tokenize `source` with `table` and quote `options`, discarding
    /// diagnostics.
    ///
    /// Use [`tokenize_with_sink`] to receive them.
    pub fn new(
        source: &'src [u8],
        table: &PunctuationTable,
        options: ScanOptions,
    ) -> Result<Self, LexError> {
        let options = LexOptions::default().with_scan(options);
        tokenize_with_sink(source, table, &options, &mut |_: Diagnostic| {})
    }

    pub(crate) fn from_tokens(source: &'src [u8], tokens: Vec<Token>) -> Self {
        debug_assert!(
            tokens.last().is_some_and(Token::is_eof),
            "token sequence must end with the end-of-stream sentinel"
        );
        TokenStream {
            source,
            tokens,
            pos: 0,
        }
    }

    /// A detached cursor over this stream's tokens, starting at position 0.
    pub fn cursor(&self) -> TokenCursor<'_> {
        TokenCursor::new(&self.tokens)
    }

    /// Return the token at the cursor and advance past it.
    ///
    /// Once the sequence is exhausted, returns the end-of-stream sentinel
    /// without moving.
    pub fn get_token(&mut self) -> &Token {
        let mut cursor = TokenCursor {
            tokens: &self.tokens,
            pos: self.pos,
        };
        let token = cursor.get_token();
        self.pos = cursor.pos;
        token
    }

    /// Look one token past the one [`get_token`](Self::get_token) would
    /// return, without moving the cursor.
    pub fn peek_token(&self) -> &Token {
        self.at_pos().peek_token()
    }

    /// Look `n` tokens ahead without moving; `peek_nth(0)` is the token
    /// the next `get_token` returns.
    pub fn peek_nth(&self, n: usize) -> &Token {
        self.at_pos().peek_nth(n)
    }

    /// Step the cursor back one token, stopping at 0.
    pub fn unget_token(&mut self) {
        let mut cursor = self.at_pos();
        cursor.unget_token();
        self.pos = cursor.pos;
    }

    /// Line of the token at the cursor, or of the last real token once the
    /// sequence is exhausted (0 for an empty buffer).
    pub fn get_line(&self) -> usize {
        self.at_pos().get_line()
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor back to the first token.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Returns `true` once the next `get_token` would return the sentinel.
    pub fn is_exhausted(&self) -> bool {
        self.at_pos().is_exhausted()
    }

    /// Number of tokens, including the end-of-stream sentinel.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// All tokens, including the end-of-stream sentinel.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The buffer this stream was built from.
    pub fn source(&self) -> &'src [u8] {
        self.source
    }

    fn at_pos(&self) -> TokenCursor<'_> {
        TokenCursor {
            tokens: &self.tokens,
            pos: self.pos,
        }
    }
}

/// Independent read cursor over an immutable token sequence.
///
/// Obtained from [`TokenStream::cursor`]. The cursor is [`Copy`], so a
/// reader can snapshot its position and come back to it.
#[derive(Clone, Copy, Debug)]
pub struct TokenCursor<'a> {
    /// Non-empty; the last element is the end-of-stream sentinel.
    tokens: &'a [Token],
    /// Cursor in `0..=tokens.len()`.
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        TokenCursor { tokens, pos: 0 }
    }

    /// Index of the end-of-stream sentinel.
    #[inline]
    fn eof_index(&self) -> usize {
        self.tokens.len() - 1
    }

    /// See [`TokenStream::get_token`].
    pub fn get_token(&mut self) -> &'a Token {
        let index = self.pos.min(self.eof_index());
        self.pos = (self.pos + 1).min(self.tokens.len());
        let token = &self.tokens[index];
        trace!(
            pos = index,
            kind = token.kind.display_name(),
            line = token.line,
            offset = token.offset,
            "get_token"
        );
        token
    }

    /// See [`TokenStream::peek_token`].
    pub fn peek_token(&self) -> &'a Token {
        self.peek_nth(1)
    }

    /// See [`TokenStream::peek_nth`].
    pub fn peek_nth(&self, n: usize) -> &'a Token {
        let index = self.pos.saturating_add(n).min(self.eof_index());
        &self.tokens[index]
    }

    /// See [`TokenStream::unget_token`].
    pub fn unget_token(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// See [`TokenStream::get_line`].
    pub fn get_line(&self) -> usize {
        let real = &self.tokens[..self.eof_index()];
        match real.get(self.pos) {
            Some(token) => token.line,
            None => real.last().map_or(0, |token| token.line),
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn reset(&mut self) {
        self.pos = 0;
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.eof_index()
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

//! Bounds-checked byte cursor with line tracking.
//!
//! The cursor advances through the buffer byte-by-byte and keeps a
//! zero-based line counter in step with its position: every `'\n'` it
//! moves past, one at a time or in a bulk skip, bumps the line. A `'\r'`
//! is never a line break on its own, so `\r\n` counts once.
//!
//! Reads past the end return `None` rather than a sentinel, so the cursor
//! works directly on the caller's buffer without copying it.

/// Returns `true` for bytes that separate tokens and are never emitted.
#[inline]
pub fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Byte cursor over a borrowed source buffer.
///
/// The cursor is [`Copy`], so a scanner can snapshot it cheaply.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    /// Current read position (byte index into `buf`), never past `buf.len()`.
    pos: usize,
    /// Number of `'\n'` bytes in `buf[..pos]`.
    line: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0, line 0.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            line: 0,
        }
    }

    /// Returns the byte at the current position, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Zero-based line of the current position.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// The whole source buffer.
    #[inline]
    pub fn buf(&self) -> &'a [u8] {
        self.buf
    }

    /// The unconsumed tail of the buffer.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Advance by one byte. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(byte) = self.current() {
            if byte == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    /// Advance by `n` bytes, stopping at EOF.
    pub fn advance_n(&mut self, n: usize) {
        let end = self.pos.saturating_add(n).min(self.buf.len());
        self.line += memchr::memchr_iter(b'\n', &self.buf[self.pos..end]).count();
        self.pos = end;
    }

    /// Advance while `pred` returns `true` for the current byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(byte) = self.current() {
            if !pred(byte) {
                break;
            }
            self.advance();
        }
    }

    /// Consume a quoted span starting at the opening `quote`.
    ///
    /// A backslash escapes the byte after it, so `\"` stays inside the span
    /// while `\\"` closes it. Returns `true` if the closing quote was found;
    /// the cursor then sits just past it. Otherwise the cursor is at EOF.
    ///
    /// Uses `memchr2` to jump over ordinary span content.
    pub fn eat_quoted(&mut self, quote: u8) -> bool {
        debug_assert_eq!(self.current(), Some(quote), "cursor must be at the opening quote");
        self.advance();
        loop {
            let rest = self.rest();
            let Some(offset) = memchr::memchr2(quote, b'\\', rest) else {
                self.advance_n(rest.len());
                return false;
            };
            let found = rest[offset];
            self.advance_n(offset);
            if found == b'\\' {
                // Backslash plus the escaped byte; clamps at EOF.
                self.advance_n(2);
            } else {
                self.advance();
                return true;
            }
        }
    }
}

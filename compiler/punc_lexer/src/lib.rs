//! Punctuation-aware tokenizer.
//!
//! Turns a byte buffer into a [`TokenStream`] using a caller-supplied
//! [`PunctuationTable`]. The whole buffer is scanned eagerly in one pass;
//! the stream then hands tokens out through a get/peek/unget cursor.
//!
//! ```text
//! let table = PunctuationTable::with_entries([("(", 0), (")", 1), ("+", 2)])?;
//! let mut stream = TokenStream::new(b"(a+b)", &table, ScanOptions::empty())?;
//! while !stream.get_token().is_eof() { /* ... */ }
//! ```
//!
//! Scanning never fails on malformed input. Anomalies such as an
//! unterminated quote are recovered locally and reported to an optional
//! [`DiagnosticSink`] via [`tokenize_with_sink`].

mod error;
mod options;
mod stream;
mod token;

use std::time::Instant;

use punc_core::{RawKind, RawToken, Scanner};
use punc_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode};
use tracing::{debug, trace};

pub use error::LexError;
pub use options::LexOptions;
pub use punc_core::{PunctuationEntry, PunctuationTable, ScanOptions, TableError};
pub use stream::{TokenCursor, TokenStream};
pub use token::{Token, TokenKind};

/// Tokenize `source`, discarding diagnostics.
pub fn tokenize<'src>(
    source: &'src [u8],
    table: &PunctuationTable,
    options: &LexOptions,
) -> Result<TokenStream<'src>, LexError> {
    tokenize_with_sink(source, table, options, &mut |_: Diagnostic| {})
}

/// Tokenize `source`, reporting recovered anomalies to `sink`.
///
/// The resulting token sequence is identical to [`tokenize`]'s; the sink
/// only observes. Each anomaly is reported once.
pub fn tokenize_with_sink<'src>(
    source: &'src [u8],
    table: &PunctuationTable,
    options: &LexOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<TokenStream<'src>, LexError> {
    let started = Instant::now();
    let mut scanner = Scanner::new(source, table, options.scan);
    let mut tokens: Vec<Token> = Vec::new();

    loop {
        let raw = scanner.next_token();
        if raw.kind == (RawKind::Quoted { terminated: false }) {
            sink.report(unterminated_quote(&raw, source, options));
        }

        let token = Token::from_raw(raw, source)?;
        trace!(
            kind = token.kind.display_name(),
            id = token.id,
            line = token.line,
            offset = token.offset,
            len = token.len,
            "token"
        );

        tokens
            .try_reserve(1)
            .map_err(LexError::allocation("token list"))?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }

    debug!(
        source = %options.source_name,
        bytes = source.len(),
        tokens = tokens.len(),
        elapsed = ?started.elapsed(),
        "tokenized"
    );
    Ok(TokenStream::from_tokens(source, tokens))
}

fn unterminated_quote(raw: &RawToken, source: &[u8], options: &LexOptions) -> Diagnostic {
    let quote = char::from(source[raw.start]);
    Diagnostic::warning(ErrorCode::L0001)
        .with_message(format!(
            "missing closing `{quote}`; the quoted span extends to the end of input"
        ))
        .with_source(&options.source_name)
        .with_scope(&options.scope_name)
        .at(raw.line, raw.start)
}

/// Report every punctuation entry that can never match.
///
/// An entry is unreachable when an identical literal was registered
/// before it. Each report's `line` is the registration index of the
/// unreachable entry (offset 0). Returns the number of reports.
pub fn check_table(
    table: &PunctuationTable,
    options: &LexOptions,
    sink: &mut dyn DiagnosticSink,
) -> usize {
    let shadowed = table.shadowed();
    for entry in &shadowed {
        let (Some(unreachable), Some(winner)) =
            (table.get(entry.index), table.get(entry.shadowed_by))
        else {
            continue;
        };
        sink.report(
            Diagnostic::warning(ErrorCode::L0002)
                .with_message(format!(
                    "punctuation `{}` (id {}) is unreachable; entry {} (id {}) always matches first",
                    unreachable.literal().escape_ascii(),
                    unreachable.id(),
                    entry.shadowed_by,
                    winner.id()
                ))
                .with_source(&options.source_name)
                .with_scope(&options.scope_name)
                .at(entry.index, 0),
        );
    }
    shadowed.len()
}

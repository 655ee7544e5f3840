//! Punctuation definition files.
//!
//! One entry per line, ID first:
//!
//! ```text
//! # shifts before their single-byte prefixes
//! 0 <<
//! 1 >>
//! 2 (
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Entries are
//! registered in file order.

use punc_lexer::PunctuationTable;

use crate::commands::CliError;

/// Operators registered when no definition file is given.
pub const DEFAULT_PUNCTUATION: &[(&str, i32)] = &[
    ("<<", 0),
    (">>", 1),
    ("(", 2),
    (")", 3),
    ("[", 4),
    ("]", 5),
    ("+", 6),
    ("-", 7),
    ("*", 8),
    ("/", 9),
];

/// Build the table of [`DEFAULT_PUNCTUATION`].
pub fn default_table() -> Result<PunctuationTable, CliError> {
    Ok(PunctuationTable::with_entries(DEFAULT_PUNCTUATION.iter().copied())?)
}

/// Parse a definition file. `origin` names the file in error messages.
pub fn parse_punctuation(text: &str, origin: &str) -> Result<PunctuationTable, CliError> {
    let mut table = PunctuationTable::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let syntax = |message: String| CliError::PunctuationSyntax {
            path: origin.to_string(),
            line: index + 1,
            message,
        };

        let Some((id, literal)) = line.split_once(char::is_whitespace) else {
            return Err(syntax(format!("expected `<id> <literal>`, found `{line}`")));
        };
        let id: i32 = id
            .parse()
            .map_err(|_| syntax(format!("invalid punctuation id `{id}`")))?;
        table.add(literal.trim(), id)?;
    }
    Ok(table)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

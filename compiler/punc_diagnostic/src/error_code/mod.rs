//! Error codes for all tokenizer diagnostics.
//!
//! Each code is a unique identifier (e.g., `L0001`). Codes are stable and
//! never reused, so they can be searched for and filtered on.

use std::fmt;

/// Error codes for all tokenizer diagnostics.
///
/// Format: L#### for lexical anomalies.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Quoted span without a closing quote
    L0001,
    /// Punctuation entry shadowed by an identical earlier entry
    L0002,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[ErrorCode::L0001, ErrorCode::L0002];

    /// The code as written in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::L0001 => "L0001",
            ErrorCode::L0002 => "L0002",
        }
    }

    /// One-line explanation of the code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::L0001 => "unterminated quoted span",
            ErrorCode::L0002 => "unreachable punctuation entry",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a code string like `"L0001"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and
/// [`ErrorCode::as_str()`], so it stays exhaustive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

//! Core diagnostic type for structured warning reporting.

use std::fmt;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A located report about something the tokenizer recovered from.
///
/// `line` and `offset` are zero-based, matching token positions.
///
/// # Example
///
/// ```text
/// warning[L0001]: unterminated quoted span extends to end of input
///   --> script.txt:3:41 (scope: global)
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    /// Name of the buffer being scanned (usually a file path).
    pub source_name: String,
    /// Name of the scope the scan ran in.
    pub scope_name: String,
    /// Zero-based line of the anomaly.
    pub line: usize,
    /// Zero-based byte offset of the anomaly.
    pub offset: usize,
}

impl Diagnostic {
    /// Create a warning with the code's description as its message.
    pub fn warning(code: ErrorCode) -> Self {
        Self::new(code, Severity::Warning)
    }


    fn new(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: code.description().to_string(),
            source_name: String::new(),
            scope_name: String::new(),
            line: 0,
            offset: 0,
        }
    }

    /// Replace the severity, e.g. to promote a warning to an error.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_source(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = source_name.into();
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope_name: impl Into<String>) -> Self {
        self.scope_name = scope_name.into();
        self
    }

    /// Set the zero-based line and byte offset.
    #[must_use]
    pub fn at(mut self, line: usize, offset: usize) -> Self {
        self.line = line;
        self.offset = offset;
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        write!(f, "  --> {}:{}:{}", self.source_name, self.line, self.offset)?;
        if !self.scope_name.is_empty() {
            write!(f, " (scope: {})", self.scope_name)?;
        }
        Ok(())
    }
}

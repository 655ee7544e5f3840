//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! Features:
//! - Report limits to prevent overwhelming output
//! - Deduplication of repeated reports for the same anomaly
//! - Optional promotion of warnings to errors
//! - Stable ordering by source position on flush

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::{Diagnostic, DiagnosticSink, ErrorCode, Severity};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of diagnostics kept (0 = unlimited).
    pub limit: usize,
    /// Drop reports with the same code, source, line and offset as an
    /// earlier one.
    pub deduplicate: bool,
    /// Promote every warning to an error on arrival.
    pub deny_warnings: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            limit: 100,
            deduplicate: true,
            deny_warnings: false,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            limit: 0,
            deduplicate: false,
            deny_warnings: false,
        }
    }
}

/// Identity of one anomaly, for deduplication.
type AnomalyKey = (ErrorCode, String, usize, usize);

/// Queue for collecting, deduplicating, and sorting diagnostics.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.add(diagnostic);
/// // ... add more diagnostics
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    seen: FxHashSet<AnomalyKey>,
    error_count: usize,
    dropped: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            seen: FxHashSet::default(),
            error_count: 0,
            dropped: 0,
            config,
        }
    }

    /// Add a diagnostic.
    ///
    /// Returns `true` if the diagnostic was kept, `false` if it was filtered.
    pub fn add(&mut self, mut diag: Diagnostic) -> bool {
        if self.config.deduplicate {
            let key = (diag.code, diag.source_name.clone(), diag.line, diag.offset);
            if !self.seen.insert(key) {
                trace!(
                    code = %diag.code,
                    line = diag.line,
                    offset = diag.offset,
                    "duplicate diagnostic dropped"
                );
                return false;
            }
        }

        if self.config.limit > 0 && self.diagnostics.len() >= self.config.limit {
            self.dropped += 1;
            trace!(code = %diag.code, limit = self.config.limit, "diagnostic limit reached");
            return false;
        }

        if self.config.deny_warnings && diag.severity == Severity::Warning {
            diag = diag.with_severity(Severity::Error);
        }
        if diag.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(diag);
        true
    }

    /// Number of diagnostics currently held.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of held diagnostics with error severity.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Number of diagnostics rejected because the limit was reached.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Take all held diagnostics, sorted by source, line, then offset.
    ///
    /// The sort is stable, so reports at the same position keep arrival
    /// order. Deduplication state is kept across flushes.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut out = std::mem::take(&mut self.diagnostics);
        out.sort_by(|a, b| {
            (a.source_name.as_str(), a.line, a.offset).cmp(&(
                b.source_name.as_str(),
                b.line,
                b.offset,
            ))
        });
        self.error_count = 0;
        out
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}

//! Per-scan configuration.

use punc_core::ScanOptions;

/// Options for one tokenize call.
///
/// `source_name` and `scope_name` only label diagnostics; they never
/// change the token sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LexOptions {
    /// Quote handling bits.
    pub scan: ScanOptions,
    /// Name of the buffer, usually a file path.
    pub source_name: String,
    /// Name of the scope the buffer belongs to.
    pub scope_name: String,
}

impl Default for LexOptions {
    fn default() -> Self {
        LexOptions {
            scan: ScanOptions::empty(),
            source_name: "<input>".to_string(),
            scope_name: "global".to_string(),
        }
    }
}

impl LexOptions {
    #[must_use]
    pub fn with_scan(mut self, scan: ScanOptions) -> Self {
        self.scan = scan;
        self
    }

    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }

    #[must_use]
    pub fn with_scope_name(mut self, name: impl Into<String>) -> Self {
        self.scope_name = name.into();
        self
    }
}

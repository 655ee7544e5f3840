//! Destination for diagnostics produced during a scan.

use crate::Diagnostic;

/// Receives diagnostics as they are produced.
///
/// A sink is optional for correct tokenization: the token sequence is the
/// same whether or not anything listens. Each anomaly is reported once.
///
/// Any `FnMut(Diagnostic)` closure is a sink:
///
/// ```text
/// let mut seen = Vec::new();
/// tokenize_with_sink(source, &table, &options, &mut |d| seen.push(d))?;
/// ```
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(Diagnostic),
{
    fn report(&mut self, diagnostic: Diagnostic) {
        self(diagnostic);
    }
}

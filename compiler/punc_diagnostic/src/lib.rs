//! Diagnostic system for non-fatal scan warnings.
//!
//! Scanning never fails on malformed input; it recovers and reports what
//! it recovered from. A report carries:
//! - an error code for searchability,
//! - a clear message (what went wrong),
//! - the source name, scope name, zero-based line and byte offset (where).
//!
//! Reports are delivered to a [`DiagnosticSink`]. Any `FnMut(Diagnostic)`
//! closure is a sink, and [`DiagnosticQueue`] collects, deduplicates and
//! sorts them.
//!
//! ```text
//! let mut queue = DiagnosticQueue::new();
//! let stream = tokenize_with_sink(source, &table, &options, &mut queue)?;
//! for diagnostic in queue.flush() {
//!     eprintln!("{diagnostic}");
//! }
//! ```

mod diagnostic;
mod error_code;
mod queue;
mod sink;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
pub use sink::DiagnosticSink;

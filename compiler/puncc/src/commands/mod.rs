//! Command handlers for the `punc` CLI.
//!
//! Each submodule implements one command. Shared pieces (option parsing,
//! file reading, table loading, the per-file lex pipeline) live here in
//! the module root.

use std::path::Path;
use std::sync::Once;

use punc_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue};
use punc_lexer::{
    tokenize_with_sink, LexError, LexOptions, PunctuationTable, ScanOptions, TableError, Token,
};
use rayon::prelude::*;
use tracing::debug;

use crate::punct_file::{default_table, parse_punctuation};

mod check;
mod demo;
mod explain;
mod lex;
mod table;

pub use check::check_files;
pub use demo::run_demo;
pub use explain::explain_code;
pub use lex::lex_files;
pub use table::print_table;

/// Name used in diagnostics for the built-in punctuation table.
pub const BUILTIN_TABLE_NAME: &str = "<builtin>";

/// Everything that can stop a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}:{line}: {message}")]
    PunctuationSyntax {
        path: String,
        line: usize,
        message: String,
    },
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid value for {flag}: '{value}'")]
    InvalidValue { flag: &'static str, value: String },
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Lex(#[from] LexError),
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=punc_lexer=debug`
/// or `RUST_LOG=trace` for every token.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Options shared by the file commands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub scan: ScanOptions,
    /// Punctuation definition file; the built-in table when `None`.
    pub punct: Option<String>,
    /// Scope name for diagnostics.
    pub scope: Option<String>,
    /// Maximum diagnostics kept per file (0 = unlimited).
    pub limit: Option<usize>,
    /// Treat every diagnostic as an error.
    pub deny_warnings: bool,
    /// Positional arguments, in order.
    pub paths: Vec<String>,
}

impl CliOptions {
    /// Lex options for one file.
    pub fn lex_options(&self, source_name: &str) -> LexOptions {
        let options = LexOptions::default()
            .with_scan(self.scan)
            .with_source_name(source_name);
        match &self.scope {
            Some(scope) => options.with_scope_name(scope.as_str()),
            None => options,
        }
    }

    pub fn diagnostic_config(&self) -> DiagnosticConfig {
        let mut config = DiagnosticConfig::default();
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        config.deny_warnings = self.deny_warnings;
        config
    }

    /// Name of the table source, for diagnostics.
    pub fn table_name(&self) -> &str {
        self.punct.as_deref().unwrap_or(BUILTIN_TABLE_NAME)
    }
}

/// Parse command arguments (everything after the command name).
pub fn parse_options(args: &[String]) -> Result<CliOptions, CliError> {
    let mut options = CliOptions::default();
    for arg in args {
        if arg == "--single-quotes" {
            options.scan |= ScanOptions::ACCEPT_SINGLE_QUOTES;
        } else if arg == "--double-quotes" {
            options.scan |= ScanOptions::ACCEPT_DOUBLE_QUOTES;
        } else if arg == "--quotes" {
            options.scan |= ScanOptions::all();
        } else if arg == "--deny-warnings" {
            options.deny_warnings = true;
        } else if let Some(path) = arg.strip_prefix("--punct=") {
            options.punct = Some(path.to_string());
        } else if let Some(scope) = arg.strip_prefix("--scope=") {
            options.scope = Some(scope.to_string());
        } else if let Some(limit) = arg.strip_prefix("--limit=") {
            let limit = limit.parse().map_err(|_| CliError::InvalidValue {
                flag: "--limit",
                value: limit.to_string(),
            })?;
            options.limit = Some(limit);
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.clone()));
        } else {
            options.paths.push(arg.clone());
        }
    }
    Ok(options)
}

fn io_error(path: &str, e: std::io::Error) -> CliError {
    let message = match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    };
    CliError::Io { message, source: e }
}

/// Read a source buffer. Any bytes are accepted.
pub(crate) fn read_file(path: &str) -> Result<Vec<u8>, CliError> {
    std::fs::read(Path::new(path)).map_err(|e| io_error(path, e))
}

/// Load the punctuation table selected by `options`.
pub fn load_table(options: &CliOptions) -> Result<PunctuationTable, CliError> {
    let Some(path) = &options.punct else {
        return default_table();
    };
    let text = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    let table = parse_punctuation(&text, path)?;
    debug!(path = %path, entries = table.len(), "loaded punctuation table");
    Ok(table)
}

/// Tokens and diagnostics for one lexed buffer.
#[derive(Clone, Debug)]
pub struct LexedFile {
    pub path: String,
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
    /// How many of `diagnostics` have error severity.
    pub errors: usize,
    /// Diagnostics dropped by the per-file limit.
    pub dropped: usize,
}

/// Tokenize one in-memory buffer, collecting its diagnostics.
pub fn lex_buffer(
    path: &str,
    source: &[u8],
    table: &PunctuationTable,
    options: &CliOptions,
) -> Result<LexedFile, CliError> {
    let mut queue = DiagnosticQueue::with_config(options.diagnostic_config());
    let stream = tokenize_with_sink(source, table, &options.lex_options(path), &mut queue)?;
    Ok(LexedFile {
        path: path.to_string(),
        tokens: stream.tokens().to_vec(),
        errors: queue.error_count(),
        dropped: queue.dropped(),
        diagnostics: queue.flush(),
    })
}

/// Read and tokenize every path in `options`, in parallel.
///
/// Results come back in argument order.
pub(crate) fn lex_paths(
    table: &PunctuationTable,
    options: &CliOptions,
) -> Vec<Result<LexedFile, CliError>> {
    debug!(files = options.paths.len(), "lexing");
    options
        .paths
        .par_iter()
        .map(|path| {
            let source = read_file(path)?;
            lex_buffer(path, &source, table, options)
        })
        .collect()
}

/// Print a file's diagnostics to stderr. Returns how many were printed.
pub(crate) fn emit_diagnostics(file: &LexedFile) -> usize {
    for diagnostic in &file.diagnostics {
        eprintln!("{diagnostic}");
    }
    if file.dropped > 0 {
        eprintln!(
            "note: {} more diagnostic(s) for '{}' suppressed",
            file.dropped, file.path
        );
    }
    file.diagnostics.len()
}

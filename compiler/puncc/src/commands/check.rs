//! The `check` command: report diagnostics without printing tokens.

use punc_diagnostic::{Diagnostic, DiagnosticQueue};
use punc_lexer::{check_table, PunctuationTable};

use super::{emit_diagnostics, lex_paths, load_table, CliOptions};

/// Lint the punctuation table, then lex every file and print only
/// diagnostics and a summary.
///
/// Returns the process exit code: 1 if any file failed or any diagnostic
/// has error severity (every one does under `--deny-warnings`).
pub fn check_files(options: &CliOptions) -> i32 {
    let table = match load_table(options) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };

    let (table_reports, mut denied) = lint_table(&table, options);
    for diagnostic in &table_reports {
        eprintln!("{diagnostic}");
    }

    let mut reported = table_reports.len();
    let mut failed = 0usize;
    let mut checked = 0usize;
    for result in lex_paths(&table, options) {
        match result {
            Ok(file) => {
                reported += emit_diagnostics(&file);
                denied |= file.errors > 0;
                checked += 1;
            }
            Err(e) => {
                eprintln!("error: {e}");
                failed += 1;
            }
        }
    }

    println!("Checked {checked} file(s): {reported} diagnostic(s), {failed} failure(s)");
    i32::from(denied || failed > 0)
}

/// Table lint reports, sorted, and whether any of them is an error.
pub(super) fn lint_table(
    table: &PunctuationTable,
    options: &CliOptions,
) -> (Vec<Diagnostic>, bool) {
    let mut queue = DiagnosticQueue::with_config(options.diagnostic_config());
    check_table(table, &options.lex_options(options.table_name()), &mut queue);
    let denied = queue.has_errors();
    (queue.flush(), denied)
}

//! The `table` command: list the active punctuation table.

use punc_diagnostic::Diagnostic;
use punc_lexer::{check_table, PunctuationTable};

use super::{load_table, CliOptions};

/// Print every entry in registration order, then any unreachable entries.
pub fn print_table(options: &CliOptions) -> i32 {
    let table = match load_table(options) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };

    println!(
        "Punctuation from '{}' ({} entries):",
        options.table_name(),
        table.len()
    );
    print_entries(&table);
    check_table(
        &table,
        &options.lex_options(options.table_name()),
        &mut |diagnostic: Diagnostic| eprintln!("{diagnostic}"),
    );
    0
}

pub(super) fn print_entries(table: &PunctuationTable) {
    for entry in table {
        println!(
            "  Punctuation: \"{}\" ({})",
            entry.literal().escape_ascii(),
            entry.id()
        );
    }
}

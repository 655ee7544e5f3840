//! The `lex` command: tokenize files and print their token streams.

use super::{emit_diagnostics, lex_paths, load_table, CliOptions};

/// Lex every file in `options` and print its tokens.
///
/// Files are lexed in parallel and printed in argument order. Returns the
/// process exit code: 1 if any file could not be read or lexed, or any
/// diagnostic has error severity.
pub fn lex_files(options: &CliOptions) -> i32 {
    let table = match load_table(options) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };

    let mut failed = false;
    for result in lex_paths(&table, options) {
        match result {
            Ok(file) => {
                println!("Tokens for '{}' ({} tokens):", file.path, file.tokens.len());
                for token in &file.tokens {
                    println!("  {token}");
                }
                emit_diagnostics(&file);
                failed |= file.errors > 0;
            }
            Err(e) => {
                eprintln!("error: {e}");
                failed = true;
            }
        }
    }
    i32::from(failed)
}

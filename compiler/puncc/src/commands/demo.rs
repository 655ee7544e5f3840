//! The `demo` command: tokenize a built-in script with the built-in table.

use punc_lexer::{ScanOptions, TokenStream};

use super::table::print_entries;
use crate::punct_file::default_table;

/// Script shown by `punc demo`.
pub const DEMO_SCRIPT: &str = "( hello\t a>>b world + dingles)\n[and now]";

/// Print the built-in table, then pull tokens one at a time until the
/// end of the stream.
pub fn run_demo() -> i32 {
    let table = match default_table() {
        Ok(table) => table,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    print_entries(&table);

    let options = ScanOptions::ACCEPT_SINGLE_QUOTES | ScanOptions::ACCEPT_DOUBLE_QUOTES;
    let mut stream = match TokenStream::new(DEMO_SCRIPT.as_bytes(), &table, options) {
        Ok(stream) => stream,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };

    loop {
        let token = stream.get_token();
        if token.is_eof() {
            break;
        }
        println!(
            "Token (id:{}) line {}: [{}]",
            token.id,
            token.line,
            token.text().escape_ascii()
        );
    }
    0
}

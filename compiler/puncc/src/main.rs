//! Punctuation Tokenizer CLI

use puncc::commands::{
    check_files, explain_code, init_tracing, lex_files, parse_options, print_table, run_demo,
    CliOptions,
};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let code = match command.as_str() {
        "lex" => {
            let options = options_or_exit(&args[2..]);
            if options.paths.is_empty() {
                eprintln!("Usage: punc lex <file>... [options]");
                std::process::exit(1);
            }
            lex_files(&options)
        }
        "check" => {
            let options = options_or_exit(&args[2..]);
            check_files(&options)
        }
        "table" => {
            let options = options_or_exit(&args[2..]);
            print_table(&options)
        }
        "demo" => run_demo(),
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: punc explain <CODE>");
                eprintln!("Example: punc explain L0001");
                std::process::exit(1);
            }
            explain_code(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("punc {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            1
        }
    };

    if code != 0 {
        std::process::exit(code);
    }
}

fn options_or_exit(args: &[String]) -> CliOptions {
    match parse_options(args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Punctuation-aware tokenizer");
    println!();
    println!("Usage: punc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>...        Tokenize files and display tokens");
    println!("  check [file]...      Report diagnostics for the table and files");
    println!("  table                List the active punctuation table");
    println!("  demo                 Tokenize a built-in sample script");
    println!("  explain <code>       Explain a diagnostic code (e.g., L0001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --single-quotes      Scan '...' as one word");
    println!("  --double-quotes      Scan \"...\" as one word");
    println!("  --quotes             Both of the above");
    println!("  --punct=<file>       Punctuation definitions (`<id> <literal>` per line)");
    println!("  --scope=<name>       Scope name shown in diagnostics (default: global)");
    println!("  --limit=<n>          Max diagnostics per file (default: 100, 0 = unlimited)");
    println!("  --deny-warnings      Report diagnostics as errors (exit code 1)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable tracing, e.g. RUST_LOG=punc_lexer=debug");
    println!();
    println!("Examples:");
    println!("  punc lex script.txt --quotes");
    println!("  punc check src/*.txt --punct=ops.txt");
    println!("  punc table --punct=ops.txt");
}

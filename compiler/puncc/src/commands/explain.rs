//! The `explain` command: describe a diagnostic code.

use punc_diagnostic::ErrorCode;

/// Print the description of `code_str`, or list the known codes.
pub fn explain_code(code_str: &str) -> i32 {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown diagnostic code: {code_str}");
        eprintln!();
        eprintln!("Known codes:");
        for code in ErrorCode::ALL {
            eprintln!("  {code}  {}", code.description());
        }
        return 1;
    };
    println!("{code}: {}", code.description());
    0
}

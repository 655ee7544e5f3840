use super::*;
use pretty_assertions::assert_eq;

fn table(entries: &[(&str, i32)]) -> PunctuationTable {
    let mut table = PunctuationTable::new();
    for &(literal, id) in entries {
        if table.add(literal, id).is_err() {
            panic!("cannot register {literal:?}");
        }
    }
    table
}

/// Scan `source` to EOF and return `(kind, text, line)` for every token.
fn scan<'s>(
    source: &'s str,
    table: &PunctuationTable,
    options: ScanOptions,
) -> Vec<(RawKind, &'s str, usize)> {
    let mut scanner = Scanner::new(source.as_bytes(), table, options);
    let mut out = Vec::new();
    loop {
        let token = scanner.next_token();
        if token.kind == RawKind::Eof {
            break;
        }
        out.push((token.kind, &source[token.start..token.end()], token.line));
    }
    out
}

// === Punctuation ===

#[test]
fn parenthesized_sum() {
    let table = table(&[("(", 0), (")", 1), ("+", 2)]);
    assert_eq!(
        scan("(a+b)", &table, ScanOptions::empty()),
        vec![
            (RawKind::Punct { id: 0 }, "(", 0),
            (RawKind::Word, "a", 0),
            (RawKind::Punct { id: 2 }, "+", 0),
            (RawKind::Word, "b", 0),
            (RawKind::Punct { id: 1 }, ")", 0),
        ]
    );
}

#[test]
fn longest_punctuation_wins() {
    let table = table(&[("<", 0), ("<<", 1)]);
    assert_eq!(
        scan("<<x", &table, ScanOptions::empty()),
        vec![(RawKind::Punct { id: 1 }, "<<", 0), (RawKind::Word, "x", 0)]
    );
}

#[test]
fn punctuation_splits_words() {
    let table = table(&[(">>", 5)]);
    assert_eq!(
        scan("a>>b", &table, ScanOptions::empty()),
        vec![
            (RawKind::Word, "a", 0),
            (RawKind::Punct { id: 5 }, ">>", 0),
            (RawKind::Word, "b", 0),
        ]
    );
}

#[test]
fn partial_multibyte_punctuation_is_word() {
    let table = table(&[(">>", 5)]);
    assert_eq!(
        scan("a>b", &table, ScanOptions::empty()),
        vec![(RawKind::Word, "a>b", 0)]
    );
}

// === Separators & Lines ===

#[test]
fn separators_are_skipped() {
    let table = PunctuationTable::new();
    assert_eq!(
        scan("  hello\t world  ", &table, ScanOptions::empty()),
        vec![(RawKind::Word, "hello", 0), (RawKind::Word, "world", 0)]
    );
}

#[test]
fn newline_advances_line() {
    let table = PunctuationTable::new();
    assert_eq!(
        scan("a\nb", &table, ScanOptions::empty()),
        vec![(RawKind::Word, "a", 0), (RawKind::Word, "b", 1)]
    );
}

#[test]
fn crlf_counts_one_line() {
    let table = PunctuationTable::new();
    assert_eq!(
        scan("a\r\nb\r\n\r\nc", &table, ScanOptions::empty()),
        vec![
            (RawKind::Word, "a", 0),
            (RawKind::Word, "b", 1),
            (RawKind::Word, "c", 3),
        ]
    );
}

#[test]
fn demo_script_lines() {
    let table = table(&[("<<", 0), (">>", 1), ("(", 2), (")", 3), ("[", 4), ("]", 5), ("+", 6)]);
    let options = ScanOptions::ACCEPT_DOUBLE_QUOTES | ScanOptions::ACCEPT_SINGLE_QUOTES;
    assert_eq!(
        scan("( hello\t a>>b world + dingles)\n[and now]", &table, options),
        vec![
            (RawKind::Punct { id: 2 }, "(", 0),
            (RawKind::Word, "hello", 0),
            (RawKind::Word, "a", 0),
            (RawKind::Punct { id: 1 }, ">>", 0),
            (RawKind::Word, "b", 0),
            (RawKind::Word, "world", 0),
            (RawKind::Punct { id: 6 }, "+", 0),
            (RawKind::Word, "dingles", 0),
            (RawKind::Punct { id: 3 }, ")", 0),
            (RawKind::Punct { id: 4 }, "[", 1),
            (RawKind::Word, "and", 1),
            (RawKind::Word, "now", 1),
            (RawKind::Punct { id: 5 }, "]", 1),
        ]
    );
}

// === Quoted Spans ===

#[test]
fn double_quotes_form_one_token() {
    let table = PunctuationTable::new();
    assert_eq!(
        scan(r#""a\"b" c"#, &table, ScanOptions::ACCEPT_DOUBLE_QUOTES),
        vec![
            (RawKind::Quoted { terminated: true }, r#""a\"b""#, 0),
            (RawKind::Word, "c", 0),
        ]
    );
}

#[test]
fn quotes_without_option_are_word_bytes() {
    let table = PunctuationTable::new();
    assert_eq!(
        scan(r#""a b""#, &table, ScanOptions::empty()),
        vec![(RawKind::Word, "\"a", 0), (RawKind::Word, "b\"", 0)]
    );
}

#[test]
fn single_quotes_need_their_own_flag() {
    let table = PunctuationTable::new();
    assert_eq!(
        scan("'x y'", &table, ScanOptions::ACCEPT_DOUBLE_QUOTES),
        vec![(RawKind::Word, "'x", 0), (RawKind::Word, "y'", 0)]
    );
    assert_eq!(
        scan("'x y'", &table, ScanOptions::ACCEPT_SINGLE_QUOTES),
        vec![(RawKind::Quoted { terminated: true }, "'x y'", 0)]
    );
}

#[test]
fn punctuation_inside_quotes_is_not_split() {
    let table = table(&[("+", 0)]);
    assert_eq!(
        scan("\"a+b\"+", &table, ScanOptions::ACCEPT_DOUBLE_QUOTES),
        vec![
            (RawKind::Quoted { terminated: true }, "\"a+b\"", 0),
            (RawKind::Punct { id: 0 }, "+", 0),
        ]
    );
}

#[test]
fn registered_quote_punctuation_takes_precedence() {
    let table = table(&[("\"", 9)]);
    assert_eq!(
        scan("\"a\"", &table, ScanOptions::ACCEPT_DOUBLE_QUOTES),
        vec![
            (RawKind::Punct { id: 9 }, "\"", 0),
            (RawKind::Word, "a", 0),
            (RawKind::Punct { id: 9 }, "\"", 0),
        ]
    );
}

#[test]
fn unterminated_quote_runs_to_end() {
    let table = table(&[("+", 0)]);
    assert_eq!(
        scan("x \"abc + d", &table, ScanOptions::ACCEPT_DOUBLE_QUOTES),
        vec![
            (RawKind::Word, "x", 0),
            (RawKind::Quoted { terminated: false }, "\"abc + d", 0),
        ]
    );
}

#[test]
fn multiline_quote_starts_on_its_first_line() {
    let table = PunctuationTable::new();
    assert_eq!(
        scan("\"a\nb\" c", &table, ScanOptions::ACCEPT_DOUBLE_QUOTES),
        vec![
            (RawKind::Quoted { terminated: true }, "\"a\nb\"", 0),
            (RawKind::Word, "c", 1),
        ]
    );
}

#[test]
fn quote_mid_word_is_word_byte() {
    let table = PunctuationTable::new();
    assert_eq!(
        scan("ab\"cd", &table, ScanOptions::ACCEPT_DOUBLE_QUOTES),
        vec![(RawKind::Word, "ab\"cd", 0)]
    );
}

// === EOF ===

#[test]
fn empty_source_yields_eof_on_line_zero() {
    let table = PunctuationTable::new();
    let mut scanner = Scanner::new(b"", &table, ScanOptions::empty());
    let eof = scanner.next_token();
    assert_eq!(
        eof,
        RawToken {
            kind: RawKind::Eof,
            start: 0,
            len: EOF_LEN,
            line: 0,
        }
    );
    assert_eq!(eof.end(), 0);
}

#[test]
fn eof_follows_last_token_line() {
    let table = PunctuationTable::new();
    let mut scanner = Scanner::new(b"a\nb\n\n", &table, ScanOptions::empty());
    scanner.next_token();
    scanner.next_token();
    let eof = scanner.next_token();
    assert_eq!(eof.kind, RawKind::Eof);
    assert_eq!(eof.line, 2);
    assert_eq!(eof.start, 5);
}

#[test]
fn eof_is_sticky() {
    let table = PunctuationTable::new();
    let mut scanner = Scanner::new(b"x", &table, ScanOptions::empty());
    scanner.next_token();
    let first = scanner.next_token();
    let second = scanner.next_token();
    assert_eq!(first, second);
    assert_eq!(first.kind, RawKind::Eof);
}

#[test]
fn whitespace_only_source_has_no_tokens() {
    let table = PunctuationTable::new();
    assert!(scan(" \t\n\r\n ", &table, ScanOptions::empty()).is_empty());
}

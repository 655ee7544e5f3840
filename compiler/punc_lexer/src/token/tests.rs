use super::*;
use pretty_assertions::assert_eq;

fn raw(kind: RawKind, start: usize, len: usize, line: usize) -> RawToken {
    RawToken {
        kind,
        start,
        len,
        line,
    }
}

#[test]
fn word_copies_source_bytes() {
    let token = Token::from_raw(raw(RawKind::Word, 2, 3, 0), b"  abc ").unwrap();
    assert_eq!(token.kind, TokenKind::Word);
    assert_eq!(token.id, Token::WORD_ID);
    assert_eq!(token.text(), b"abc");
    assert_eq!((token.offset, token.len, token.end()), (2, 3, 5));
}

#[test]
fn quoted_span_is_word_with_quotes() {
    let token = Token::from_raw(
        raw(RawKind::Quoted { terminated: true }, 0, 4, 0),
        b"\"ab\"",
    )
    .unwrap();
    assert_eq!(token.kind, TokenKind::Word);
    assert_eq!(token.as_str(), Some("\"ab\""));
}

#[test]
fn punctuation_keeps_registered_id() {
    let token = Token::from_raw(raw(RawKind::Punct { id: 7 }, 1, 2, 3), b"a<<").unwrap();
    assert!(token.is_punctuation());
    assert_eq!(token.id, 7);
    assert_eq!(token.text(), b"<<");
    assert_eq!(token.line, 3);
}

#[test]
fn eof_has_no_text() {
    let token = Token::from_raw(raw(RawKind::Eof, 9, EOF_LEN, 2), b"123456789").unwrap();
    assert_eq!(token, Token::end_of_stream(2, 9));
    assert!(token.is_eof());
    assert_eq!(token.id, Token::EOF_ID);
    assert_eq!(token.len, 3);
    assert!(token.text().is_empty());
    assert_eq!(token.end(), 9);
}

#[test]
fn as_str_rejects_invalid_utf8() {
    let token = Token::from_raw(raw(RawKind::Word, 0, 2, 0), &[0xFF, 0xFE]).unwrap();
    assert_eq!(token.as_str(), None);
}

#[test]
fn display_forms() {
    let word = Token::from_raw(raw(RawKind::Word, 0, 5, 0), b"hello").unwrap();
    let punct = Token::from_raw(raw(RawKind::Punct { id: 2 }, 0, 1, 1), b"+").unwrap();
    let quoted = Token::from_raw(
        raw(RawKind::Quoted { terminated: true }, 0, 3, 0),
        b"\"a\"",
    )
    .unwrap();
    assert_eq!(word.to_string(), "Word \"hello\" @ 0:0");
    assert_eq!(punct.to_string(), "Punctuation \"+\" (2) @ 1:0");
    assert_eq!(quoted.to_string(), "Word \"\\\"a\\\"\" @ 0:0");
    assert_eq!(Token::end_of_stream(4, 10).to_string(), "EndOfStream @ 4:10");
}

#[test]
fn kind_display_names() {
    assert_eq!(TokenKind::Word.display_name(), "Word");
    assert_eq!(TokenKind::Punctuation.display_name(), "Punctuation");
    assert_eq!(TokenKind::EndOfStream.display_name(), "EndOfStream");
}

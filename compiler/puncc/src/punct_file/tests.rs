use super::*;
use pretty_assertions::assert_eq;

fn entries(table: &PunctuationTable) -> Vec<(Vec<u8>, i32)> {
    table
        .iter()
        .map(|entry| (entry.literal().to_vec(), entry.id()))
        .collect()
}

#[test]
fn parses_entries_in_file_order() {
    let text = "# shifts\n0 <<\n\n  1   >>  \n-4 (\n";
    let table = parse_punctuation(text, "ops.txt").unwrap();
    assert_eq!(
        entries(&table),
        vec![(b"<<".to_vec(), 0), (b">>".to_vec(), 1), (b"(".to_vec(), -4)]
    );
}

#[test]
fn hash_after_id_is_a_literal() {
    let table = parse_punctuation("7 #", "ops.txt").unwrap();
    assert_eq!(entries(&table), vec![(b"#".to_vec(), 7)]);
}

#[test]
fn missing_literal_is_reported_with_line() {
    let err = parse_punctuation("0 <<\n1\n", "ops.txt").unwrap_err();
    assert_eq!(
        err.to_string(),
        "ops.txt:2: expected `<id> <literal>`, found `1`"
    );
}

#[test]
fn bad_id_is_reported() {
    let err = parse_punctuation("\n\nplus +\n", "ops.txt").unwrap_err();
    assert_eq!(err.to_string(), "ops.txt:3: invalid punctuation id `plus`");
}

#[test]
fn empty_file_gives_empty_table() {
    assert!(parse_punctuation("# nothing\n\n", "ops.txt")
        .unwrap()
        .is_empty());
}

#[test]
fn default_table_matches_constant() {
    let table = default_table().unwrap();
    assert_eq!(table.len(), DEFAULT_PUNCTUATION.len());
    assert_eq!(table.find("<<").unwrap().id(), 0);
    assert_eq!(table.find("/").unwrap().id(), 9);
    assert!(table.shadowed().is_empty());
}

//! Tests for the generic tree parser

use crate::app::services::script::parse_document;
use crate::error::ParseError;

#[test]
fn test_parses_flat_assignments() {
    let root = parse_document("id = 173\nname = \"C_DAKOTA\"").unwrap();
    assert_eq!(root.get_scalar("id"), Some("173"));
    assert_eq!(root.get_scalar("name"), Some("C_DAKOTA"));
}

#[test]
fn test_parses_nested_blocks() {
    let root = parse_document("outer = { inner = { x = 1 } }").unwrap();
    let outer = root.get_block("outer").unwrap();
    let inner = outer.get_block("inner").unwrap();
    assert_eq!(inner.get_scalar("x"), Some("1"));
}

#[test]
fn test_bare_values_keep_source_order() {
    let root = parse_document("provinces = { 4349 1516 11576 }").unwrap();
    let provinces = root.get_block("provinces").unwrap();
    let values: Vec<&str> = provinces.values().collect();
    assert_eq!(values, vec!["4349", "1516", "11576"]);
}

#[test]
fn test_repeated_keys_yield_every_block_in_order() {
    let root = parse_document("period = { i = 1 }\nperiod = { i = 2 }\nperiod = { i = 3 }").unwrap();
    let indices: Vec<&str> = root
        .blocks("period")
        .map(|b| b.get_scalar("i").unwrap())
        .collect();
    assert_eq!(indices, vec!["1", "2", "3"]);
}

#[test]
fn test_unknown_keys_are_preserved_not_rejected() {
    let root = parse_document("known = 1\nfuture_key = { a b c }").unwrap();
    assert_eq!(root.get_scalar("known"), Some("1"));
    assert!(root.has_key("future_key"));
}

#[test]
fn test_missing_closing_brace_is_malformed() {
    let err = parse_document("region = { id = 1 ").unwrap_err();
    assert!(matches!(err, ParseError::MalformedStructure { .. }));
}

#[test]
fn test_stray_closing_brace_is_malformed() {
    let err = parse_document("id = 1 }").unwrap_err();
    assert!(matches!(err, ParseError::MalformedStructure { .. }));
}

#[test]
fn test_dangling_equals_is_malformed() {
    let err = parse_document("id = ").unwrap_err();
    assert!(matches!(err, ParseError::MalformedStructure { .. }));

    let err = parse_document("= 5").unwrap_err();
    assert!(matches!(err, ParseError::MalformedStructure { .. }));
}

#[test]
fn test_malformed_error_reports_opening_line() {
    let err = parse_document("a = 1\nblock = {\n  x = 2\n").unwrap_err();
    match err {
        ParseError::MalformedStructure { line, .. } => assert_eq!(line, 2),
        other => panic!("expected MalformedStructure, got {other:?}"),
    }
}

#[test]
fn test_whitespace_and_newlines_are_insignificant() {
    let compact = parse_document("a={b=1 c={2 3}}").unwrap();
    let spread = parse_document("a = {\n  b = 1\n  c = {\n    2\n    3\n  }\n}\n").unwrap();
    assert_eq!(compact, spread);
}

#[test]
fn test_comments_do_not_change_the_tree() {
    let plain = parse_document("id = 5\nprovinces = { 1 2 }").unwrap();
    let commented =
        parse_document("id = 5 # region id\nprovinces = { 1 2 } # two provinces").unwrap();
    assert_eq!(plain, commented);
}

#[test]
fn test_empty_document_is_an_empty_block() {
    let root = parse_document("").unwrap();
    assert!(root.entries.is_empty());

    let root = parse_document("# only a comment\n").unwrap();
    assert!(root.entries.is_empty());
}

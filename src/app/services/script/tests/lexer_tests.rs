//! Tests for comment stripping and tokenization

use crate::app::services::script::lexer::{SpannedToken, Token, strip_comments, tokenize};

fn tokens(text: &str) -> Vec<Token> {
    tokenize(text)
        .unwrap()
        .into_iter()
        .map(|SpannedToken { token, .. }| token)
        .collect()
}

#[test]
fn test_strips_line_comments() {
    let stripped = strip_comments("id = 5 # the id\nname = \"X\"");
    assert_eq!(stripped, "id = 5 \nname = \"X\"");
}

#[test]
fn test_comment_stripping_is_idempotent() {
    let text = "id = 5 # one # two\nprovinces = { 1 2 } # trailing";
    let once = strip_comments(text);
    let twice = strip_comments(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_hash_inside_quotes_is_content() {
    let stripped = strip_comments("name = \"A#B\" # real comment");
    assert_eq!(stripped, "name = \"A#B\" ");
}

#[test]
fn test_tokenizes_assignment() {
    assert_eq!(
        tokens("id = 173"),
        vec![
            Token::Scalar("id".to_string()),
            Token::Equals,
            Token::Scalar("173".to_string()),
        ]
    );
}

#[test]
fn test_tokenizes_braces_without_whitespace() {
    assert_eq!(
        tokens("provinces={1 2}"),
        vec![
            Token::Scalar("provinces".to_string()),
            Token::Equals,
            Token::OpenBrace,
            Token::Scalar("1".to_string()),
            Token::Scalar("2".to_string()),
            Token::CloseBrace,
        ]
    );
}

#[test]
fn test_quoted_string_keeps_spaces() {
    assert_eq!(
        tokens("name = \"Suez canal\""),
        vec![
            Token::Scalar("name".to_string()),
            Token::Equals,
            Token::Scalar("Suez canal".to_string()),
        ]
    );
}

#[test]
fn test_negative_numbers_are_single_scalars() {
    assert_eq!(
        tokens("-32.0 -2.0"),
        vec![
            Token::Scalar("-32.0".to_string()),
            Token::Scalar("-2.0".to_string()),
        ]
    );
}

#[test]
fn test_unterminated_quote_is_malformed() {
    assert!(tokenize("name = \"oops").is_err());
}

#[test]
fn test_line_numbers_track_newlines() {
    let spanned = tokenize("a = 1\n\nb = 2").unwrap();
    assert_eq!(spanned[0].line, 1);
    assert_eq!(spanned[3].line, 3);
}

//! Tokenization of map script text
//!
//! Comments are stripped first, then the text is cut into brace, equals and
//! scalar tokens. Every token remembers its source line so structural
//! errors can point at the right place.

use crate::error::ParseError;

/// One lexical token of the script grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `=`
    Equals,
    /// A bare word, number, or quoted string (quotes removed)
    Scalar(String),
}

/// A token together with the 1-based line it started on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub line: usize,
}

/// Strip `#` comments, leaving everything else (including newlines) intact.
///
/// `#` inside a quoted string is content, not a comment. Stripping is
/// idempotent: the output contains no comments for a second pass to find.
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_quote = false;
    let mut in_comment = false;

    for ch in text.chars() {
        match ch {
            '\n' => {
                in_comment = false;
                in_quote = false;
                out.push(ch);
            }
            '"' if !in_comment => {
                in_quote = !in_quote;
                out.push(ch);
            }
            '#' if !in_quote => in_comment = true,
            _ if in_comment => {}
            _ => out.push(ch),
        }
    }

    out
}

/// Cut script text into tokens, tracking line numbers.
///
/// Fails with [`ParseError::MalformedStructure`] on an unterminated quoted
/// string; every other character sequence tokenizes.
pub fn tokenize(text: &str) -> Result<Vec<SpannedToken>, ParseError> {
    let stripped = strip_comments(text);
    let mut tokens = Vec::new();
    let mut line = 1usize;
    let mut chars = stripped.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\n' => line += 1,
            c if c.is_whitespace() => {}
            '{' => tokens.push(SpannedToken {
                token: Token::OpenBrace,
                line,
            }),
            '}' => tokens.push(SpannedToken {
                token: Token::CloseBrace,
                line,
            }),
            '=' => tokens.push(SpannedToken {
                token: Token::Equals,
                line,
            }),
            '"' => {
                let start_line = line;
                let mut value = String::new();
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\n') | None => {
                            return Err(ParseError::malformed(
                                start_line,
                                "unterminated quoted string",
                            ));
                        }
                        Some(c) => value.push(c),
                    }
                }
                tokens.push(SpannedToken {
                    token: Token::Scalar(value),
                    line: start_line,
                });
            }
            c => {
                let mut value = String::new();
                value.push(c);
                while let Some(&next) = chars.peek() {
                    if next.is_whitespace() || matches!(next, '{' | '}' | '=' | '"') {
                        break;
                    }
                    value.push(next);
                    chars.next();
                }
                tokens.push(SpannedToken {
                    token: Token::Scalar(value),
                    line,
                });
            }
        }
    }

    Ok(tokens)
}

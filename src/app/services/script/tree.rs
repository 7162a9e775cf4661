//! The generic ordered tree produced by parsing map script text.
//!
//! A [`Block`] holds its entries in source order. An entry is either a
//! keyed assignment (`key = value`) or a bare value (a province id inside
//! `provinces = { ... }`, an offset component, a mesh name). Keys repeat
//! freely; accessors expose the first match, every match, or the bare
//! values, and callers ignore any keys they do not know.

use super::lexer::{self, SpannedToken, Token};
use crate::error::ParseError;

/// A parsed value: either a scalar literal or a nested block
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A bare word, number, or quoted string, kept exactly as written
    Scalar(String),
    /// A nested `{ ... }` block
    Block(Block),
}

impl Value {
    /// The scalar literal, if this value is one
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::Block(_) => None,
        }
    }

    /// The nested block, if this value is one
    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Value::Scalar(_) => None,
            Value::Block(b) => Some(b),
        }
    }
}

/// One entry of a block, in source order
#[derive(Debug, Clone)]
pub struct Entry {
    /// The key of a `key = value` assignment; `None` for a bare value
    pub key: Option<String>,
    /// The assigned or bare value
    pub value: Value,
    /// 1-based source line the entry started on
    pub line: usize,
}

// Two entries are equal when they say the same thing; the source line is
// layout, not meaning, and comments/whitespace must not affect equality.
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

/// An ordered sequence of entries; the document root is a block too
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    /// Entries in source order
    pub entries: Vec<Entry>,
}

impl Block {
    /// First value assigned to `key`, if any
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|e| e.key.as_deref() == Some(key))
            .map(|e| &e.value)
    }

    /// First scalar assigned to `key`, if any
    pub fn get_scalar(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_scalar)
    }

    /// First block assigned to `key`, if any
    pub fn get_block(&self, key: &str) -> Option<&Block> {
        self.get(key).and_then(Value::as_block)
    }

    /// Every block assigned to `key`, in source order.
    ///
    /// Repeated keys are how the grammar expresses sequences (`period`,
    /// `adjacency_rule`, `city_group`, `building`).
    pub fn blocks<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Block> {
        self.entries
            .iter()
            .filter(move |e| e.key.as_deref() == Some(key))
            .filter_map(|e| e.value.as_block())
    }

    /// The bare scalar values of this block, in source order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.key.is_none())
            .filter_map(|e| e.value.as_scalar())
    }

    /// Whether `key` is assigned at least once
    pub fn has_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key.as_deref() == Some(key))
    }
}

/// Parse a full script text into its root block.
///
/// Single pass, no recovery: the first structural problem (unbalanced
/// braces, a dangling `=`) fails the whole document with
/// [`ParseError::MalformedStructure`].
pub fn parse_document(text: &str) -> Result<Block, ParseError> {
    let tokens = lexer::tokenize(text)?;
    let mut pos = 0;
    let block = parse_entries(&tokens, &mut pos, None)?;

    // parse_entries at top level only stops at end of input or a stray '}'
    if pos < tokens.len() {
        let tok = &tokens[pos];
        return Err(ParseError::malformed(
            tok.line,
            "unbalanced braces: unexpected '}'",
        ));
    }

    Ok(block)
}

/// Parse entries until the closing brace of the enclosing block, or until
/// end of input at the top level. `open_line` is the line of the opening
/// brace, `None` at the top level.
fn parse_entries(
    tokens: &[SpannedToken],
    pos: &mut usize,
    open_line: Option<usize>,
) -> Result<Block, ParseError> {
    let mut entries = Vec::new();

    loop {
        let Some(tok) = tokens.get(*pos) else {
            // End of input: fine at the top level, a missing '}' otherwise
            return match open_line {
                None => Ok(Block { entries }),
                Some(line) => Err(ParseError::malformed(
                    line,
                    "unbalanced braces: block is never closed",
                )),
            };
        };

        match &tok.token {
            Token::CloseBrace => {
                return match open_line {
                    None => Ok(Block { entries }),
                    Some(_) => {
                        *pos += 1;
                        Ok(Block { entries })
                    }
                };
            }
            Token::OpenBrace => {
                // Bare nested block, no key
                let line = tok.line;
                *pos += 1;
                let inner = parse_entries(tokens, pos, Some(line))?;
                entries.push(Entry {
                    key: None,
                    value: Value::Block(inner),
                    line,
                });
            }
            Token::Equals => {
                return Err(ParseError::malformed(tok.line, "'=' without a key"));
            }
            Token::Scalar(word) => {
                let line = tok.line;
                let word = word.clone();
                *pos += 1;

                if matches!(tokens.get(*pos).map(|t| &t.token), Some(Token::Equals)) {
                    *pos += 1;
                    let value = parse_value(tokens, pos, &word, line)?;
                    entries.push(Entry {
                        key: Some(word),
                        value,
                        line,
                    });
                } else {
                    entries.push(Entry {
                        key: None,
                        value: Value::Scalar(word),
                        line,
                    });
                }
            }
        }
    }
}

/// Parse the value to the right of `key =`
fn parse_value(
    tokens: &[SpannedToken],
    pos: &mut usize,
    key: &str,
    key_line: usize,
) -> Result<Value, ParseError> {
    match tokens.get(*pos) {
        Some(SpannedToken {
            token: Token::Scalar(s),
            ..
        }) => {
            let value = Value::Scalar(s.clone());
            *pos += 1;
            Ok(value)
        }
        Some(SpannedToken {
            token: Token::OpenBrace,
            line,
        }) => {
            let line = *line;
            *pos += 1;
            let inner = parse_entries(tokens, pos, Some(line))?;
            Ok(Value::Block(inner))
        }
        Some(SpannedToken { line, .. }) => Err(ParseError::malformed(
            *line,
            format!("expected a value after '{key} ='"),
        )),
        None => Err(ParseError::malformed(
            key_line,
            format!("expected a value after '{key} =' but the text ends"),
        )),
    }
}

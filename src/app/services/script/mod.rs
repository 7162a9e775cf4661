//! Generic parser for the brace-delimited map script grammar
//!
//! All three data file kinds (strategic regions, adjacency rules, cities)
//! share one informal grammar: `key = value` assignments, `key = { ... }`
//! nested blocks, bare values inside blocks, and `#` comments to end of
//! line. This module parses that grammar into an ordered generic tree and
//! leaves meaning to per-kind typed extraction, so unknown keys anywhere in
//! the tree are preserved and ignored instead of rejected.
//!
//! ## Architecture
//!
//! - [`lexer`] - Comment stripping and tokenization with line tracking
//! - [`tree`] - The ordered block/entry/value tree and its accessors
//! - [`extract`] - Typed field extraction helpers shared by the loaders
//!
//! ## Usage
//!
//! ```rust
//! use mapmod_loader::app::services::script;
//!
//! # fn example() -> Result<(), mapmod_loader::ParseError> {
//! let root = script::parse_document("speed = 0.5 # a comment")?;
//! assert_eq!(root.get_scalar("speed"), Some("0.5"));
//! # Ok(())
//! # }
//! ```

pub mod extract;
pub mod lexer;
pub mod tree;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use lexer::strip_comments;
pub use tree::{Block, Entry, Value, parse_document};

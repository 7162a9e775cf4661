//! Tests for the generic script parser

pub mod lexer_tests;
pub mod tree_tests;

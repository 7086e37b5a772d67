//! Lexical analysis for the language.
//!
//! This module converts source text into a stream of tokens for the
//! parser. It handles:
//!
//! - Tokenization using a priority-ordered regex pattern table
//! - Recognition of keywords, identifiers, literals and operators
//! - Line/column tracking for error reporting
//! - Comment and whitespace handling
//! - Rejection of anything written after the program's closing `end.`

pub mod lexer;
pub mod tokens;

//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Scanning of words, numbers, quoted strings and operators using regex patterns
//! - Classification of each scanned symbol into a token kind
//! - Line and column tracking for every token
//! - Whitespace and comment skipping
//!
//! Tokens are produced on demand through the `TokenSource` trait.

pub mod lexer;
pub mod tokens;

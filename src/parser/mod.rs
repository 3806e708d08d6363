//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with operator precedence and handles:
//!
//! - Expression statements, each optionally terminated by `;`
//! - Expression parsing through registered prefix and infix handlers
//! - Syntax error reporting with the offending token's span
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with precedence levels for operator binding.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

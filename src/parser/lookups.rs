use std::collections::HashMap;

use crate::{ast::ast::Expression, errors::errors::Error, lexer::lexer::TokenSource, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Operator binding strength, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum Precedence {
    Lowest,
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Multiplicative,
    Call,
    Index,
}

pub type NUDHandler<S> = fn(&mut Parser<S>) -> Result<Expression, Error>;
pub type LEDHandler<S> = fn(&mut Parser<S>, Expression, Precedence) -> Result<Expression, Error>;

pub fn create_token_lookups<S: TokenSource>(parser: &mut Parser<S>) {
    // Logical
    parser.precedence(TokenKind::Or, Precedence::LogicalOr);
    parser.precedence(TokenKind::And, Precedence::LogicalAnd);

    // Equality and relational
    parser.precedence(TokenKind::Equal, Precedence::Equality);
    parser.precedence(TokenKind::NotEqual, Precedence::Equality);
    parser.precedence(TokenKind::Less, Precedence::Relational);
    parser.precedence(TokenKind::LessEq, Precedence::Relational);
    parser.precedence(TokenKind::Greater, Precedence::Relational);
    parser.precedence(TokenKind::GreaterEq, Precedence::Relational);

    // Multiplicative
    parser.precedence(TokenKind::Star, Precedence::Multiplicative);
    parser.precedence(TokenKind::Slash, Precedence::Multiplicative);
    parser.precedence(TokenKind::Percent, Precedence::Multiplicative);

    // Call and index slots have no handlers yet, so they end the expression
    parser.precedence(TokenKind::LParen, Precedence::Call);
    parser.precedence(TokenKind::Lambda, Precedence::Call);
    parser.precedence(TokenKind::LBracket, Precedence::Index);
    parser.precedence(TokenKind::Period, Precedence::Index);

    // Literals and symbols
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type NUDLookup<S> = HashMap<TokenKind, NUDHandler<S>>;
pub type LEDLookup<S> = HashMap<TokenKind, LEDHandler<S>>;
pub type PrecedenceLookup = HashMap<TokenKind, Precedence>;

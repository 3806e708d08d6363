//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser pulls tokens from a `TokenSource` on demand and keeps three of
//! them: the previous, current and lookahead token.
//!
//! It maintains lookup tables for:
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Operator precedence

use std::{collections::HashMap, mem};

use tracing::debug;

use crate::{
    ast::{ast::Expression, statements::QueryExpression},
    errors::errors::Error,
    lexer::{
        lexer::{Lexer, TokenSource},
        tokens::{Token, TokenKind},
    },
};

use super::{
    expr::parse_expr,
    lookups::{
        create_token_lookups, LEDHandler, LEDLookup, NUDHandler, NUDLookup, Precedence,
        PrecedenceLookup,
    },
    stmt::parse_expression_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// Grammar is pluggable: prefix and infix handlers can be registered per
/// token kind with [`Parser::nud`] and [`Parser::led`] without touching the
/// precedence-climbing loop.
pub struct Parser<S> {
    /// Where tokens are pulled from
    lexer: S,
    /// The token before `current_token`, if any has been consumed
    previous_token: Option<Token>,
    /// The token being parsed
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup<S>,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup<S>,
    /// Lookup table for operator precedence
    precedence_lookup: PrecedenceLookup,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a new Parser with the default grammar registered.
    ///
    /// The first two tokens are pulled immediately to fill the current and
    /// lookahead slots.
    pub fn new(mut lexer: S) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Parser {
            lexer,
            previous_token: None,
            current_token,
            peek_token,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    pub fn previous_token(&self) -> Option<&Token> {
        self.previous_token.as_ref()
    }

    /// Shifts lookahead into current, current into previous, and pulls a new
    /// lookahead token.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        let current = mem::replace(&mut self.peek_token, next);
        let previous = mem::replace(&mut self.current_token, current);
        self.previous_token = Some(previous);
    }

    pub fn is_peek_token(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Precedence of `kind`; unregistered kinds are `Lowest`.
    pub fn precedence_of(&self, kind: TokenKind) -> Precedence {
        self.precedence_lookup
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    pub fn peek_precedence(&self) -> Precedence {
        self.precedence_of(self.peek_token.kind)
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup<S> {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup<S> {
        &self.led_lookup
    }

    /// Returns a reference to the precedence lookup table.
    pub fn get_precedence_lookup(&self) -> &PrecedenceLookup {
        &self.precedence_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `precedence` - The binding strength of this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, precedence: Precedence, led_fn: LEDHandler<S>) {
        debug!(kind = %kind, ?precedence, "registered infix handler");
        self.precedence_lookup.insert(kind, precedence);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for this prefix operator
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<S>) {
        debug!(kind = %kind, "registered prefix handler");
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Sets the precedence of a token without registering a handler.
    pub fn precedence(&mut self, kind: TokenKind, precedence: Precedence) {
        self.precedence_lookup.insert(kind, precedence);
    }

    /// Parses one expression starting at the current token.
    ///
    /// Intended for use from inside handlers.
    pub fn parse_expression(&mut self, precedence: Precedence) -> Result<Option<Expression>, Error> {
        parse_expr(self, precedence)
    }

    /// Parses every remaining statement.
    ///
    /// The query always ends with an empty statement anchored at the end of
    /// input. The first syntax error aborts the whole parse.
    pub fn parse(&mut self) -> Result<QueryExpression, Error> {
        let mut statements = vec![];

        loop {
            let at_end = self.current_token_kind() == TokenKind::EOF;
            let stmt = parse_expression_stmt(self)?;
            statements.push(Expression::Statement(stmt));

            if at_end {
                break;
            }
            self.advance();
        }

        debug!(statements = statements.len(), "parsed query");
        Ok(QueryExpression { statements })
    }
}

/// Parses `source` with the default grammar.
///
/// This is the main entry point for parsing. It creates a lexer and parser
/// instance and parses all statements until end of input.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with state after parsing)
/// - Result containing either the root QueryExpression or an Error
pub fn parse(source: String) -> (Parser<Lexer>, Result<QueryExpression, Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    let query = parser.parse();

    (parser, query)
}

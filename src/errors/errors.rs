use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position, Span};

/// A parse failure, anchored at the span of the token that caused it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    /// Returns the `[start, end]` pair of the offending token.
    pub fn get_positions(&self) -> Vec<Position> {
        self.span.positions()
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_unexpected_kind(&self) -> TokenKind {
        match &self.internal_error {
            ErrorImpl::SyntaxError { kind } => *kind,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("syntax error: unexpected {kind}")]
    SyntaxError { kind: TokenKind },
}

use tracing::debug;

use crate::{
    ast::{ast::Expression, expressions::Identifier},
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::TokenSource, tokens::TokenKind},
};

use super::{lookups::Precedence, parser::Parser};

/// Parses one expression whose operators all bind tighter than `precedence`.
///
/// Returns `Ok(None)` when the current token is end of input. A missing
/// infix handler for the lookahead simply ends the expression.
pub fn parse_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    precedence: Precedence,
) -> Result<Option<Expression>, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None if token_kind == TokenKind::EOF => return Ok(None),
        None => {
            let span = parser.current_token().span;
            debug!(kind = %token_kind, start = %span.start, end = %span.end, "no prefix handler");
            return Err(Error::new(ErrorImpl::SyntaxError { kind: token_kind }, span));
        }
    };

    let mut left = nud(parser)?;

    // Equal precedence does not loop, so operators associate to the left
    while !parser.is_peek_token(TokenKind::Semicolon) {
        let operator_precedence = parser.peek_precedence();
        if precedence >= operator_precedence {
            break;
        }

        let led = match parser.get_led_lookup().get(&parser.peek_token_kind()) {
            Some(led) => *led,
            None => return Ok(Some(left)),
        };

        parser.advance();
        left = led(parser, left, operator_precedence)?;
    }

    Ok(Some(left))
}

pub fn parse_identifier_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expression, Error> {
    Ok(Expression::Identifier(Identifier {
        token: parser.current_token().clone(),
    }))
}

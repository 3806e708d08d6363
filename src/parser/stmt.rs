use tracing::debug;

use crate::{
    ast::statements::ExpressionStatement,
    errors::errors::Error,
    lexer::{lexer::TokenSource, tokens::TokenKind},
};

use super::{expr::parse_expr, lookups::Precedence, parser::Parser};

pub fn parse_expression_stmt<S: TokenSource>(
    parser: &mut Parser<S>,
) -> Result<ExpressionStatement, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, Precedence::Lowest)?;

    if parser.is_peek_token(TokenKind::Semicolon) {
        parser.advance();
    }

    debug!(
        start = %token.start(),
        empty = expression.is_none(),
        "parsed expression statement"
    );

    Ok(ExpressionStatement {
        token,
        expression: expression.map(Box::new),
    })
}

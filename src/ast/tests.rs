//! Unit tests for AST rendering and position reporting.

use crate::{
    ast::{
        ast::{Expression, Node},
        expressions::Identifier,
        statements::{ExpressionStatement, QueryExpression},
    },
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

fn ident(name: &str, line: u32, column: u32) -> Identifier {
    let width = name.chars().count() as u32;
    Identifier {
        token: Token {
            kind: TokenKind::Identifier,
            literal: name.to_string(),
            span: Span::new(Position::new(line, column), Position::new(line, column + width)),
        },
    }
}

fn statement(expression: Option<Expression>, token: Token) -> ExpressionStatement {
    ExpressionStatement {
        token,
        expression: expression.map(Box::new),
    }
}

#[test]
fn test_identifier() {
    let foo = ident("foo", 1, 2);

    assert_eq!(foo.name(), "foo");
    assert_eq!(foo.render(), "foo");
    assert_eq!(foo.positions(), vec![Position::new(1, 2), Position::new(1, 5)]);
}

#[test]
fn test_statement_appends_semicolon() {
    let foo = ident("foo", 1, 0);
    let stmt = statement(Some(foo.clone().into()), foo.token.clone());

    assert_eq!(stmt.render(), "foo;");
    assert_eq!(stmt.positions(), foo.positions());
}

#[test]
fn test_nested_statement_keeps_single_semicolon() {
    let foo = ident("foo", 1, 0);
    let inner = statement(Some(foo.clone().into()), foo.token.clone());
    let outer = statement(Some(inner.into()), foo.token);

    assert_eq!(outer.render(), "foo;");
}

#[test]
fn test_empty_statement() {
    let eof = Token::eof(Position::new(1, 0));
    let stmt = statement(None, eof);

    assert!(stmt.is_empty());
    assert_eq!(stmt.render(), "");
    assert_eq!(stmt.positions(), vec![Position::new(1, 0), Position::new(1, 0)]);
}

#[test]
fn test_statement_with_empty_render() {
    let anchor = ident("x", 2, 4).token;
    let stmt = statement(Some(QueryExpression::default().into()), anchor);

    assert_eq!(stmt.render(), ";");
    // No inner positions, so the leading token anchors the statement.
    assert_eq!(stmt.positions(), vec![Position::new(2, 4), Position::new(2, 5)]);
}

#[test]
fn test_query_concatenates_children() {
    let a = ident("a", 1, 0);
    let b = ident("b", 2, 0);
    let query = QueryExpression {
        statements: vec![
            statement(Some(a.clone().into()), a.token.clone()).into(),
            statement(Some(b.clone().into()), b.token.clone()).into(),
        ],
    };

    assert_eq!(query.len(), 2);
    assert_eq!(query.render(), "a;b;");
    assert_eq!(
        query.positions(),
        vec![
            Position::new(1, 0),
            Position::new(1, 1),
            Position::new(2, 0),
            Position::new(2, 1),
        ]
    );
}

#[test]
fn test_empty_query() {
    let query = QueryExpression::default();

    assert!(query.is_empty());
    assert!(query.positions().is_empty());
    assert_eq!(query.render(), "");
}

#[test]
fn test_expression_display() {
    let expression: Expression = ident("bar", 1, 0).into();

    assert_eq!(expression.to_string(), "bar");
    assert_eq!(expression.render(), expression.render());
}

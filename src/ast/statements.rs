use std::slice::Iter;

use crate::{lexer::tokens::Token, Position};

use super::ast::{Expression, Node};

/// The parse root: every statement of a query, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryExpression {
    pub statements: Vec<Expression>,
}

impl QueryExpression {
    pub fn iter(&self) -> Iter<'_, Expression> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for QueryExpression {
    fn positions(&self) -> Vec<Position> {
        self.statements
            .iter()
            .flat_map(|statement| statement.positions())
            .collect()
    }

    fn render(&self) -> String {
        self.statements.iter().map(|statement| statement.render()).collect()
    }
}

/// Wraps one expression used as a statement.
///
/// `token` is the token the statement started on. It anchors the statement
/// when there is no inner expression, e.g. at end of input.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Option<Box<Expression>>,
}

impl ExpressionStatement {
    pub fn is_empty(&self) -> bool {
        self.expression.is_none()
    }
}

impl Node for ExpressionStatement {
    fn positions(&self) -> Vec<Position> {
        let inner = self
            .expression
            .as_ref()
            .map(|expression| expression.positions())
            .unwrap_or_default();

        if inner.is_empty() {
            self.token.span.positions()
        } else {
            inner
        }
    }

    fn render(&self) -> String {
        let Some(expression) = &self.expression else {
            return String::new();
        };

        let mut rendered = expression.render();
        if rendered.is_empty() {
            return String::from(";");
        }
        if !rendered.ends_with(';') {
            rendered.push(';');
        }

        rendered.trim().to_string()
    }
}

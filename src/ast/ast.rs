use std::fmt::Display;

use crate::Position;

use super::{
    expressions::Identifier,
    statements::{ExpressionStatement, QueryExpression},
};

/// Node Trait
///
/// Defines the capabilities shared by every AST node.
pub trait Node {
    /// Returns the source positions covered by the node, in source order.
    fn positions(&self) -> Vec<Position>;
    /// Returns the canonical re-serialization of the node.
    fn render(&self) -> String;
}

/// Expression
///
/// The closed set of AST node kinds. Nodes are immutable once built and each
/// child is owned by exactly one parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Query(QueryExpression),
    Statement(ExpressionStatement),
    Identifier(Identifier),
}

impl Node for Expression {
    fn positions(&self) -> Vec<Position> {
        match self {
            Expression::Query(query) => query.positions(),
            Expression::Statement(statement) => statement.positions(),
            Expression::Identifier(identifier) => identifier.positions(),
        }
    }

    fn render(&self) -> String {
        match self {
            Expression::Query(query) => query.render(),
            Expression::Statement(statement) => statement.render(),
            Expression::Identifier(identifier) => identifier.render(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<QueryExpression> for Expression {
    fn from(query: QueryExpression) -> Self {
        Expression::Query(query)
    }
}

impl From<ExpressionStatement> for Expression {
    fn from(statement: ExpressionStatement) -> Self {
        Expression::Statement(statement)
    }
}

impl From<Identifier> for Expression {
    fn from(identifier: Identifier) -> Self {
        Expression::Identifier(identifier)
    }
}

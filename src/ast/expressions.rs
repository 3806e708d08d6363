use crate::{lexer::tokens::Token, Position};

use super::ast::Node;

// LEAVES

/// Identifier Expression
///
/// A bare name, e.g. `foo`.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
}

impl Identifier {
    pub fn name(&self) -> &str {
        &self.token.literal
    }
}

impl Node for Identifier {
    fn positions(&self) -> Vec<Position> {
        self.token.span.positions()
    }

    fn render(&self) -> String {
        self.token.literal.clone()
    }
}

/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` capability trait and the `Expression` sum type
/// - expressions: Leaf expressions
/// - statements: Statement wrappers and the query root
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;

/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - ast: The Expr trait and the Expression sum type
/// - expressions: One node struct per syntactic construct
pub mod ast;
pub mod expressions;

#[cfg(test)]
mod tests;

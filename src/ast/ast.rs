use std::fmt::{Debug, Display};

use super::expressions::{
    AssignExpr, BinaryExpr, CallExpr, ConditionalExpr, NameExpr, PostfixExpr, PrefixExpr,
};

/// Expression Trait
///
/// Defines the behavior shared by every expression node in the AST.
pub trait Expr: Debug {
    /// Pretty-prints the expression, fully parenthesized, onto `out`.
    fn print_to(&self, out: &mut String);
}

/// Expression
///
/// Owns any expression node kind. Children are owned by their parent, so a
/// parsed expression is always a tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Name(NameExpr),
    Assign(AssignExpr),
    Conditional(ConditionalExpr),
    Binary(BinaryExpr),
    Prefix(PrefixExpr),
    Postfix(PostfixExpr),
    Call(CallExpr),
}

impl Expression {
    /// Returns the inner name node if this is a plain name.
    pub fn as_name(&self) -> Option<&NameExpr> {
        match self {
            Expression::Name(name) => Some(name),
            _ => None,
        }
    }
}

impl Expr for Expression {
    fn print_to(&self, out: &mut String) {
        match self {
            Expression::Name(expr) => expr.print_to(out),
            Expression::Assign(expr) => expr.print_to(out),
            Expression::Conditional(expr) => expr.print_to(out),
            Expression::Binary(expr) => expr.print_to(out),
            Expression::Prefix(expr) => expr.print_to(out),
            Expression::Postfix(expr) => expr.print_to(out),
            Expression::Call(expr) => expr.print_to(out),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::new();
        self.print_to(&mut out);
        f.write_str(&out)
    }
}

impl From<NameExpr> for Expression {
    fn from(expr: NameExpr) -> Self {
        Expression::Name(expr)
    }
}

impl From<AssignExpr> for Expression {
    fn from(expr: AssignExpr) -> Self {
        Expression::Assign(expr)
    }
}

impl From<ConditionalExpr> for Expression {
    fn from(expr: ConditionalExpr) -> Self {
        Expression::Conditional(expr)
    }
}

impl From<BinaryExpr> for Expression {
    fn from(expr: BinaryExpr) -> Self {
        Expression::Binary(expr)
    }
}

impl From<PrefixExpr> for Expression {
    fn from(expr: PrefixExpr) -> Self {
        Expression::Prefix(expr)
    }
}

impl From<PostfixExpr> for Expression {
    fn from(expr: PostfixExpr) -> Self {
        Expression::Postfix(expr)
    }
}

impl From<CallExpr> for Expression {
    fn from(expr: CallExpr) -> Self {
        Expression::Call(expr)
    }
}

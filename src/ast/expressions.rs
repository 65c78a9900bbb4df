use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position,
};

use super::ast::{Expr, Expression};

/// Writes an operator the way it appears in source.
fn push_operator(out: &mut String, operator: TokenKind) {
    out.push_str(&operator.to_string());
}

/// Name Expression
/// Represents a simple variable name like `abc`.
#[derive(Debug, Clone, PartialEq)]
pub struct NameExpr {
    pub value: String,
}

impl Expr for NameExpr {
    fn print_to(&self, out: &mut String) {
        out.push_str(&self.value);
    }
}

/// Assignment Expression
/// Represents an assignment like `a = b`. The target is always a plain name.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub name: String,
    pub value: Box<Expression>,
}

impl AssignExpr {
    /// Builds an assignment to `target`, which must be a name expression.
    ///
    /// `position` is reported if it is not.
    pub fn new(target: &Expression, value: Expression, position: Position) -> Result<Self, Error> {
        let Some(name) = target.as_name() else {
            return Err(Error::new(ErrorImpl::InvalidAssignmentTarget, position));
        };

        Ok(AssignExpr {
            name: name.value.clone(),
            value: Box::new(value),
        })
    }
}

impl Expr for AssignExpr {
    fn print_to(&self, out: &mut String) {
        out.push('(');
        out.push_str(&self.name);
        out.push_str(" = ");
        self.value.print_to(out);
        out.push(')');
    }
}

/// Conditional Expression
/// Represents a ternary conditional like `a ? b : c`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpr {
    pub condition: Box<Expression>,
    pub then_arm: Box<Expression>,
    pub else_arm: Box<Expression>,
}

impl Expr for ConditionalExpr {
    fn print_to(&self, out: &mut String) {
        out.push('(');
        self.condition.print_to(out);
        out.push_str(" ? ");
        self.then_arm.print_to(out);
        out.push_str(" : ");
        self.else_arm.print_to(out);
        out.push(')');
    }
}

/// Binary Expression
/// Represents a binary arithmetic operation like `a + b` or `c ^ d`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expression>,
    pub operator: TokenKind,
    pub right: Box<Expression>,
}

impl Expr for BinaryExpr {
    fn print_to(&self, out: &mut String) {
        out.push('(');
        self.left.print_to(out);
        out.push(' ');
        push_operator(out, self.operator);
        out.push(' ');
        self.right.print_to(out);
        out.push(')');
    }
}

/// Prefix Expression
/// Represents a prefix unary operation like `!a` or `-b`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: TokenKind,
    pub right_expr: Box<Expression>,
}

impl Expr for PrefixExpr {
    fn print_to(&self, out: &mut String) {
        out.push('(');
        push_operator(out, self.operator);
        self.right_expr.print_to(out);
        out.push(')');
    }
}

/// Postfix Expression
/// Represents a postfix unary operation like `a!`.
#[derive(Debug, Clone, PartialEq)]
pub struct PostfixExpr {
    pub left_expr: Box<Expression>,
    pub operator: TokenKind,
}

impl Expr for PostfixExpr {
    fn print_to(&self, out: &mut String) {
        out.push('(');
        self.left_expr.print_to(out);
        push_operator(out, self.operator);
        out.push(')');
    }
}

/// Call Expression
/// Represents a function call like `a(b, c, d)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl Expr for CallExpr {
    fn print_to(&self, out: &mut String) {
        self.callee.print_to(out);
        out.push('(');
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            argument.print_to(out);
        }
        out.push(')');
    }
}

use crate::{
    ast::{
        ast::Expression,
        expressions::{
            AssignExpr, BinaryExpr, CallExpr, ConditionalExpr, NameExpr, PostfixExpr, PrefixExpr,
        },
    },
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{BindingPower, InfixParselet, PrefixParselet},
    parser::Parser,
};

/// Simple parselet for a named variable like `abc`.
pub struct NameParselet;

impl PrefixParselet for NameParselet {
    fn parse(&self, _parser: &mut Parser, token: Token) -> Result<Expression, Error> {
        Ok(NameExpr { value: token.value }.into())
    }
}

/// Parses parentheses used to group an expression, like `a * (b + c)`.
///
/// The parentheses themselves leave no trace in the tree.
pub struct GroupParselet;

impl PrefixParselet for GroupParselet {
    fn parse(&self, parser: &mut Parser, _token: Token) -> Result<Expression, Error> {
        let expr = parser.parse_expression(BindingPower::Default.as_u8())?;
        parser.expect(TokenKind::CloseParen)?;

        Ok(expr)
    }
}

/// Prefix unary operators: `-`, `+`, `~` and `!`.
pub struct PrefixOperatorParselet {
    bp: BindingPower,
}

impl PrefixOperatorParselet {
    pub fn new(bp: BindingPower) -> Self {
        PrefixOperatorParselet { bp }
    }
}

impl PrefixParselet for PrefixOperatorParselet {
    fn parse(&self, parser: &mut Parser, token: Token) -> Result<Expression, Error> {
        let right_expr = parser.parse_expression(self.bp.as_u8())?;

        Ok(PrefixExpr {
            operator: token.kind,
            right_expr: Box::new(right_expr),
        }
        .into())
    }
}

/// Postfix unary operators like `a!`. Never parses a right operand; the
/// precedence only decides whether the loop picks it up.
pub struct PostfixOperatorParselet {
    bp: BindingPower,
}

impl PostfixOperatorParselet {
    pub fn new(bp: BindingPower) -> Self {
        PostfixOperatorParselet { bp }
    }
}

impl InfixParselet for PostfixOperatorParselet {
    fn parse(&self, _parser: &mut Parser, left: Expression, token: Token) -> Result<Expression, Error> {
        Ok(PostfixExpr {
            left_expr: Box::new(left),
            operator: token.kind,
        }
        .into())
    }

    fn get_precedence(&self) -> u8 {
        self.bp.as_u8()
    }
}

/// Binary arithmetic operators. `+`, `-`, `*`, `/` and `^` only differ in
/// precedence and associativity.
pub struct BinaryOperatorParselet {
    bp: BindingPower,
    is_right: bool,
}

impl BinaryOperatorParselet {
    pub fn new(bp: BindingPower, is_right: bool) -> Self {
        BinaryOperatorParselet { bp, is_right }
    }
}

impl InfixParselet for BinaryOperatorParselet {
    fn parse(&self, parser: &mut Parser, left: Expression, token: Token) -> Result<Expression, Error> {
        // One step lower lets an operator of the same precedence claim the
        // right operand, which is what makes it right-associative.
        let min_bp = self.bp.as_u8().saturating_sub(u8::from(self.is_right));
        let right = parser.parse_expression(min_bp)?;

        Ok(BinaryExpr {
            left: Box::new(left),
            operator: token.kind,
            right: Box::new(right),
        }
        .into())
    }

    fn get_precedence(&self) -> u8 {
        self.bp.as_u8()
    }
}

/// The ternary conditional `a ? b : c`, right-associative.
pub struct ConditionalParselet;

impl InfixParselet for ConditionalParselet {
    fn parse(&self, parser: &mut Parser, left: Expression, _token: Token) -> Result<Expression, Error> {
        let then_arm = parser.parse_expression(BindingPower::Default.as_u8())?;
        parser.expect(TokenKind::Colon)?;
        let else_arm = parser.parse_expression(BindingPower::Conditional.as_u8() - 1)?;

        Ok(ConditionalExpr {
            condition: Box::new(left),
            then_arm: Box::new(then_arm),
            else_arm: Box::new(else_arm),
        }
        .into())
    }

    fn get_precedence(&self) -> u8 {
        BindingPower::Conditional.as_u8()
    }
}

/// Function calls like `a(b, c, d)`, including `a()`.
pub struct CallParselet;

impl InfixParselet for CallParselet {
    fn parse(&self, parser: &mut Parser, left: Expression, _token: Token) -> Result<Expression, Error> {
        let mut arguments = vec![];

        if !parser.match_token(TokenKind::CloseParen) {
            loop {
                arguments.push(parser.parse_expression(BindingPower::Default.as_u8())?);

                if !parser.match_token(TokenKind::Comma) {
                    break;
                }
            }

            parser.expect(TokenKind::CloseParen)?;
        }

        Ok(CallExpr {
            callee: Box::new(left),
            arguments,
        }
        .into())
    }

    fn get_precedence(&self) -> u8 {
        BindingPower::Call.as_u8()
    }
}

/// Assignments like `a = b`. Right-associative, and the left-hand side must
/// be a plain name.
pub struct AssignParselet;

impl InfixParselet for AssignParselet {
    fn parse(&self, parser: &mut Parser, left: Expression, token: Token) -> Result<Expression, Error> {
        let value = parser.parse_expression(BindingPower::Assignment.as_u8() - 1)?;

        Ok(AssignExpr::new(&left, value, token.span.start)?.into())
    }

    fn get_precedence(&self) -> u8 {
        BindingPower::Assignment.as_u8()
    }
}

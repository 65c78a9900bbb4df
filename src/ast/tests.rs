//! Unit tests for the AST printer.
//!
//! Trees are built by hand so the printer is checked independently of the
//! parser.

use crate::{errors::errors::ErrorImpl, lexer::tokens::TokenKind, Position};

use super::{
    ast::{Expr, Expression},
    expressions::{
        AssignExpr, BinaryExpr, CallExpr, ConditionalExpr, NameExpr, PostfixExpr, PrefixExpr,
    },
};

fn name(value: &str) -> Expression {
    NameExpr {
        value: value.to_string(),
    }
    .into()
}

#[test]
fn test_print_name() {
    assert_eq!(name("abc").to_string(), "abc");
}

#[test]
fn test_print_binary() {
    let expr: Expression = BinaryExpr {
        left: Box::new(name("a")),
        operator: TokenKind::Plus,
        right: Box::new(name("b")),
    }
    .into();

    assert_eq!(expr.to_string(), "(a + b)");
}

#[test]
fn test_print_prefix_and_postfix() {
    let prefix: Expression = PrefixExpr {
        operator: TokenKind::Dash,
        right_expr: Box::new(name("a")),
    }
    .into();
    let postfix: Expression = PostfixExpr {
        left_expr: Box::new(prefix.clone()),
        operator: TokenKind::Not,
    }
    .into();

    assert_eq!(prefix.to_string(), "(-a)");
    assert_eq!(postfix.to_string(), "((-a)!)");
}

#[test]
fn test_print_conditional() {
    let expr: Expression = ConditionalExpr {
        condition: Box::new(name("a")),
        then_arm: Box::new(name("b")),
        else_arm: Box::new(name("c")),
    }
    .into();

    assert_eq!(expr.to_string(), "(a ? b : c)");
}

#[test]
fn test_print_calls() {
    let no_args: Expression = CallExpr {
        callee: Box::new(name("f")),
        arguments: vec![],
    }
    .into();
    let two_args: Expression = CallExpr {
        callee: Box::new(no_args.clone()),
        arguments: vec![name("a"), name("b")],
    }
    .into();

    assert_eq!(no_args.to_string(), "f()");
    assert_eq!(two_args.to_string(), "f()(a, b)");
}

#[test]
fn test_print_to_appends() {
    let mut out = String::from("> ");
    name("x").print_to(&mut out);

    assert_eq!(out, "> x");
}

#[test]
fn test_assign_to_name() {
    let assign = AssignExpr::new(&name("a"), name("b"), Position::null()).unwrap();
    let expr: Expression = assign.into();

    assert_eq!(expr.to_string(), "(a = b)");
}

#[test]
fn test_assign_to_non_name_fails() {
    let target: Expression = PrefixExpr {
        operator: TokenKind::Dash,
        right_expr: Box::new(name("a")),
    }
    .into();
    let error = AssignExpr::new(&target, name("b"), Position::null()).unwrap_err();

    assert_eq!(*error.get_error(), ErrorImpl::InvalidAssignmentTarget);
}

#[test]
fn test_as_name() {
    assert_eq!(name("a").as_name().map(|n| n.value.as_str()), Some("a"));

    let call: Expression = CallExpr {
        callee: Box::new(name("a")),
        arguments: vec![],
    }
    .into();
    assert!(call.as_name().is_none());
}

#[test]
fn test_structural_equality() {
    let build = || -> Expression {
        BinaryExpr {
            left: Box::new(name("a")),
            operator: TokenKind::Caret,
            right: Box::new(name("b")),
        }
        .into()
    };

    assert_eq!(build(), build());
    assert_ne!(build(), name("a"));
}

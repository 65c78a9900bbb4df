use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::ast::Expression,
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

use super::{expr::*, parser::Parser};

/// Precedence levels, in increasing binding strength.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Default = 0,
    Assignment = 1,
    Conditional = 2,
    Sum = 3,
    Product = 4,
    Exponent = 5,
    Prefix = 6,
    Postfix = 7,
    Call = 8,
}

impl BindingPower {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Parses an expression that begins with the (already consumed) token.
pub trait PrefixParselet {
    fn parse(&self, parser: &mut Parser, token: Token) -> Result<Expression, Error>;
}

/// Extends an already parsed left-hand expression, given the (already
/// consumed) token that follows it. Postfix parselets simply don't consume
/// anything more.
pub trait InfixParselet {
    fn parse(&self, parser: &mut Parser, left: Expression, token: Token) -> Result<Expression, Error>;
    fn get_precedence(&self) -> u8;
}

pub fn create_token_lookups(parser: &mut Parser) {
    parser.register_prefix(TokenKind::Identifier, NameParselet);
    parser.register_infix(TokenKind::Assignment, AssignParselet);
    parser.register_infix(TokenKind::Question, ConditionalParselet);
    parser.register_prefix(TokenKind::OpenParen, GroupParselet);
    parser.register_infix(TokenKind::OpenParen, CallParselet);

    // Prefix
    prefix(parser, TokenKind::Plus, BindingPower::Prefix);
    prefix(parser, TokenKind::Dash, BindingPower::Prefix);
    prefix(parser, TokenKind::Tilde, BindingPower::Prefix);
    prefix(parser, TokenKind::Not, BindingPower::Prefix);

    // `!` is both prefix and postfix
    postfix(parser, TokenKind::Not, BindingPower::Postfix);

    // Binary
    infix_left(parser, TokenKind::Plus, BindingPower::Sum);
    infix_left(parser, TokenKind::Dash, BindingPower::Sum);
    infix_left(parser, TokenKind::Star, BindingPower::Product);
    infix_left(parser, TokenKind::Slash, BindingPower::Product);
    infix_right(parser, TokenKind::Caret, BindingPower::Exponent);
}

pub fn prefix(parser: &mut Parser, kind: TokenKind, bp: BindingPower) {
    parser.register_prefix(kind, PrefixOperatorParselet::new(bp));
}

pub fn postfix(parser: &mut Parser, kind: TokenKind, bp: BindingPower) {
    parser.register_infix(kind, PostfixOperatorParselet::new(bp));
}

pub fn infix_left(parser: &mut Parser, kind: TokenKind, bp: BindingPower) {
    parser.register_infix(kind, BinaryOperatorParselet::new(bp, false));
}

pub fn infix_right(parser: &mut Parser, kind: TokenKind, bp: BindingPower) {
    parser.register_infix(kind, BinaryOperatorParselet::new(bp, true));
}

// Lookup tables inside parser struct, so it's easier
pub type PrefixLookup = HashMap<TokenKind, Rc<dyn PrefixParselet>>;
pub type InfixLookup = HashMap<TokenKind, Rc<dyn InfixParselet>>;

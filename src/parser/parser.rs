//! Parser implementation for building expression trees.
//!
//! This module contains the main Parser struct and the top-level parsing
//! functions. The parser is a Pratt parser: every token kind may have a
//! prefix parselet (how to start an expression with it) and an infix
//! parselet (how to extend an expression already parsed). Precedence lives
//! on the infix parselets, not on the tokens.
//!
//! It maintains:
//! - A lookahead buffer filled on demand from a token source
//! - The prefix parselet lookup table
//! - The infix (and postfix) parselet lookup table

use std::{collections::VecDeque, rc::Rc};

use crate::{
    ast::ast::Expression,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::{Lexer, TokenSource},
        tokens::{Token, TokenKind},
    },
};

use super::lookups::{
    create_token_lookups, BindingPower, InfixLookup, InfixParselet, PrefixLookup, PrefixParselet,
};

/// Deepest allowed chain of nested `parse_expression` calls.
///
/// Every level costs several stack frames (the core loop plus a parselet),
/// so this stays well below what a default thread stack can hold.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// This struct owns the token source and the tokens read ahead from it, and
/// the lookup tables mapping token kinds to parselets.
pub struct Parser {
    /// Where tokens come from
    tokens: Box<dyn TokenSource>,
    /// Tokens read from the source but not consumed yet
    read: VecDeque<Token>,
    /// Lookup table for prefix parselets
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix and postfix parselets
    infix_lookup: InfixLookup,
    /// How many `parse_expression` calls are currently active
    depth: usize,
}

impl Parser {
    /// Creates a new Parser with no parselets registered.
    ///
    /// # Arguments
    ///
    /// * `tokens` - The token source to read from
    pub fn new(tokens: Box<dyn TokenSource>) -> Self {
        Parser {
            tokens,
            read: VecDeque::new(),
            prefix_lookup: PrefixLookup::new(),
            infix_lookup: InfixLookup::new(),
            depth: 0,
        }
    }

    /// Creates a new Parser with the full expression grammar registered.
    pub fn with_grammar(tokens: Box<dyn TokenSource>) -> Self {
        let mut parser = Parser::new(tokens);
        create_token_lookups(&mut parser);
        parser
    }

    /// Registers a prefix parselet for a token kind, replacing any previous one.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `parselet` - The parselet that starts an expression with this token
    pub fn register_prefix<P: PrefixParselet + 'static>(&mut self, kind: TokenKind, parselet: P) {
        self.prefix_lookup.insert(kind, Rc::new(parselet));
    }

    /// Registers an infix or postfix parselet for a token kind, replacing any
    /// previous one.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `parselet` - The parselet that extends an expression with this token
    pub fn register_infix<P: InfixParselet + 'static>(&mut self, kind: TokenKind, parselet: P) {
        self.infix_lookup.insert(kind, Rc::new(parselet));
    }

    /// Parses one expression whose operators all bind tighter than `min_bp`.
    ///
    /// # Arguments
    ///
    /// * `min_bp` - Infix parselets must have a strictly greater precedence
    ///   to extend the expression
    ///
    /// # Returns
    ///
    /// The parsed expression, or the first error encountered. Nesting deeper
    /// than [`MAX_NESTING_DEPTH`] fails with `NestingTooDeep`.
    pub fn parse_expression(&mut self, min_bp: u8) -> Result<Expression, Error> {
        self.enter_nesting()?;
        let result = self.parse_nested_expression(min_bp);
        self.leave_nesting();

        result
    }

    fn parse_nested_expression(&mut self, min_bp: u8) -> Result<Expression, Error> {
        let token = self.consume();
        let Some(prefix) = self.prefix_lookup.get(&token.kind).cloned() else {
            return Err(Error::new(
                ErrorImpl::NoPrefixRule {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            ));
        };

        tracing::trace!(kind = ?token.kind, min_bp, "prefix");
        let mut left = prefix.parse(self, token)?;

        // Keep extending while the next operator binds tighter than min_bp
        while let Some(infix) = self.peek_infix() {
            if infix.get_precedence() <= min_bp {
                break;
            }

            let token = self.consume();
            tracing::trace!(kind = ?token.kind, min_bp, "infix");
            left = infix.parse(self, left, token)?;
        }

        Ok(left)
    }

    /// Consumes the next token if it has the given kind.
    ///
    /// # Returns
    ///
    /// Whether the token matched (and was consumed).
    pub fn match_token(&mut self, expected_kind: TokenKind) -> bool {
        if self.look_ahead(0).kind != expected_kind {
            return false;
        }

        self.consume();
        true
    }

    /// Consumes the next token, which must be of the given kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the next token matches, otherwise an
    /// UnexpectedToken error and the token stays unconsumed.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.look_ahead(0);
        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: token.kind,
                },
                token.span.start.clone(),
            ));
        }

        Ok(self.consume())
    }

    /// Removes and returns the next token.
    pub fn consume(&mut self) -> Token {
        match self.read.pop_front() {
            Some(token) => token,
            None => self.tokens.next_token(),
        }
    }

    /// Returns the token `distance` places ahead without consuming anything,
    /// reading from the source as far as needed.
    pub fn look_ahead(&mut self, distance: usize) -> &Token {
        while distance >= self.read.len() {
            let token = self.tokens.next_token();
            self.read.push_back(token);
        }

        &self.read[distance]
    }

    /// Returns the precedence of the next token's infix parselet, or 0 if it
    /// has none.
    pub fn peek_precedence(&mut self) -> u8 {
        self.peek_infix()
            .map_or(BindingPower::Default.as_u8(), |infix| infix.get_precedence())
    }

    /// Returns how many tokens are currently read ahead.
    pub fn buffered(&self) -> usize {
        self.read.len()
    }

    /// Returns how many `parse_expression` calls are currently active.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Increments the nesting depth, failing once it exceeds
    /// [`MAX_NESTING_DEPTH`]. Pair every `Ok` with [`Parser::leave_nesting`].
    fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            let position = self.look_ahead(0).span.start.clone();
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    max: MAX_NESTING_DEPTH,
                },
                position,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn peek_infix(&mut self) -> Option<Rc<dyn InfixParselet>> {
        let kind = self.look_ahead(0).kind;
        self.infix_lookup.get(&kind).cloned()
    }
}

/// Parses a single expression from a stream of tokens.
///
/// This is the main entry point for parsing. It creates a parser with the
/// full grammar registered, parses one expression and then requires the end
/// of input.
///
/// # Arguments
///
/// * `tokens` - Token source to parse
///
/// # Returns
///
/// The root expression, or the first Error encountered.
#[tracing::instrument(skip_all)]
pub fn parse(tokens: impl TokenSource + 'static) -> Result<Expression, Error> {
    let mut parser = Parser::with_grammar(Box::new(tokens));

    let expr = parser.parse_expression(BindingPower::Default.as_u8())?;
    parser.expect(TokenKind::EOF)?;

    tracing::debug!(%expr, "parsed expression");
    Ok(expr)
}

/// Lexes and parses `source` in one step.
///
/// # Arguments
///
/// * `source` - The expression text
/// * `file` - Optional name of the file it came from, used in error positions
pub fn parse_source(source: &str, file: Option<String>) -> Result<Expression, Error> {
    parse(Lexer::new(source.to_string(), file))
}

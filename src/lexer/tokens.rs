use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref PUNCTUATOR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        for kind in TokenKind::ALL {
            if let Some(punctuator) = kind.punctuator() {
                map.insert(punctuator, kind);
            }
        }
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    OpenParen,
    CloseParen,
    Comma,
    Assignment, // =
    Plus,
    Dash,
    Star,
    Slash,
    Caret,
    Tilde,
    Not, // !
    Question,
    Colon,

    Identifier,
    EOF,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: [TokenKind; 15] = [
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::Comma,
        TokenKind::Assignment,
        TokenKind::Plus,
        TokenKind::Dash,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Caret,
        TokenKind::Tilde,
        TokenKind::Not,
        TokenKind::Question,
        TokenKind::Colon,
        TokenKind::Identifier,
        TokenKind::EOF,
    ];

    /// Returns the single character this kind is scanned from.
    ///
    /// Only punctuation has one; `Identifier` and `EOF` return `None`.
    pub fn punctuator(&self) -> Option<char> {
        match self {
            TokenKind::OpenParen => Some('('),
            TokenKind::CloseParen => Some(')'),
            TokenKind::Comma => Some(','),
            TokenKind::Assignment => Some('='),
            TokenKind::Plus => Some('+'),
            TokenKind::Dash => Some('-'),
            TokenKind::Star => Some('*'),
            TokenKind::Slash => Some('/'),
            TokenKind::Caret => Some('^'),
            TokenKind::Tilde => Some('~'),
            TokenKind::Not => Some('!'),
            TokenKind::Question => Some('?'),
            TokenKind::Colon => Some(':'),
            TokenKind::Identifier | TokenKind::EOF => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.punctuator() {
            Some(punctuator) => write!(f, "{}", punctuator),
            None => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    /// Formats the token on one line for the `--tokens` dump.
    pub fn debug(&self) -> String {
        if self.kind == TokenKind::Identifier {
            format!("{:?} ({})", self.kind, self.value)
        } else {
            format!("{:?} ()", self.kind)
        }
    }
}

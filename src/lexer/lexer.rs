use std::{collections::VecDeque, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind, PUNCTUATOR_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z]+").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(&punctuator_pattern()).unwrap(), handler: punctuator_handler },
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
    ];
}

/// Builds a character class matching any single punctuator character.
fn punctuator_pattern() -> String {
    let class = TokenKind::ALL
        .iter()
        .filter_map(|kind| kind.punctuator())
        .map(|c| regex::escape(&c.to_string()))
        .collect::<String>();

    format!("^[{}]", class)
}

/// A source of tokens for the parser.
///
/// Implementations must keep returning `EOF` tokens once their input is
/// exhausted, so the parser's lookahead never runs dry.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// On-demand scanner over a source string.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn eof_token(&self) -> Token {
        MK_TOKEN!(TokenKind::EOF, String::new(), MK_SPAN!(self.source.len(), 0, self.file))
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        while !self.at_eof() {
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .map(|m| (pattern.handler, m.as_str().to_string()))
            });

            match matched {
                Some((handler, text)) => {
                    if let Some(token) = handler(self, &text) {
                        return token;
                    }
                }
                None => {
                    // Anything unrecognised is dropped, one character at a time.
                    let skipped = self.remainder().chars().next().map_or(1, char::len_utf8);
                    tracing::trace!(pos = self.pos, "discarding unrecognised character");
                    self.advance_n(skipped);
                }
            }
        }

        self.eof_token()
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.advance_n(matched.len());
    None
}

fn punctuator_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let kind = matched.chars().next().and_then(|c| PUNCTUATOR_LOOKUP.get(&c).copied());
    let span = MK_SPAN!(lexer.pos, matched.len(), lexer.file);

    lexer.advance_n(matched.len());
    kind.map(|kind| MK_TOKEN!(kind, String::from(matched), span))
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let token = MK_TOKEN!(
        TokenKind::Identifier,
        String::from(matched),
        MK_SPAN!(lexer.pos, matched.len(), lexer.file)
    );

    lexer.advance_n(matched.len());
    Some(token)
}

/// Replays an already lexed list of tokens, then yields `EOF` forever.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
    eof: Token,
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        let eof = match tokens.last() {
            Some(last) => MK_TOKEN!(
                TokenKind::EOF,
                String::new(),
                Span { start: last.span.end.clone(), end: last.span.end.clone() }
            ),
            None => MK_TOKEN!(
                TokenKind::EOF,
                String::new(),
                Span { start: Position::null(), end: Position::null() }
            ),
        };

        TokenStream { tokens: tokens.into(), eof }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        self.tokens.pop_front().unwrap_or_else(|| self.eof.clone())
    }
}

/// Lexes the whole source, up to and including the first `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}

//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Names
//! - Punctuators and the punctuator lookup
//! - Whitespace and unrecognised characters
//! - The trailing EOF stream

use super::{
    lexer::{tokenize, Lexer, TokenSource, TokenStream},
    tokens::{TokenKind, PUNCTUATOR_LOOKUP},
};

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar CamelCase".to_string(), Some("test.bt".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "CamelCase");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_tokenize_punctuators() {
    let tokens = tokenize("(),=+-*/^~!?:".to_string(), None);
    let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
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
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[4].value, "+");
}

#[test]
fn test_punctuators_split_names() {
    let tokens = tokenize("a+bc".to_string(), None);

    assert_eq!(tokens[0].value, "a");
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].value, "bc");
}

#[test]
fn test_unrecognised_characters_are_discarded() {
    let tokens = tokenize("a1b  #\t$c ☃ d".to_string(), None);
    let values = tokens.iter().map(|t| t.value.as_str()).collect::<Vec<_>>();

    assert_eq!(values, vec!["a", "b", "c", "d", ""]);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_underscore_is_not_a_letter() {
    let tokens = tokenize("foo_bar".to_string(), None);

    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar");
}

#[test]
fn test_empty_source() {
    let tokens = tokenize("   ".to_string(), None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_lexer_repeats_eof() {
    let mut lexer = Lexer::new("a".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("ab + c".to_string(), Some("test.bt".to_string()));

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 2);
    assert_eq!(tokens[1].span.start.0, 3);
    assert_eq!(tokens[2].span.start.0, 5);
    assert_eq!(tokens[3].span.start.0, 6);
    assert_eq!(*tokens[0].span.start.1, "test.bt");
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("a".to_string(), None);

    assert_eq!(*tokens[0].span.start.1, "shell");
}

#[test]
fn test_token_stream_replays_then_repeats_eof() {
    let tokens = tokenize("a b".to_string(), None);
    let mut stream = TokenStream::from(tokens[..2].to_vec());

    assert_eq!(stream.next_token().value, "a");
    assert_eq!(stream.next_token().value, "b");
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_empty_token_stream() {
    let mut stream = TokenStream::from(vec![]);

    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_punctuator_mapping_is_injective() {
    let punctuated = TokenKind::ALL
        .iter()
        .filter(|kind| kind.punctuator().is_some())
        .count();

    assert_eq!(PUNCTUATOR_LOOKUP.len(), punctuated);
    for (c, kind) in PUNCTUATOR_LOOKUP.iter() {
        assert_eq!(kind.punctuator(), Some(*c));
    }
}

#[test]
fn test_names_and_eof_have_no_punctuator() {
    assert_eq!(TokenKind::Identifier.punctuator(), None);
    assert_eq!(TokenKind::EOF.punctuator(), None);
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::Caret.to_string(), "^");
    assert_eq!(TokenKind::Identifier.to_string(), "Identifier");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
}

#[test]
fn test_tokens_are_value_comparable() {
    let first = tokenize("a".to_string(), None);
    let second = tokenize("a".to_string(), None);

    assert_eq!(first, second);
}

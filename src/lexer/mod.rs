//! Lexical analysis module for the parser.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - On-demand tokenization of source text using regex patterns
//! - Recognition of names and single-character punctuators
//! - Token position tracking for error reporting
//! - Discarding whitespace and any unrecognised character

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

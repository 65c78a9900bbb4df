//! Parser module for building expression trees.
//!
//! This module contains the parser that transforms a stream of tokens
//! into an expression tree. It uses a Pratt parser with proper operator
//! precedence and handles:
//!
//! - Names and grouping parentheses
//! - Prefix, postfix and binary operators
//! - The ternary conditional, calls and assignment
//!
//! Parselets are registered per token kind, prefix and infix separately, so
//! the grammar can be extended without touching the core loop.

pub mod expr;
pub mod lookups;
pub mod parser;

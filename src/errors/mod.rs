//! Error types and error handling for the parser.
//!
//! This module defines the errors a parse can fail with. It includes:
//!
//! - Error structures with source position information
//! - One variant per failure: missing prefix rule, unexpected token,
//!   invalid assignment target
//! - Helpful error messages and suggestions

pub mod errors;

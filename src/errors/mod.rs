//! Error types and error handling for the front end.
//!
//! This module defines the single error type shared by the lexer and the
//! parser. It includes:
//!
//! - An error structure carrying the source line
//! - Specific error variants for lexical failures and parser diagnostics
//! - Error names and helpful suggestions for display

pub mod errors;

#[cfg(test)]
mod tests;

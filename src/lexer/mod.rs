//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that turns source text into a
//! stream of tokens for parsing. It handles:
//!
//! - Tokenization using an ordered table of regex rules
//! - Recognition of literals, operators and delimiters
//! - Line tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

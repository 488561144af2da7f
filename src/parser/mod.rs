//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that turns the lexer's
//! token stream into a Program. Operator precedence is encoded in the call
//! structure: additive expressions are built from multiplicative ones, which
//! are built from primaries. It handles:
//!
//! - Statement parsing (expression statements, nested blocks)
//! - Expression parsing (arithmetic, grouping, literals)
//! - Diagnostic collection and statement-level recovery

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

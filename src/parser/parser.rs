//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser pulls tokens from its lexer one at a time and keeps a single
//! token of lookahead. Grammar rules live in `stmt` and `expr` as free
//! functions over `&mut Parser`.
//!
//! Grammar problems are recorded as diagnostics and parsing carries on.
//! Only a lexical failure stops a parse.

use crate::{
    ast::{ast::Program, expressions::BinaryOperator},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{lookup_operator, BindingPower},
    stmt::parse_program,
};

/// Result of a grammar rule.
///
/// `Err` is a lexical failure and ends the parse. `Ok(None)` means the
/// construct is absent; a diagnostic has already been recorded for it.
pub type ParseResult<T> = Result<Option<T>, Error>;

/// How many groupings and blocks may be open at once. Deeper input is
/// rejected with a diagnostic instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The parser state: the token source, one token of lookahead, and every
/// diagnostic recorded so far.
pub struct Parser {
    /// The lexer tokens are pulled from
    lexer: Lexer,
    /// The next token, fetched but not yet consumed
    lookahead: Token,
    /// Diagnostics in the order they were raised
    errors: Vec<Error>,
    /// Groupings and blocks currently open
    depth: usize,
}

impl Parser {
    /// Creates a new Parser, priming the lookahead from `lexer`.
    ///
    /// # Returns
    ///
    /// An error if the very first token cannot be lexed; no parser is usable
    /// in that case.
    pub fn new(mut lexer: Lexer) -> Result<Self, Error> {
        let lookahead = lexer.next_token()?;

        Ok(Parser {
            lexer,
            lookahead,
            errors: vec![],
            depth: 0,
        })
    }

    /// Returns the lookahead token without consuming it.
    pub fn current_token(&self) -> &Token {
        &self.lookahead
    }

    /// Returns the kind of the lookahead token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.lookahead.kind
    }

    /// Consumes the lookahead unconditionally and returns it.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.lookahead, next))
    }

    /// Consumes the lookahead if it is of `expected_kind`.
    ///
    /// On a mismatch a diagnostic is recorded and nothing is consumed, so the
    /// caller must give up on the construct it was building.
    pub fn eat(&mut self, expected_kind: TokenKind) -> ParseResult<Token> {
        if self.current_token_kind() != expected_kind {
            self.push_error(ErrorImpl::UnexpectedToken {
                token: self.lookahead.value.clone(),
                expected: expected_kind,
            });
            return Ok(None);
        }

        self.advance().map(Some)
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    pub fn is_at_end(&self) -> bool {
        self.at(TokenKind::EOF)
    }

    /// Returns the binary operator under the lookahead if it binds at `bp`.
    pub fn current_operator(&self, bp: BindingPower) -> Option<BinaryOperator> {
        lookup_operator(self.current_token_kind(), bp)
    }

    /// Skips past a statement that failed to parse.
    ///
    /// Tokens are discarded up to and including the next `;`, stopping early
    /// at `stop` or end of input. Either at least one token is consumed or
    /// the lookahead is already at `stop`/EOF, so statement lists always make
    /// progress.
    pub fn synchronize(&mut self, stop: TokenKind) -> Result<(), Error> {
        while !self.at(stop) && !self.is_at_end() {
            if self.advance()?.kind == TokenKind::Semicolon {
                break;
            }
        }

        Ok(())
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// Past `MAX_NESTING_DEPTH` nothing is consumed: a diagnostic is recorded
    /// and the construct is absent, leaving the caller to `synchronize`.
    pub fn nested<T>(&mut self, rule: fn(&mut Parser) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            self.push_error(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            });
            return Ok(None);
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;

        result
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Records a diagnostic against the lookahead's line.
    pub fn push_error(&mut self, error: ErrorImpl) {
        let line = self.lookahead.line;
        self.push_error_at(error, line);
    }

    pub fn push_error_at(&mut self, error: ErrorImpl, line: usize) {
        self.errors.push(Error::new(error, line));
    }

    pub fn get_errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

/// Parses source text into a Program.
///
/// This is the main entry point for parsing. It creates a lexer and parser
/// pair for `source` and parses statements until EOF.
///
/// # Returns
///
/// Either a lexical failure, or the Program along with every diagnostic
/// recorded while building it, in order.
pub fn parse(source: &str) -> Result<(Program, Vec<Error>), Error> {
    let mut parser = Parser::new(Lexer::new(source))?;
    let program = parse_program(&mut parser)?;

    Ok((program, parser.into_errors()))
}

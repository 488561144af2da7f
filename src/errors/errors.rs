use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A lexical failure or a parser diagnostic, tagged with the source line it
/// was raised on.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_internal(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Lexical failures end the token stream; everything else is a diagnostic
    /// the parser records and moves past.
    pub fn is_fatal(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnexpectedCharacter { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedLiteral { .. } => "UnexpectedLiteral",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { character, .. } => ErrorTip::Suggestion(format!(
                "`{}` is not part of the language",
                character
            )),
            ErrorImpl::UnexpectedToken { expected, .. } if *expected == TokenKind::Semicolon => {
                ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
            }
            ErrorImpl::UnexpectedToken { expected, .. } => {
                ErrorTip::Suggestion(format!("expected {} here", expected))
            }
            ErrorImpl::UnexpectedLiteral { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { target, .. } if *target == "integer" => {
                ErrorTip::Suggestion(String::from("is it above the integer limit?"))
            }
            ErrorImpl::NumberParseError { target, .. } => {
                ErrorTip::Suggestion(format!("is it a valid {} literal?", target))
            }
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split it into smaller statements",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, at line {}", self.internal_error, self.line)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    /// `column` is the 0-based character offset of `character` in its line
    #[error("unexpected character {character:?}")]
    UnexpectedCharacter { character: String, column: usize },
    #[error("unexpected token {token:?}, expected {expected}")]
    UnexpectedToken { token: String, expected: TokenKind },
    #[error("unexpected literal {token:?} ({kind})")]
    UnexpectedLiteral { token: String, kind: TokenKind },
    #[error("could not parse {token:?} as {target}")]
    NumberParseError { token: String, target: &'static str },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

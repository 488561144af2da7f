use std::fmt::Display;

use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum TokenKind {
    EOF,
    Illegal,

    // Skipped, never handed to the parser
    Whitespace,
    Newline,
    LineComment,
    BlockComment,

    Semicolon,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Integer,
    Float,
    String,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,
}

impl TokenKind {
    /// Kinds the lexer consumes internally before returning a token.
    pub fn is_skipped(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Newline
                | TokenKind::LineComment
                | TokenKind::BlockComment
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) @ {}", self.kind, self.value, self.line)
    }
}

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::lexer::tokens::Token;

use super::ast::Expr;

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Binary Expression
/// Represents an infix arithmetic operation in the AST.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    /// The operator token, kept for its line
    pub token: Token,
    pub right: Box<Expr>,
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

// LITERALS

/// Integer Literal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

/// Float Literal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloatLiteral {
    pub token: Token,
    pub value: f64,
}

/// String Literal
/// `value` holds the text between the quotes; the token keeps them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
}

use std::fmt::{Display, Formatter};

use serde::Serialize;

use super::{
    expressions::{BinaryExpr, FloatLiteral, IntegerLiteral, StringLiteral},
    statements::{BlockStmt, ExpressionStmt},
};

/// Program
///
/// The root of the tree, holding every top-level statement in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// Statement
///
/// Every statement kind in the language. Consumers match exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    Expression(ExpressionStmt),
    Block(BlockStmt),
}

impl Stmt {
    /// Line of the first token of the statement.
    pub fn get_line(&self) -> usize {
        match self {
            Stmt::Expression(stmt) => stmt.token.line,
            Stmt::Block(stmt) => stmt.token.line,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Expression(stmt) => write!(f, "{}", stmt),
            Stmt::Block(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression
///
/// Every expression kind in the language. Consumers match exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Binary(BinaryExpr),
    Integer(IntegerLiteral),
    Float(FloatLiteral),
    String(StringLiteral),
}

impl Expr {
    pub fn get_line(&self) -> usize {
        match self {
            Expr::Binary(expr) => expr.left.get_line(),
            Expr::Integer(expr) => expr.token.line,
            Expr::Float(expr) => expr.token.line,
            Expr::String(expr) => expr.token.line,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Binary(expr) => write!(f, "{}", expr),
            Expr::Integer(expr) => write!(f, "{}", expr.token.value),
            Expr::Float(expr) => write!(f, "{}", expr.token.value),
            Expr::String(expr) => write!(f, "{}", expr.token.value),
        }
    }
}

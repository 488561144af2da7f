use std::{
    fmt::{Display, Formatter},
    slice::Iter,
};

use serde::Serialize;

use crate::lexer::tokens::Token;

use super::ast::{Expr, Stmt};

/// Block Statement
/// A brace-delimited, possibly empty sequence of statements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockStmt {
    /// The opening brace
    pub token: Token,
    pub body: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.body.is_empty() {
            return write!(f, "{{}}");
        }

        write!(f, "{{")?;
        for stmt in self.iter() {
            write!(f, " {}", stmt)?;
        }
        write!(f, " }}")
    }
}

/// Expression Statement
/// A single expression terminated by a semicolon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionStmt {
    /// The first token of the expression
    pub token: Token,
    pub expression: Expr,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

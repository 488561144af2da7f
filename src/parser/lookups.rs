use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::{ast::Expr, expressions::BinaryOperator}, errors::errors::Error, lexer::tokens::TokenKind};

use super::parser::Parser;

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Additive,
    Multiplicative,
}

/// Parses one operand of a binary precedence level.
pub type OperandHandler = fn(&mut Parser) -> Result<Option<Expr>, Error>;

lazy_static! {
    pub static ref OPERATOR_LOOKUP: HashMap<TokenKind, (BinaryOperator, BindingPower)> = {
        let mut map = HashMap::new();
        // Additive and multiplicative
        map.insert(TokenKind::Plus, (BinaryOperator::Add, BindingPower::Additive));
        map.insert(TokenKind::Dash, (BinaryOperator::Subtract, BindingPower::Additive));
        map.insert(TokenKind::Star, (BinaryOperator::Multiply, BindingPower::Multiplicative));
        map.insert(TokenKind::Slash, (BinaryOperator::Divide, BindingPower::Multiplicative));
        map.insert(TokenKind::Percent, (BinaryOperator::Modulo, BindingPower::Multiplicative));
        map
    };
}

/// Returns the operator for `kind` only if it binds at exactly `bp`.
pub fn lookup_operator(kind: TokenKind, bp: BindingPower) -> Option<BinaryOperator> {
    OPERATOR_LOOKUP
        .get(&kind)
        .filter(|(_, power)| *power == bp)
        .map(|(operator, _)| *operator)
}

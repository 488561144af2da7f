use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, FloatLiteral, IntegerLiteral, StringLiteral},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{BindingPower, OperandHandler},
    parser::{ParseResult, Parser},
};

pub fn parse_expr(parser: &mut Parser) -> ParseResult<Expr> {
    parse_additive_expr(parser)
}

/// AdditiveExpression: MultiplicativeExpression (('+' | '-') MultiplicativeExpression)*
pub fn parse_additive_expr(parser: &mut Parser) -> ParseResult<Expr> {
    parse_binary_expr(parser, BindingPower::Additive, parse_multiplicative_expr)
}

/// MultiplicativeExpression: PrimaryExpression (('*' | '/' | '%') PrimaryExpression)*
pub fn parse_multiplicative_expr(parser: &mut Parser) -> ParseResult<Expr> {
    parse_binary_expr(parser, BindingPower::Multiplicative, parse_primary_expr)
}

/// Folds every operator of power `bp` into a left-leaning tree, so
/// `1 - 2 - 3` becomes `((1 - 2) - 3)`.
fn parse_binary_expr(
    parser: &mut Parser,
    bp: BindingPower,
    operand: OperandHandler,
) -> ParseResult<Expr> {
    let Some(mut left) = operand(parser)? else {
        return Ok(None);
    };

    while let Some(operator) = parser.current_operator(bp) {
        let token = parser.advance()?;

        let Some(right) = operand(parser)? else {
            return Ok(None);
        };

        left = Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            token,
            right: Box::new(right),
        });
    }

    Ok(Some(left))
}

pub fn parse_primary_expr(parser: &mut Parser) -> ParseResult<Expr> {
    if parser.at(TokenKind::OpenParen) {
        return parse_grouping_expr(parser);
    }

    parse_literal(parser)
}

/// GroupedExpression: '(' Expression ')'
pub fn parse_grouping_expr(parser: &mut Parser) -> ParseResult<Expr> {
    parser.nested(parse_grouping_body)
}

fn parse_grouping_body(parser: &mut Parser) -> ParseResult<Expr> {
    if parser.eat(TokenKind::OpenParen)?.is_none() {
        return Ok(None);
    }

    let Some(expr) = parse_expr(parser)? else {
        return Ok(None);
    };

    if parser.eat(TokenKind::CloseParen)?.is_none() {
        return Ok(None);
    }

    Ok(Some(expr))
}

pub fn parse_literal(parser: &mut Parser) -> ParseResult<Expr> {
    match parser.current_token_kind() {
        TokenKind::Integer => parse_integer_literal(parser),
        TokenKind::Float => parse_float_literal(parser),
        TokenKind::String => parse_string_literal(parser),
        kind => {
            parser.push_error(ErrorImpl::UnexpectedLiteral {
                token: parser.current_token().value.clone(),
                kind,
            });
            Ok(None)
        }
    }
}

pub fn parse_integer_literal(parser: &mut Parser) -> ParseResult<Expr> {
    let Some(token) = parser.eat(TokenKind::Integer)? else {
        return Ok(None);
    };

    let value = match token.value.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            parser.push_error_at(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                    target: "integer",
                },
                token.line,
            );
            0
        }
    };

    Ok(Some(Expr::Integer(IntegerLiteral { token, value })))
}

pub fn parse_float_literal(parser: &mut Parser) -> ParseResult<Expr> {
    let Some(token) = parser.eat(TokenKind::Float)? else {
        return Ok(None);
    };

    let value = match token.value.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            parser.push_error_at(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                    target: "float",
                },
                token.line,
            );
            0.0
        }
    };

    Ok(Some(Expr::Float(FloatLiteral { token, value })))
}

pub fn parse_string_literal(parser: &mut Parser) -> ParseResult<Expr> {
    let Some(token) = parser.eat(TokenKind::String)? else {
        return Ok(None);
    };

    // Both quote styles are a single byte wide
    let end = token.value.len().saturating_sub(1);
    let value = token.value.get(1..end).unwrap_or_default().to_string();

    Ok(Some(Expr::String(StringLiteral { token, value })))
}

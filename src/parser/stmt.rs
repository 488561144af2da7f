use crate::{
    ast::{
        ast::{Program, Stmt},
        statements::{BlockStmt, ExpressionStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expr,
    parser::{ParseResult, Parser},
};

/// Program: StatementList EOF
pub fn parse_program(parser: &mut Parser) -> Result<Program, Error> {
    let statements = parse_stmt_list(parser, TokenKind::EOF)?;
    parser.eat(TokenKind::EOF)?;

    Ok(Program { statements })
}

/// StatementList: Statement+, until the lookahead is `stop`.
///
/// At least one statement is attempted before `stop` is checked. Failed
/// statements are skipped with `synchronize`, and end of input always ends
/// the list so an unclosed block cannot spin.
pub fn parse_stmt_list(parser: &mut Parser, stop: TokenKind) -> Result<Vec<Stmt>, Error> {
    let mut body = vec![];

    loop {
        match parse_stmt(parser)? {
            Some(stmt) => body.push(stmt),
            None => parser.synchronize(stop)?,
        }

        if parser.at(stop) || parser.is_at_end() {
            return Ok(body);
        }
    }
}

pub fn parse_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    if parser.at(TokenKind::OpenCurly) {
        return parse_block_stmt(parser);
    }

    parse_expression_stmt(parser)
}

/// BlockStatement: '{' StatementList? '}'
pub fn parse_block_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    parser.nested(parse_block_body)
}

fn parse_block_body(parser: &mut Parser) -> ParseResult<Stmt> {
    let Some(token) = parser.eat(TokenKind::OpenCurly)? else {
        return Ok(None);
    };

    // `{}` has no statement list at all
    let body = if parser.at(TokenKind::CloseCurly) {
        vec![]
    } else {
        parse_stmt_list(parser, TokenKind::CloseCurly)?
    };

    if parser.eat(TokenKind::CloseCurly)?.is_none() {
        return Ok(None);
    }

    Ok(Some(Stmt::Block(BlockStmt { token, body })))
}

/// ExpressionStatement: Expression ';'
pub fn parse_expression_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let token = parser.current_token().clone();

    let Some(expression) = parse_expr(parser)? else {
        return Ok(None);
    };

    if parser.eat(TokenKind::Semicolon)?.is_none() {
        return Ok(None);
    }

    Ok(Some(Stmt::Expression(ExpressionStmt { token, expression })))
}

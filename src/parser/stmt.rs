use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expr,
    lookups::{BindingPower, LOOKUPS},
    parser::Parser,
};

/// What a single statement slot produced.
#[derive(Debug)]
pub enum StmtOutcome {
    Parsed(Stmt),
    /// An empty statement, or one that failed and was skipped
    Skipped,
    /// The statement failed on the `}` closing the enclosing block;
    /// the parser is left on that brace
    BlockEnd,
}

/// Parses one statement, recording and skipping past it on failure.
///
/// A bare `;` is an empty statement and yields nothing.
pub fn parse_stmt_or_recover(parser: &mut Parser) -> StmtOutcome {
    if parser.current_is(TokenKind::Semicolon) {
        return StmtOutcome::Skipped;
    }

    match parse_stmt(parser) {
        Ok(stmt) => StmtOutcome::Parsed(stmt),
        Err(error) => {
            let failed_at = *error.get_position();
            parser.record(error);

            if parser.synchronize(failed_at) {
                StmtOutcome::BlockEnd
            } else {
                StmtOutcome::Skipped
            }
        }
    }
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.traced("parse_stmt", |parser| {
        if let Some(stmt_fn) = LOOKUPS.stmt.get(&parser.current_token_kind()) {
            return stmt_fn(parser);
        }

        parse_expression_stmt(parser)
    })
}

fn skip_semicolon(parser: &mut Parser) {
    if parser.peek_is(TokenKind::Semicolon) {
        parser.next_token();
    }
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    skip_semicolon(parser);

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let identifier = IdentifierExpr::from(parser.expect_peek(TokenKind::Identifier)?);
    parser.expect_peek(TokenKind::Assign)?;
    parser.next_token();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    skip_semicolon(parser);

    Ok(Stmt::Let(LetStmt {
        token,
        identifier,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    // `return` directly followed by `;`, `}` or the end of input returns nothing
    let value = match parser.peek_token_kind() {
        TokenKind::Semicolon | TokenKind::ClosingBrace | TokenKind::EOF => None,
        _ => {
            parser.next_token();
            Some(parse_expr(parser, BindingPower::Lowest)?)
        }
    };

    skip_semicolon(parser);

    Ok(Stmt::Return(ReturnStmt { token, value }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

/// Parses `{ ... }` starting on the opening brace and ending on the closing one.
///
/// Inner statements recover individually, so one bad statement does not
/// discard the whole block.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.traced("parse_block", |parser| {
        let token = parser.current_token().clone();
        parser.next_token();

        let statements = parser.in_block(|parser| {
            let mut statements = Vec::new();
            while !parser.current_is(TokenKind::ClosingBrace)
                && !parser.current_is(TokenKind::EOF)
            {
                match parse_stmt_or_recover(parser) {
                    StmtOutcome::Parsed(stmt) => statements.push(stmt),
                    StmtOutcome::Skipped => {}
                    // Already on the closing brace
                    StmtOutcome::BlockEnd => break,
                }

                parser.next_token();
            }

            statements
        });

        if parser.current_is(TokenKind::EOF) {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::ClosingBrace,
                    found: TokenKind::EOF,
                },
                parser.current_token().position(),
            ));
        }

        Ok(BlockStmt { token, statements })
    })
}

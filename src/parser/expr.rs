use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanExpr, FunctionExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr, PrefixExpr,
            WhileExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{BindingPower, LOOKUPS},
    parser::Parser,
    stmt::parse_block,
};

/// Precedence climbing over the current token.
///
/// Starts on the first token of the expression and finishes on its last.
/// Climbing stops at a `;`, at an operator that binds no tighter than `bp`,
/// or at a token with no infix handler.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.traced("parse_expr", |parser| {
        // First parse NUD
        let token = parser.current_token();
        let Some(nud_fn) = LOOKUPS.nud.get(&token.kind) else {
            let error = match token.kind {
                TokenKind::Illegal => ErrorImpl::IllegalToken { token: token.literal.clone() },
                kind => ErrorImpl::NoPrefixParseFn { kind },
            };
            return Err(Error::new(error, token.position()));
        };

        let mut left = nud_fn(parser)?;

        // While the next operator binds tighter than the caller, fold it into lhs
        while !parser.peek_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
            let Some(led_fn) = LOOKUPS.led.get(&parser.peek_token_kind()) else {
                return Ok(left);
            };

            parser.next_token();
            left = led_fn(parser, left)?;
        }

        Ok(left)
    })
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::Identifier(IdentifierExpr::from(parser.current_token().clone())))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Ok(Expr::Integer(IntegerExpr { token, value })),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError { token: token.literal.clone() },
            token.position(),
        )),
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();
    let value = token.is(TokenKind::True);

    Ok(Expr::Boolean(BooleanExpr { token, value }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.next_token();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    let bp = parser.current_binding_power();
    parser.next_token();

    // Same power on the right keeps equal-precedence chains left-associative
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.next_token();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::ClosingParenthesis)?;

    Ok(expr)
}

/// Parses `( <condition> )` followed by the opening brace of a body.
fn parse_condition(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect_peek(TokenKind::OpeningParenthesis)?;
    parser.next_token();

    let condition = parse_expr(parser, BindingPower::Lowest)?;

    parser.expect_peek(TokenKind::ClosingParenthesis)?;
    parser.expect_peek(TokenKind::OpeningBrace)?;

    Ok(condition)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    let condition = parse_condition(parser)?;
    let consequence = parse_block(parser)?;

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.next_token();
        parser.expect_peek(TokenKind::OpeningBrace)?;
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_while_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    let condition = parse_condition(parser)?;
    let body = parse_block(parser)?;

    Ok(Expr::While(WhileExpr {
        token,
        condition: Box::new(condition),
        body,
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // fn(a, b,) { ... }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpeningParenthesis)?;
    let parameters = parse_function_params(parser)?;
    parser.expect_peek(TokenKind::OpeningBrace)?;

    let body = parse_block(parser)?;

    Ok(Expr::Function(FunctionExpr {
        token,
        parameters,
        body,
    }))
}

/// Parses a comma separated identifier list, from `(` up to and including `)`.
fn parse_function_params(parser: &mut Parser) -> Result<Vec<IdentifierExpr>, Error> {
    parser.traced("parse_function_params", |parser| {
        let mut parameters = Vec::new();

        while !parser.peek_is(TokenKind::ClosingParenthesis) {
            let name = parser.expect_peek(TokenKind::Identifier)?;
            parameters.push(IdentifierExpr::from(name));

            if parser.peek_is(TokenKind::Comma) {
                parser.next_token();
            } else {
                break;
            }
        }

        parser.expect_peek(TokenKind::ClosingParenthesis)?;

        Ok(parameters)
    })
}

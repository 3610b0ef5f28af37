use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::{Expr, Stmt}, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, loosest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Logical,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Prefix,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr) -> Result<Expr, Error>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

/// Handler tables keyed by token kind. Filled once by `create_token_lookups`.
#[derive(Default)]
pub struct Lookups {
    pub stmt: StmtLookup,
    pub nud: NUDLookup,
    pub led: LEDLookup,
    pub binding_power: BPLookup,
}

impl Lookups {
    /// Registers a left denotation (infix) handler and its binding power.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power.insert(kind, binding_power);
        self.led.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud.insert(kind, nud_fn);
    }

    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt.insert(kind, stmt_fn);
    }

    /// Tokens without an infix role bind at `Lowest`, which ends precedence climbing.
    pub fn binding_power_of(&self, kind: TokenKind) -> BindingPower {
        self.binding_power
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }
}

pub fn create_token_lookups(lookups: &mut Lookups) {
    // Logical
    lookups.led(TokenKind::And, BindingPower::Logical, parse_infix_expr);
    lookups.led(TokenKind::Or, BindingPower::Logical, parse_infix_expr);

    // Equality and relational
    lookups.led(TokenKind::Equal, BindingPower::Equality, parse_infix_expr);
    lookups.led(TokenKind::NotEqual, BindingPower::Equality, parse_infix_expr);
    lookups.led(TokenKind::LessThan, BindingPower::Relational, parse_infix_expr);
    lookups.led(TokenKind::BiggerThan, BindingPower::Relational, parse_infix_expr);

    // Additive and multiplicative
    lookups.led(TokenKind::Plus, BindingPower::Additive, parse_infix_expr);
    lookups.led(TokenKind::Minus, BindingPower::Additive, parse_infix_expr);
    lookups.led(TokenKind::Asterisk, BindingPower::Multiplicative, parse_infix_expr);
    lookups.led(TokenKind::Slash, BindingPower::Multiplicative, parse_infix_expr);

    // Literals and symbols
    lookups.nud(TokenKind::Identifier, parse_identifier_expr);
    lookups.nud(TokenKind::Integer, parse_integer_expr);
    lookups.nud(TokenKind::True, parse_boolean_expr);
    lookups.nud(TokenKind::False, parse_boolean_expr);
    lookups.nud(TokenKind::Function, parse_function_expr);

    // Unary
    lookups.nud(TokenKind::Bang, parse_prefix_expr);
    lookups.nud(TokenKind::Not, parse_prefix_expr);
    lookups.nud(TokenKind::Minus, parse_prefix_expr);
    lookups.nud(TokenKind::Plus, parse_prefix_expr);

    lookups.nud(TokenKind::OpeningParenthesis, parse_grouping_expr);
    lookups.nud(TokenKind::If, parse_if_expr);
    lookups.nud(TokenKind::While, parse_while_expr);

    // Statements
    lookups.stmt(TokenKind::Let, parse_let_stmt);
    lookups.stmt(TokenKind::Return, parse_return_stmt);
    lookups.stmt(TokenKind::OpeningBrace, parse_block_stmt);
}

lazy_static! {
    pub static ref LOOKUPS: Lookups = {
        let mut lookups = Lookups::default();
        create_token_lookups(&mut lookups);
        lookups
    };
}

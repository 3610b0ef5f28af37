use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::{
    expressions::{
        BooleanExpr, FunctionExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr, PostfixExpr,
        PrefixExpr, WhileExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

/// Statement
///
/// The closed set of statement forms. Each payload keeps the token that
/// introduced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Block(BlockStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn token(&self) -> &Token {
        match self {
            Stmt::Let(stmt) => &stmt.token,
            Stmt::Return(stmt) => &stmt.token,
            Stmt::Block(stmt) => &stmt.token,
            Stmt::Expression(stmt) => &stmt.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Let(stmt) => stmt.fmt(f),
            Stmt::Return(stmt) => stmt.fmt(f),
            Stmt::Block(stmt) => stmt.fmt(f),
            Stmt::Expression(stmt) => stmt.fmt(f),
        }
    }
}

/// Expression
///
/// The closed set of expression forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Integer(IntegerExpr),
    Boolean(BooleanExpr),
    Function(FunctionExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    Postfix(PostfixExpr),
    If(IfExpr),
    While(WhileExpr),
}

impl Expr {
    pub fn token(&self) -> &Token {
        match self {
            Expr::Identifier(expr) => &expr.token,
            Expr::Integer(expr) => &expr.token,
            Expr::Boolean(expr) => &expr.token,
            Expr::Function(expr) => &expr.token,
            Expr::Prefix(expr) => &expr.token,
            Expr::Infix(expr) => &expr.token,
            Expr::Postfix(expr) => &expr.token,
            Expr::If(expr) => &expr.token,
            Expr::While(expr) => &expr.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Identifier(expr) => expr.fmt(f),
            Expr::Integer(expr) => expr.fmt(f),
            Expr::Boolean(expr) => expr.fmt(f),
            Expr::Function(expr) => expr.fmt(f),
            Expr::Prefix(expr) => expr.fmt(f),
            Expr::Infix(expr) => expr.fmt(f),
            Expr::Postfix(expr) => expr.fmt(f),
            Expr::If(expr) => expr.fmt(f),
            Expr::While(expr) => expr.fmt(f),
        }
    }
}

/// Program
///
/// The parse root: every top-level statement in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, "{}", stmt)?;
        }

        Ok(())
    }
}

//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the lexer's token
//! stream into an Abstract Syntax Tree. It uses a Pratt parser for
//! expressions with proper operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, blocks, expression statements)
//! - Expression parsing (prefix/infix operators, literals, `if`, `while`, `fn`)
//! - Error accumulation and per-statement recovery
//!
//! The parser reads the lexer through a two-token window (current and
//! peek) and uses NUD (null denotation) and LED (left denotation)
//! functions with binding powers for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod trace;

#[cfg(test)]
mod tests;

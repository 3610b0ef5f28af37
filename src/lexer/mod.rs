//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Byte-at-a-time scanning with a one-byte lookahead
//! - Recognition of keywords, identifiers, integers, and operators
//! - Line/column tracking for error reporting
//! - Turning unrecognised input into `Illegal` tokens instead of failing

pub mod lexer;
pub mod tokens;

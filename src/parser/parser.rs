//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser pulls tokens lazily from a `Lexer` through a two-token
//! window, dispatches statements and expressions through the tables in
//! `lookups`, and records every diagnostic instead of stopping at the first.

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{BindingPower, LOOKUPS},
    stmt::{parse_stmt_or_recover, StmtOutcome},
    trace::ParseObserver,
};

/// The main parser structure that maintains parsing state.
///
/// Owns its lexer exclusively; `current` and `peek` are the only tokens
/// held at any time.
pub struct Parser {
    /// Source of further tokens
    lexer: Lexer,
    /// The token under consideration
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Optional receiver of enter/exit events for each grammar rule
    observer: Option<Box<dyn ParseObserver>>,
    /// Current rule nesting, reported to the observer
    depth: usize,
    /// Number of blocks currently open
    block_depth: usize,
}

impl Parser {
    /// Creates a new Parser and fills the current/peek window.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            observer: None,
            depth: 0,
            block_depth: 0,
        }
    }

    /// Creates a Parser that reports each grammar rule it enters and leaves.
    pub fn with_observer(lexer: Lexer, observer: Box<dyn ParseObserver>) -> Self {
        let mut parser = Parser::new(lexer);
        parser.observer = Some(observer);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts peek into current and pulls a fresh peek from the lexer.
    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances only if the peek token has the expected kind.
    ///
    /// # Returns
    ///
    /// The new current token, or an `UnexpectedToken` error located at the
    /// peek token. The window is left untouched on error.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek_is(expected_kind) {
            self.next_token();
            Ok(self.current.clone())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.peek.kind,
                },
                self.peek.position(),
            ))
        }
    }

    pub fn current_binding_power(&self) -> BindingPower {
        LOOKUPS.binding_power_of(self.current.kind)
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        LOOKUPS.binding_power_of(self.peek.kind)
    }

    /// Returns the diagnostics recorded so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Returns the diagnostics rendered as `Ln <line>, Col <column>: <message>`.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    pub fn record(&mut self, error: Error) {
        debug!("recorded parse error: {}", error);
        self.errors.push(error);
    }

    /// Skips the rest of a statement that failed at `failed_at`.
    ///
    /// Stops on a `;` outside any braces skipped along the way, at the end
    /// of input, or, inside a block, just before the `}` that closes it.
    ///
    /// Returns `true` when the statement failed on that closing `}` itself.
    /// The parser is then left on the brace, which still belongs to the block.
    pub fn synchronize(&mut self, failed_at: Position) -> bool {
        if self.block_depth > 0
            && self.current_is(TokenKind::ClosingBrace)
            && self.current.position() == failed_at
        {
            return true;
        }

        let mut nesting = 0usize;

        loop {
            match self.current.kind {
                TokenKind::EOF => return false,
                TokenKind::Semicolon if nesting == 0 => return false,
                TokenKind::OpeningBrace => nesting += 1,
                TokenKind::ClosingBrace => nesting = nesting.saturating_sub(1),
                _ => {}
            }

            if self.peek_is(TokenKind::EOF)
                || (nesting == 0 && self.block_depth > 0 && self.peek_is(TokenKind::ClosingBrace))
            {
                return false;
            }

            self.next_token();
        }
    }

    /// Runs `block_fn` with the open-block count raised by one.
    pub fn in_block<T>(&mut self, block_fn: impl FnOnce(&mut Parser) -> T) -> T {
        self.block_depth += 1;
        let result = block_fn(self);
        self.block_depth -= 1;

        result
    }

    /// Runs `rule` between enter/exit notifications to the observer.
    pub fn traced<T>(&mut self, rule: &'static str, rule_fn: impl FnOnce(&mut Parser) -> T) -> T {
        self.depth += 1;
        if let Some(observer) = self.observer.as_mut() {
            observer.enter(rule, &self.current, &self.peek, self.depth);
        }

        let result = rule_fn(self);

        if let Some(observer) = self.observer.as_mut() {
            observer.exit(rule, &self.current, &self.peek, self.depth);
        }
        self.depth -= 1;

        result
    }

    /// Parses statements until end of input.
    ///
    /// Always returns a program; check `errors()` for what was skipped.
    pub fn parse_program(&mut self) -> Program {
        self.traced("parse_program", |parser| {
            let mut program = Program::default();

            while !parser.current_is(TokenKind::EOF) {
                if let StmtOutcome::Parsed(stmt) = parse_stmt_or_recover(parser) {
                    program.statements.push(stmt);
                }

                parser.next_token();
            }

            program
        })
    }
}

/// Parses `source` into a program.
///
/// This is the main entry point for parsing. It creates a lexer and a
/// parser instance and parses all statements until EOF.
///
/// # Returns
///
/// A tuple containing:
/// - The Program (possibly missing the statements that failed)
/// - Every diagnostic recorded, in source order
pub fn parse(source: String) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.into_errors())
}

use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A diagnostic recorded while parsing.
///
/// Displays as `Ln <line>, Col <column>: <message>`.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{position}: {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The message without its position prefix.
    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalToken { .. } => "IllegalToken",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalToken { .. } => ErrorTip::None,
            ErrorImpl::NoPrefixParseFn { kind } => match kind {
                TokenKind::Semicolon | TokenKind::EOF | TokenKind::ClosingParenthesis => {
                    ErrorTip::Suggestion(String::from("an expression is missing here"))
                }
                _ => ErrorTip::Suggestion(format!("`{}` cannot start an expression", kind)),
            },
            ErrorImpl::UnexpectedToken { expected, .. } => match expected {
                TokenKind::ClosingParenthesis => {
                    ErrorTip::Suggestion(String::from("did you forget a closing `)`?"))
                }
                TokenKind::ClosingBrace => {
                    ErrorTip::Suggestion(String::from("did you forget a closing `}`?"))
                }
                TokenKind::OpeningBrace => {
                    ErrorTip::Suggestion(String::from("bodies must be wrapped in `{ }`"))
                }
                _ => ErrorTip::None,
            },
            ErrorImpl::NumberParseError { .. } => ErrorTip::Suggestion(String::from(
                "integer literals must fit in a signed 64-bit integer",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("illegal character {token:?}")]
    IllegalToken { token: String },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("expected {expected}, got {found} instead")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("could not parse {token:?} as integer")]
    NumberParseError { token: String },
}

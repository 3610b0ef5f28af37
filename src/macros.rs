//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! The lexer builds every token it emits through this macro.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's source text
/// * `$position` - The `Position` of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), Position::new(1, 1));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $position:expr) => {{
        let position: $crate::Position = $position;
        $crate::lexer::tokens::Token {
            kind: $kind,
            literal: $literal,
            line: position.line,
            column: position.column,
        }
    }};
}

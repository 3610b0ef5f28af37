//! Observation hooks for following the parser through the grammar.

use log::trace;

use crate::lexer::tokens::Token;

/// Receives a notification each time the parser enters or leaves a rule.
///
/// `depth` is 1 for the outermost rule.
pub trait ParseObserver {
    fn enter(&mut self, rule: &str, current: &Token, peek: &Token, depth: usize);
    fn exit(&mut self, rule: &str, current: &Token, peek: &Token, depth: usize);
}

/// Writes an indented BEGIN/END line per rule to the `log` facade at trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl LogObserver {
    fn indent(depth: usize) -> String {
        "\t".repeat(depth.saturating_sub(1))
    }
}

impl ParseObserver for LogObserver {
    fn enter(&mut self, rule: &str, current: &Token, peek: &Token, depth: usize) {
        trace!("{}BEGIN {} ({} {})", Self::indent(depth), rule, current.kind, peek.kind);
    }

    fn exit(&mut self, rule: &str, current: &Token, peek: &Token, depth: usize) {
        trace!("{}END {} ({} {})", Self::indent(depth), rule, current.kind, peek.kind);
    }
}

#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod object;
pub mod parser;
pub mod repl;

/// A 1-based line/column pair locating a character in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ln {}, Col {}", self.line, self.column)
    }
}

/// Returns the text of the line `position` points into, without its line break.
pub fn get_line_at_position<'a>(source: &'a str, position: &Position) -> Option<&'a str> {
    if position.line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(position.line as usize - 1)
        .map(|line| line.trim_end_matches('\r'))
}

pub fn display_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: NoPrefixParseFn (no prefix parse function for Asterisk found)
        -> main.mk
           |
        20 | let a = * 4;
           | --------^
    */

    let position = error.get_position();
    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.message()));
    } else {
        out.push_str(&format!(
            "Error: {} ({}, {})\n",
            error.get_error_name(),
            error.message(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}:{}:{}\n", file, position.line, position.column));

    let Some(line_text) = get_line_at_position(source, position) else {
        return out;
    };

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();

    (&string[start..], start)
}

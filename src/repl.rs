//! Line-at-a-time interactive prompt.
//!
//! Each line is tokenized or parsed on its own; nothing carries over
//! between lines.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::{
    config::Mode,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::Parser,
};

pub const PROMPT: &str = ">> ";

/// Runs the prompt until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(input: R, output: &mut W, mode: Mode) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };
        let line = line?;

        match mode {
            Mode::Tokens => write_tokens(&line, output)?,
            Mode::Parse | Mode::Compile => {
                write_program(&line, output)?;
            }
        }
    }
}

/// Writes one token per line, stopping before `EOF`.
pub fn write_tokens<W: Write>(source: &str, output: &mut W) -> io::Result<()> {
    let mut lexer = Lexer::new(source.to_string());

    loop {
        let token = lexer.next_token();
        if token.is(TokenKind::EOF) {
            return Ok(());
        }

        writeln!(output, "{}", token)?;
    }
}

/// Parses `source`, then writes its diagnostics followed by the rendered program.
///
/// Returns the number of diagnostics.
pub fn write_program<W: Write>(source: &str, output: &mut W) -> io::Result<usize> {
    let mut parser = Parser::new(Lexer::new(source.to_string()));
    let program = parser.parse_program();

    let errors = parser.error_messages();
    if !errors.is_empty() {
        writeln!(output, "{}", format!("Parser has {} errors", errors.len()).red())?;

        for msg in &errors {
            writeln!(output, "- {}", msg)?;
        }
    }

    writeln!(output, "{}", program)?;

    Ok(errors.len())
}

//! Command line configuration for the `monkey` binary.

use std::{ffi::OsString, path::PathBuf};

use clap::{App, Arg, ArgGroup};

/// What the front end does with its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print every token
    Tokens,
    /// Print the rendered program and its diagnostics
    Parse,
    /// Reserved for a later compilation stage
    Compile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    /// Source file; the interactive prompt is used when absent
    pub file: Option<PathBuf>,
    /// Log every grammar rule the parser enters
    pub trace: bool,
}

impl Config {
    pub fn app() -> App<'static, 'static> {
        App::new("monkey")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Tokenizes and parses monkey source code")
            .arg(
                Arg::with_name("tokens")
                    .short("t")
                    .long("tokens")
                    .help("Print the token stream instead of the AST"),
            )
            .arg(
                Arg::with_name("parse")
                    .short("p")
                    .long("parse")
                    .help("Print the parsed AST (default)"),
            )
            .arg(
                Arg::with_name("compile")
                    .short("c")
                    .long("compile")
                    .help("Compile the program (not implemented)"),
            )
            .group(ArgGroup::with_name("mode").args(&["tokens", "parse", "compile"]))
            .arg(
                Arg::with_name("trace")
                    .long("trace")
                    .help("Log each grammar rule the parser enters and leaves"),
            )
            .arg(
                Arg::with_name("FILE")
                    .index(1)
                    .help("Source file to read; starts the interactive prompt when omitted"),
            )
    }

    /// Builds a config from a full argument list, program name first.
    pub fn from_args<I, T>(args: I) -> Result<Config, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Config::app().get_matches_from_safe(args)?;

        let mode = if matches.is_present("tokens") {
            Mode::Tokens
        } else if matches.is_present("compile") {
            Mode::Compile
        } else {
            Mode::Parse
        };

        Ok(Config {
            mode,
            file: matches.value_of("FILE").map(PathBuf::from),
            trace: matches.is_present("trace"),
        })
    }
}

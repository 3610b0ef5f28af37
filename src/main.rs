use std::{
    fs::read_to_string,
    io::{self, Write},
    process,
};

use log::{info, warn, LevelFilter};
use monkey::{
    config::{Config, Mode},
    display_error,
    lexer::lexer::Lexer,
    parser::{parser::Parser, trace::LogObserver},
    repl,
};

fn main() {
    let config = Config::from_args(std::env::args_os()).unwrap_or_else(|e| e.exit());
    init_logging(config.trace);

    let Some(file) = config.file.as_ref() else {
        println!("monkey {} interactive prompt", env!("CARGO_PKG_VERSION"));

        let stdin = io::stdin();
        if let Err(e) = repl::start(stdin.lock(), &mut io::stdout(), config.mode) {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        return;
    };

    let source = match read_to_string(file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: failed to read {}: {}", file.display(), e);
            process::exit(1);
        }
    };
    let file_name = file.to_string_lossy();

    let mut stdout = io::stdout();
    let result = match config.mode {
        Mode::Tokens => repl::write_tokens(&source, &mut stdout).map(|_| 0),
        Mode::Parse => run_parse(&source, &file_name, config.trace, &mut stdout),
        Mode::Compile => {
            warn!("compilation of {} requested but not implemented", file_name);
            eprintln!("Error: compilation is not implemented yet");
            process::exit(2);
        }
    };

    match result {
        Ok(0) => {}
        Ok(_) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_logging(trace: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if trace {
        builder.filter_module("monkey", LevelFilter::Trace);
    }
    builder.init();
}

/// Prints the rendered program, then every diagnostic with its source line.
///
/// Returns the number of diagnostics.
fn run_parse<W: Write>(
    source: &str,
    file_name: &str,
    trace: bool,
    output: &mut W,
) -> io::Result<usize> {
    let lexer = Lexer::new(source.to_string());
    let mut parser = if trace {
        Parser::with_observer(lexer, Box::new(LogObserver))
    } else {
        Parser::new(lexer)
    };

    let program = parser.parse_program();
    info!("parsed {} statements from {}", program.statements.len(), file_name);

    writeln!(output, "{}", program)?;

    let errors = parser.into_errors();
    for error in &errors {
        eprint!("{}", display_error(error, source, file_name));
    }

    Ok(errors.len())
}

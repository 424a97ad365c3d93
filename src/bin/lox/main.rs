//! # Lox
//!
//! This binary is the driver of the Lox interpreter. It wires lexer, parser,
//! and evaluator into the `tokenize`, `parse`, `evaluate`, and `run`
//! subcommands.

mod cli;

use cli::*;

use std::{fs, path::Path, process::ExitCode};

use log::debug;
use lox_lang::{
    interpreter::Interpreter,
    lexer::{LexError, Lexer, Token},
    parser::{self, ParseState},
};

/// Exit status for lexer and parser errors.
const DATA_ERROR: u8 = 65;
/// Exit status for runtime errors.
const RUNTIME_ERROR: u8 = 70;

fn main() -> ExitCode {
    let args = Cli::init();

    simple_logger::init_with_level((&args.verbosity).into()).unwrap();

    match args.command {
        Commands::Tokenize(FileArgs { file }) => tokenize(&file),
        Commands::Parse(FileArgs { file }) => parse(&file),
        Commands::Evaluate(FileArgs { file }) => evaluate(&file),
        Commands::Run(FileArgs { file }) => run(&file),
    }
}

fn read_source(file: &Path) -> Result<String, ExitCode> {
    match fs::read_to_string(file) {
        Ok(source) => Ok(source),
        Err(error) => {
            eprintln!("could not read '{}': {error}", file.display());
            Err(ExitCode::FAILURE)
        }
    }
}

fn lex_source(source: &str) -> (Vec<Token>, Vec<LexError>) {
    let (tokens, errors) = Lexer::new(source).lex();

    for error in &errors {
        eprintln!("{error}");
    }

    (tokens, errors)
}

fn tokenize(file: &Path) -> ExitCode {
    let source = match read_source(file) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let (tokens, errors) = lex_source(&source);

    for token in &tokens {
        println!("{token}");
    }

    if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(DATA_ERROR)
    }
}

fn parse(file: &Path) -> ExitCode {
    let source = match read_source(file) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let (tokens, errors) = lex_source(&source);

    let mut tokens = ParseState::from(tokens);
    match parser::parse_expression(&mut tokens) {
        Ok(expression) => println!("{expression}"),
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::from(DATA_ERROR);
        }
    }

    if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(DATA_ERROR)
    }
}

fn evaluate(file: &Path) -> ExitCode {
    let source = match read_source(file) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let (tokens, errors) = lex_source(&source);
    if !errors.is_empty() {
        return ExitCode::from(DATA_ERROR);
    }

    let mut tokens = ParseState::from(tokens);
    let expression = match parser::parse_expression(&mut tokens) {
        Ok(expression) => expression,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::from(DATA_ERROR);
        }
    };

    let interpreter = Interpreter::new();
    match interpreter.evaluate_expression(&expression) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(RUNTIME_ERROR)
        }
    }
}

fn run(file: &Path) -> ExitCode {
    let source = match read_source(file) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let (tokens, errors) = lex_source(&source);
    if !errors.is_empty() {
        return ExitCode::from(DATA_ERROR);
    }

    let mut tokens = ParseState::from(tokens);
    let program = match parser::parse(&mut tokens) {
        Ok(program) => program,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::from(DATA_ERROR);
        }
    };

    debug!("executing '{}'", file.display());

    let interpreter = Interpreter::new();
    match interpreter.run(&program) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(RUNTIME_ERROR)
        }
    }
}

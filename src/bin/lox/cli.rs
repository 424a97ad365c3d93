//! # Cli
//!
//! This module contains everything needed for parsing the CLI arguments for
//! the lox binary.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Struct containing the CLI configuration for the lox binary.
#[derive(Parser, Debug)]
#[command(author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Specify the log level of the interpreter.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    pub verbosity: LogLevel,
}

impl Cli {
    pub fn init() -> Self {
        Cli::parse()
    }
}

/// Enum for specifying the log level of the interpreter.
#[derive(ValueEnum, Clone, Default, Debug)]
pub enum LogLevel {
    /// The default log level. Only critical errors will be logged.
    #[default]
    #[value(alias("0"))]
    Error,

    /// A log level, where also warnings are logged.
    #[value(alias("1"))]
    Warn,

    /// Also log information about the general state of the interpreter.
    #[value(alias("2"))]
    Info,

    /// Log everything which happens internally in the interpreter.
    #[value(alias("3"))]
    Debug,

    /// Log extra information, e.g., very verbose per-phase output.
    #[value(alias("4"))]
    Trace,
}

impl From<&LogLevel> for log::Level {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the token stream of a source file.
    Tokenize(FileArgs),

    /// Parse a single expression and pretty-print it.
    Parse(FileArgs),

    /// Evaluate a single expression and print the result.
    Evaluate(FileArgs),

    /// Execute a program.
    Run(FileArgs),
}

#[derive(Args, Debug, Clone)]
pub struct FileArgs {
    /// The path to the lox source file.
    #[arg(index = 1)]
    pub file: std::path::PathBuf,
}

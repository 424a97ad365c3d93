pub mod ast;
mod parse_state;

pub use self::parse_state::*;

use std::{error::Error, fmt::Display};

use log::debug;

use crate::lexer::{Token, TokenKind};

use self::ast::{AstNode, Expression, Program, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    /// The offending token; `None` when the token stream was exhausted.
    pub token: Option<Token>,
    pub line: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, token: &Token) -> Self {
        let offending = match token.kind {
            TokenKind::Eof => None,
            _ => Some(token.clone()),
        };

        Self {
            message: message.into(),
            token: offending,
            line: token.line,
        }
    }

    pub fn at_end(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            token: None,
            line,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.token {
            Some(token) => write!(
                f,
                "[line {}] Error at '{}': {}",
                self.line, token.lexeme, self.message
            ),
            None => write!(f, "[line {}] Error at end: {}", self.line, self.message),
        }
    }
}

impl Error for ParseError {}

pub trait FromTokens<T> {
    fn parse(tokens: &mut ParseState<T>) -> Result<AstNode, ParseError>;
}

/// Consume the next token if it has the given kind, failing with `message`
/// otherwise.
pub(crate) fn expect(
    tokens: &mut ParseState<Token>,
    kind: TokenKind,
    message: &str,
) -> Result<Token, ParseError> {
    match tokens.peek() {
        Some(token) if token.kind == kind => {
            tokens.next();
            Ok(token)
        }
        Some(token) => Err(ParseError::new(message, &token)),
        None => Err(ParseError::at_end(message, 1)),
    }
}

pub(crate) fn end_of_input(tokens: &ParseState<Token>) -> usize {
    tokens
        .last_token()
        .map(|token| token.line)
        .unwrap_or_default()
}

/// Parse a whole program: top-level statements up to the EOF token.
pub fn parse(tokens: &mut ParseState<Token>) -> Result<Program, ParseError> {
    let mut statements = vec![];

    while !matches!(
        tokens.peek(),
        None | Some(Token {
            kind: TokenKind::Eof,
            ..
        })
    ) {
        let result = Statement::parse(tokens)?;
        let AstNode::Statement(statement) = result else {
            unreachable!()
        };
        statements.push(statement);
    }

    debug!("parsed {} top-level statements", statements.len());

    Ok(Program { statements })
}

/// Parse a single expression (used by the `parse` and `evaluate` modes).
pub fn parse_expression(tokens: &mut ParseState<Token>) -> Result<Expression, ParseError> {
    let result = Expression::parse(tokens)?;
    let AstNode::Expression(expression) = result else {
        unreachable!()
    };

    Ok(expression)
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;

    use super::*;

    fn tokens(input: &str) -> ParseState<Token> {
        let (tokens, errors) = Lexer::new(input).lex();
        assert!(errors.is_empty(), "unexpected lex errors: {errors:?}");
        tokens.into()
    }

    #[test]
    fn test_parse_program_counts_statements() {
        let program = parse(&mut tokens("var a = 1; print a; a = 2;")).expect("should parse");

        assert_eq!(3, program.statements.len());
    }

    #[test]
    fn test_parse_empty_program() {
        let program = parse(&mut tokens("")).expect("should parse");

        assert!(program.statements.is_empty());
    }

    #[test]
    fn test_missing_expression_error_format() {
        let error = parse(&mut tokens("print +;")).expect_err("should fail");

        assert_eq!(
            "[line 1] Error at '+': Expect expression.",
            error.to_string()
        );
    }

    #[test]
    fn test_error_at_end_format() {
        let error = parse(&mut tokens("{ print 1;")).expect_err("should fail");

        assert_eq!("[line 1] Error at end: Expect '}' .", error.to_string());
    }
}

mod cursor;
mod token;

pub use cursor::*;
pub use token::*;

use std::{error::Error, fmt::Display};

use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    UnexpectedCharacter { line: usize, ch: char },
    UnterminatedString { line: usize },
}

pub type LexResult<T> = Result<T, LexError>;

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexError::UnexpectedCharacter { line, ch } => {
                write!(f, "[line {line}] Error: Unexpected character: {ch}")
            }
            LexError::UnterminatedString { line } => {
                write!(f, "[line {line}] Error: Unterminated string.")
            }
        }
    }
}

impl Error for LexError {}

/// Longest-match scanner over the source text. Errors do not stop the scan;
/// they are collected and the cursor moves on to the next token.
#[derive(Debug, Clone)]
pub struct Lexer {
    cursor: Cursor,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            cursor: Cursor::new(input),
            tokens: vec![],
            errors: vec![],
        }
    }

    pub fn lex(mut self) -> (Vec<Token>, Vec<LexError>) {
        loop {
            self.skip_insignificant();

            if self.cursor.is_eof() {
                break;
            }

            if let Err(error) = self.scan_token() {
                self.errors.push(error);
            }
        }

        self.tokens.push(Token::eof(self.cursor.line()));

        debug!(
            "lexed {} tokens ({} errors)",
            self.tokens.len(),
            self.errors.len()
        );

        (self.tokens, self.errors)
    }

    /// Consume whitespace runs and `//` line comments before the next token.
    fn skip_insignificant(&mut self) {
        loop {
            let next = self.cursor.peek(1);

            if next.chars().next().is_some_and(|ch| ch.is_whitespace()) {
                self.cursor.advance(1);
            } else if self.cursor.peek(2) == "//" {
                self.cursor.advance_until('\n');
            } else {
                return;
            }
        }
    }

    fn scan_token(&mut self) -> LexResult<()> {
        for width in (1..=2).rev() {
            let candidate = self.cursor.peek(width);
            if let Some(kind) = SYMBOLS.get(candidate.as_str()) {
                let line = self.cursor.line();
                let lexeme = self.cursor.advance(width);
                self.tokens.push(Token::new(*kind, lexeme, line));
                return Ok(());
            }
        }

        match self.cursor.peek(1).chars().next() {
            Some('"') => self.scan_string(),
            Some('0'..='9') => self.scan_number(),
            Some(ch) if ch.is_alphabetic() || ch == '_' => self.scan_identifier(),
            Some(ch) => {
                let line = self.cursor.line();
                self.cursor.advance(1);
                Err(LexError::UnexpectedCharacter { line, ch })
            }
            None => Ok(()),
        }
    }

    fn scan_string(&mut self) -> LexResult<()> {
        self.cursor.advance(1);
        let line = self.cursor.line();

        let consumed = self.cursor.advance_until('"');
        if !consumed.ends_with('"') {
            return Err(LexError::UnterminatedString { line });
        }

        let value = consumed[..consumed.len() - 1].to_string();
        self.tokens.push(Token {
            kind: TokenKind::String,
            lexeme: format!("\"{value}\""),
            literal: Literal::String(value),
            line,
        });

        Ok(())
    }

    fn scan_number(&mut self) -> LexResult<()> {
        let line = self.cursor.line();
        let mut lexeme = self.take_digits();

        // A dot only belongs to the number when a digit follows it.
        let ahead = self.cursor.peek(2);
        let mut chars = ahead.chars();
        if chars.next() == Some('.') && chars.next().is_some_and(|ch| ch.is_ascii_digit()) {
            lexeme.push_str(&self.cursor.advance(1));
            lexeme.push_str(&self.take_digits());
        }

        let value = lexeme.parse::<f64>().unwrap_or(f64::INFINITY);
        self.tokens.push(Token {
            kind: TokenKind::Number,
            lexeme,
            literal: Literal::Number(value),
            line,
        });

        Ok(())
    }

    fn take_digits(&mut self) -> String {
        let mut digits = String::new();

        while self.cursor.peek(1).chars().next().is_some_and(|ch| ch.is_ascii_digit()) {
            digits.push_str(&self.cursor.advance(1));
        }

        digits
    }

    fn scan_identifier(&mut self) -> LexResult<()> {
        let line = self.cursor.line();
        let mut lexeme = String::new();

        while self
            .cursor
            .peek(1)
            .chars()
            .next()
            .is_some_and(|ch| ch.is_alphanumeric() || ch == '_')
        {
            lexeme.push_str(&self.cursor.advance(1));
        }

        let kind = KEYWORDS
            .get(lexeme.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        self.tokens.push(Token::new(kind, lexeme, line));

        Ok(())
    }
}

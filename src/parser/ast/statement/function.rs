use crate::{
    lexer::{Token, TokenKind},
    parser::{
        ast::{AstNode, Block, Id},
        end_of_input, expect, FromTokens, ParseError, ParseState,
    },
};

/// `fun name(params) { body }` — declares a function in the current scope.
/// The produced value captures the scope in effect at its definition site.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: Id,
    pub parameters: Vec<Id>,
    pub body: Block,
}

impl FromTokens<Token> for Function {
    fn parse(tokens: &mut ParseState<Token>) -> Result<AstNode, ParseError> {
        tokens.next();

        let name = expect(tokens, TokenKind::Identifier, "Expect function name.")?;
        expect(tokens, TokenKind::LeftParen, "Expect '('.")?;

        let mut parameters = vec![];
        if !matches!(
            tokens.peek(),
            Some(Token {
                kind: TokenKind::RightParen,
                ..
            })
        ) {
            loop {
                let parameter = expect(tokens, TokenKind::Identifier, "Expect parameter name.")?;
                parameters.push(Id {
                    name: parameter.lexeme,
                });

                match tokens.peek() {
                    Some(Token {
                        kind: TokenKind::Comma,
                        ..
                    }) => {
                        tokens.next();
                    }
                    _ => break,
                }
            }
        }
        expect(tokens, TokenKind::RightParen, "Expect ')'.")?;

        match tokens.peek() {
            Some(Token {
                kind: TokenKind::LeftBrace,
                ..
            }) => {}
            Some(token) => return Err(ParseError::new("Expect '{' .", &token)),
            None => return Err(ParseError::at_end("Expect '{' .", end_of_input(tokens))),
        }

        let result = Block::parse(tokens)?;
        let AstNode::Block(body) = result else {
            unreachable!()
        };

        Ok(Function {
            name: Id { name: name.lexeme },
            parameters,
            body,
        }
        .into())
    }
}

impl From<Function> for AstNode {
    fn from(value: Function) -> Self {
        AstNode::Statement(super::Statement::Function(value))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        lexer::Lexer,
        parser::ast::{Return, Statement},
    };

    use super::*;

    #[test]
    fn test_parse_function_without_parameters() {
        let (tokens, _) = Lexer::new("fun answer() { return 42; }").lex();
        let result = Function::parse(&mut tokens.into());

        let AstNode::Statement(Statement::Function(function)) = result.expect("should parse")
        else {
            unreachable!()
        };

        assert_eq!("answer", function.name.name);
        assert!(function.parameters.is_empty());
        assert!(matches!(
            function.body.statements.as_slice(),
            [Statement::Return(Return { value: Some(_) })]
        ));
    }

    #[test]
    fn test_parse_function_with_parameters() {
        let (tokens, _) = Lexer::new("fun add(a, b) { return a + b; }").lex();
        let result = Function::parse(&mut tokens.into());

        let AstNode::Statement(Statement::Function(function)) = result.expect("should parse")
        else {
            unreachable!()
        };

        assert_eq!(
            vec![Id { name: "a".into() }, Id { name: "b".into() }],
            function.parameters
        );
    }

    #[test]
    fn test_parse_function_requires_brace() {
        let (tokens, _) = Lexer::new("fun nope() return 1;").lex();
        let result = Function::parse(&mut tokens.into());

        assert_eq!(
            Err(ParseError {
                message: "Expect '{' .".into(),
                token: Some(Token::new(TokenKind::Return, "return".into(), 1)),
                line: 1,
            }),
            result
        );
    }

    #[test]
    fn test_parse_function_requires_brace_at_end() {
        let (tokens, _) = Lexer::new("fun nope()").lex();
        let result = Function::parse(&mut tokens.into());

        assert_eq!(Err(ParseError::at_end("Expect '{' .", 1)), result);
    }

    #[test]
    fn test_parse_empty_expression_is_err() {
        let (tokens, _) = Lexer::new("fun nope(,) {}").lex();

        assert!(Function::parse(&mut tokens.into()).is_err());
    }
}

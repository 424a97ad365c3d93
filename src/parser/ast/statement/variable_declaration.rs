use crate::{
    lexer::{Token, TokenKind},
    parser::{
        ast::{AstNode, Expression, Id},
        expect, FromTokens, ParseError, ParseState,
    },
};

/// `var name;` or `var name = initializer;` — binds into the innermost
/// scope, shadowing any outer binding of the same name.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub name: Id,
    pub initializer: Option<Expression>,
}

impl FromTokens<Token> for VariableDeclaration {
    fn parse(tokens: &mut ParseState<Token>) -> Result<AstNode, ParseError> {
        tokens.next();

        let name = expect(tokens, TokenKind::Identifier, "Expect variable name.")?;

        let initializer = match tokens.peek() {
            Some(Token {
                kind: TokenKind::Equal,
                ..
            }) => {
                tokens.next();
                let result = Expression::parse(tokens)?;
                let AstNode::Expression(expression) = result else {
                    unreachable!()
                };
                Some(expression)
            }
            _ => None,
        };

        expect(tokens, TokenKind::Semicolon, "Expect ';'.")?;

        Ok(VariableDeclaration {
            name: Id { name: name.lexeme },
            initializer,
        }
        .into())
    }
}

impl From<VariableDeclaration> for AstNode {
    fn from(value: VariableDeclaration) -> Self {
        AstNode::Statement(super::Statement::VariableDeclaration(value))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        lexer::Lexer,
        parser::ast::{Literal, Num, Statement},
    };

    use super::*;

    #[test]
    fn test_parse_with_initializer() {
        let (tokens, _) = Lexer::new("var answer = 42;").lex();
        let result = VariableDeclaration::parse(&mut tokens.into());

        assert_eq!(
            Ok(AstNode::Statement(Statement::VariableDeclaration(
                VariableDeclaration {
                    name: Id {
                        name: "answer".into()
                    },
                    initializer: Some(Expression::Literal(Literal::Number(Num::Integer(42)))),
                }
            ))),
            result
        );
    }

    #[test]
    fn test_parse_without_initializer() {
        let (tokens, _) = Lexer::new("var answer;").lex();
        let result = VariableDeclaration::parse(&mut tokens.into());

        assert_eq!(
            Ok(AstNode::Statement(Statement::VariableDeclaration(
                VariableDeclaration {
                    name: Id {
                        name: "answer".into()
                    },
                    initializer: None,
                }
            ))),
            result
        );
    }

    #[test]
    fn test_parse_needs_semicolon() {
        let (tokens, _) = Lexer::new("var answer = 42").lex();
        let result = VariableDeclaration::parse(&mut tokens.into());

        assert!(result.is_err());
    }
}

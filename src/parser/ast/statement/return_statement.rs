use crate::{
    lexer::{Token, TokenKind},
    parser::{
        ast::{AstNode, Expression},
        expect, FromTokens, ParseError, ParseState,
    },
};

/// `return;` or `return expr;` — exits the enclosing call only.
#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub value: Option<Expression>,
}

impl FromTokens<Token> for Return {
    fn parse(tokens: &mut ParseState<Token>) -> Result<AstNode, ParseError> {
        tokens.next();

        let value = match tokens.peek() {
            Some(Token {
                kind: TokenKind::Semicolon,
                ..
            }) => None,
            _ => {
                let result = Expression::parse(tokens)?;
                let AstNode::Expression(expression) = result else {
                    unreachable!()
                };
                Some(expression)
            }
        };

        expect(tokens, TokenKind::Semicolon, "Expect ';'.")?;

        Ok(Return { value }.into())
    }
}

impl From<Return> for AstNode {
    fn from(value: Return) -> Self {
        AstNode::Statement(super::Statement::Return(value))
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
    fn test_parse_return_with_value() {
        let (tokens, _) = Lexer::new("return 42;").lex();
        let result = Return::parse(&mut tokens.into());

        assert_eq!(
            Ok(AstNode::Statement(Statement::Return(Return {
                value: Some(Expression::Literal(Literal::Number(Num::Integer(42)))),
            }))),
            result
        );
    }

    #[test]
    fn test_parse_bare_return() {
        let (tokens, _) = Lexer::new("return;").lex();
        let result = Return::parse(&mut tokens.into());

        assert_eq!(
            Ok(AstNode::Statement(Statement::Return(Return { value: None }))),
            result
        );
    }
}

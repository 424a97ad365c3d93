use crate::{
    lexer::{Token, TokenKind},
    parser::{
        ast::{AstNode, Expression},
        expect, FromTokens, ParseError, ParseState,
    },
};

/// `print expr;`
#[derive(Debug, Clone, PartialEq)]
pub struct Print {
    pub expression: Expression,
}

impl FromTokens<Token> for Print {
    fn parse(tokens: &mut ParseState<Token>) -> Result<AstNode, ParseError> {
        tokens.next();

        let result = Expression::parse(tokens)?;
        let AstNode::Expression(expression) = result else {
            unreachable!()
        };

        expect(tokens, TokenKind::Semicolon, "Expect ';'.")?;

        Ok(Print { expression }.into())
    }
}

impl From<Print> for AstNode {
    fn from(value: Print) -> Self {
        AstNode::Statement(super::Statement::Print(value))
    }
}

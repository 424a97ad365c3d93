use crate::{
    lexer::{Token, TokenKind},
    parser::{
        ast::{AstNode, Expression, Statement, VariableDeclaration},
        expect, FromTokens, ParseError, ParseState,
    },
};

/// `for (init?; condition?; step?) body`. All three header slots may be
/// empty; an empty condition counts as nil, so such a loop never runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    pub init: Option<Box<Statement>>,
    pub condition: Option<Expression>,
    pub step: Option<Expression>,
    pub body: Box<Statement>,
}

impl FromTokens<Token> for ForLoop {
    fn parse(tokens: &mut ParseState<Token>) -> Result<AstNode, ParseError> {
        tokens.next();

        expect(tokens, TokenKind::LeftParen, "Expect '('.")?;

        let init = match tokens.peek() {
            Some(Token {
                kind: TokenKind::Semicolon,
                ..
            }) => {
                tokens.next();
                None
            }
            Some(Token {
                kind: TokenKind::Var,
                ..
            }) => {
                let result = VariableDeclaration::parse(tokens)?;
                let AstNode::Statement(statement) = result else {
                    unreachable!()
                };
                Some(Box::new(statement))
            }
            _ => {
                let result = Expression::parse(tokens)?;
                let AstNode::Expression(expression) = result else {
                    unreachable!()
                };
                expect(tokens, TokenKind::Semicolon, "Expect ';'.")?;
                Some(Box::new(Statement::Expression(expression)))
            }
        };

        let condition = match tokens.peek() {
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

        let step = match tokens.peek() {
            Some(Token {
                kind: TokenKind::RightParen,
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
        expect(tokens, TokenKind::RightParen, "Expect ')'.")?;

        let result = Statement::parse(tokens)?;
        let AstNode::Statement(body) = result else {
            unreachable!()
        };

        Ok(ForLoop {
            init,
            condition,
            step,
            body: Box::new(body),
        }
        .into())
    }
}

impl From<ForLoop> for AstNode {
    fn from(value: ForLoop) -> Self {
        AstNode::Statement(Statement::ForLoop(value))
    }
}

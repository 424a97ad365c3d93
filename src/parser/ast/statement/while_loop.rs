use crate::{
    lexer::{Token, TokenKind},
    parser::{
        ast::{AstNode, Expression, Statement},
        expect, FromTokens, ParseError, ParseState,
    },
};

/// `while (condition) body`
#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoop {
    pub condition: Expression,
    pub body: Box<Statement>,
}

impl FromTokens<Token> for WhileLoop {
    fn parse(tokens: &mut ParseState<Token>) -> Result<AstNode, ParseError> {
        tokens.next();

        expect(tokens, TokenKind::LeftParen, "Expect '('.")?;
        let result = Expression::parse(tokens)?;
        let AstNode::Expression(condition) = result else {
            unreachable!()
        };
        expect(tokens, TokenKind::RightParen, "Expect ')'.")?;

        let result = Statement::parse(tokens)?;
        let AstNode::Statement(body) = result else {
            unreachable!()
        };

        Ok(WhileLoop {
            condition,
            body: Box::new(body),
        }
        .into())
    }
}

impl From<WhileLoop> for AstNode {
    fn from(value: WhileLoop) -> Self {
        AstNode::Statement(Statement::WhileLoop(value))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        lexer::Lexer,
        parser::ast::{BinaryExpression, Id, Literal, Num, Print},
    };

    use super::*;

    #[test]
    fn test_parse_while() {
        let (tokens, _) = Lexer::new("while (i < 3) print i;").lex();
        let result = WhileLoop::parse(&mut tokens.into());

        assert_eq!(
            Ok(AstNode::Statement(Statement::WhileLoop(WhileLoop {
                condition: Expression::Binary(Box::new(BinaryExpression::LessThan(
                    Expression::Id(Id { name: "i".into() }),
                    Expression::Literal(Literal::Number(Num::Integer(3))),
                ))),
                body: Box::new(Statement::Print(Print {
                    expression: Expression::Id(Id { name: "i".into() }),
                })),
            }))),
            result
        );
    }
}

use crate::{
    lexer::{Token, TokenKind},
    parser::{
        ast::{AstNode, Expression, Statement},
        expect, FromTokens, ParseError, ParseState,
    },
};

/// `if (condition) then_branch` with an optional `else` branch. The branch
/// to run is picked from the just-evaluated condition; no state outlives the
/// statement.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_branch: Box<Statement>,
    pub else_branch: Option<Box<Statement>>,
}

impl FromTokens<Token> for IfStatement {
    fn parse(tokens: &mut ParseState<Token>) -> Result<AstNode, ParseError> {
        tokens.next();

        expect(tokens, TokenKind::LeftParen, "Expect '('.")?;
        let result = Expression::parse(tokens)?;
        let AstNode::Expression(condition) = result else {
            unreachable!()
        };
        expect(tokens, TokenKind::RightParen, "Expect ')'.")?;

        let result = Statement::parse(tokens)?;
        let AstNode::Statement(then_branch) = result else {
            unreachable!()
        };

        let else_branch = match tokens.peek() {
            Some(Token {
                kind: TokenKind::Else,
                ..
            }) => {
                tokens.next();
                let result = Statement::parse(tokens)?;
                let AstNode::Statement(else_branch) = result else {
                    unreachable!()
                };
                Some(Box::new(else_branch))
            }
            _ => None,
        };

        Ok(IfStatement {
            condition,
            then_branch: Box::new(then_branch),
            else_branch,
        }
        .into())
    }
}

impl From<IfStatement> for AstNode {
    fn from(value: IfStatement) -> Self {
        AstNode::Statement(Statement::If(value))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        lexer::Lexer,
        parser::ast::{Id, Literal, Num, Print},
    };

    use super::*;

    #[test]
    fn test_parse_if_without_else() {
        let (tokens, _) = Lexer::new("if (x) print 1;").lex();
        let result = IfStatement::parse(&mut tokens.into());

        assert_eq!(
            Ok(AstNode::Statement(Statement::If(IfStatement {
                condition: Expression::Id(Id { name: "x".into() }),
                then_branch: Box::new(Statement::Print(Print {
                    expression: Expression::Literal(Literal::Number(Num::Integer(1))),
                })),
                else_branch: None,
            }))),
            result
        );
    }

    #[test]
    fn test_parse_if_with_else() {
        let (tokens, _) = Lexer::new("if (x) print 1; else print 2;").lex();
        let result = IfStatement::parse(&mut tokens.into());

        assert_eq!(
            Ok(AstNode::Statement(Statement::If(IfStatement {
                condition: Expression::Id(Id { name: "x".into() }),
                then_branch: Box::new(Statement::Print(Print {
                    expression: Expression::Literal(Literal::Number(Num::Integer(1))),
                })),
                else_branch: Some(Box::new(Statement::Print(Print {
                    expression: Expression::Literal(Literal::Number(Num::Integer(2))),
                }))),
            }))),
            result
        );
    }

    #[test]
    fn test_parse_if_needs_parens() {
        let (tokens, _) = Lexer::new("if x print 1;").lex();

        assert!(IfStatement::parse(&mut tokens.into()).is_err());
    }
}

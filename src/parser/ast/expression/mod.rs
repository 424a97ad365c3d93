mod assignment;
mod binary;
mod call;
mod grouping;
mod id;
mod literal;
mod num;
mod prefix;

pub use self::assignment::*;
pub use self::binary::*;
pub use self::call::*;
pub use self::grouping::*;
pub use self::id::*;
pub use self::literal::*;
pub use self::num::*;
pub use self::prefix::*;

use std::fmt::Display;

use crate::{
    lexer::{Token, TokenKind},
    parser::{expect, end_of_input, FromTokens, ParseError, ParseState},
};

use super::AstNode;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),
    Id(Id),
    Grouping(Grouping),
    Prefix(Prefix),
    Binary(Box<BinaryExpression>),
    Call(Call),
    Assignment(Assignment),
}

impl FromTokens<Token> for Expression {
    fn parse(tokens: &mut ParseState<Token>) -> Result<AstNode, ParseError> {
        let expr = Self::parse_operand(tokens)?;

        let Some(next) = tokens.peek() else {
            return Ok(expr.into());
        };

        match next.kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::EqualEqual
            | TokenKind::BangEqual
            | TokenKind::Less
            | TokenKind::LessEqual
            | TokenKind::Greater
            | TokenKind::GreaterEqual
            | TokenKind::And
            | TokenKind::Or => Ok(Self::parse_binary(expr, tokens)?.into()),
            TokenKind::Equal => Ok(Self::parse_assignment(expr, tokens)?.into()),
            _ => Ok(expr.into()),
        }
    }
}

impl Expression {
    /// Parse everything that binds tighter than a binary operator: literals,
    /// identifiers, groups, prefix operators, and any trailing calls.
    fn parse_operand(tokens: &mut ParseState<Token>) -> Result<Expression, ParseError> {
        let Some(next) = tokens.peek() else {
            return Err(ParseError::at_end("Expect expression.", end_of_input(tokens)));
        };

        let mut expr = match next.kind {
            TokenKind::Number
            | TokenKind::String
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Nil => {
                tokens.next();
                Expression::Literal(Literal::from_token(&next))
            }
            TokenKind::Identifier => {
                tokens.next();
                Expression::Id(Id { name: next.lexeme })
            }
            TokenKind::Minus => {
                tokens.next();
                let operand = Self::parse_operand(tokens)?;
                Expression::Prefix(Prefix::Minus(Box::new(operand)))
            }
            TokenKind::Bang => {
                tokens.next();
                let operand = Self::parse_operand(tokens)?;
                Expression::Prefix(Prefix::Bang(Box::new(operand)))
            }
            TokenKind::LeftParen => {
                tokens.next();
                let result = Self::parse(tokens)?;
                let AstNode::Expression(inner) = result else {
                    unreachable!()
                };
                expect(tokens, TokenKind::RightParen, "Expect ')'.")?;
                Expression::Grouping(Grouping(Box::new(inner)))
            }
            _ => return Err(ParseError::new("Expect expression.", &next)),
        };

        // a `(` directly after a complete operand starts a call
        while let Some(Token {
            kind: TokenKind::LeftParen,
            ..
        }) = tokens.peek()
        {
            expr = Expression::Call(Self::parse_call(expr, tokens)?);
        }

        Ok(expr)
    }

    fn parse_call(callee: Expression, tokens: &mut ParseState<Token>) -> Result<Call, ParseError> {
        tokens.next();

        let mut args = vec![];

        if let Some(Token {
            kind: TokenKind::RightParen,
            ..
        }) = tokens.peek()
        {
            tokens.next();
            return Ok(Call {
                callee: Box::new(callee),
                args,
            });
        }

        loop {
            let result = Self::parse(tokens)?;
            let AstNode::Expression(arg) = result else {
                unreachable!()
            };
            args.push(arg);

            match tokens.peek() {
                Some(Token {
                    kind: TokenKind::Comma,
                    ..
                }) => {
                    tokens.next();
                }
                _ => {
                    expect(tokens, TokenKind::RightParen, "Expect ')'.")?;
                    break;
                }
            }
        }

        Ok(Call {
            callee: Box::new(callee),
            args,
        })
    }

    fn parse_binary(
        lhs: Expression,
        tokens: &mut ParseState<Token>,
    ) -> Result<Expression, ParseError> {
        let Some(operator) = tokens.next() else {
            unreachable!()
        };

        let result = Self::parse(tokens)?;
        let AstNode::Expression(rhs) = result else {
            unreachable!()
        };

        let binary = match operator.kind {
            TokenKind::Plus => BinaryExpression::Addition(lhs, rhs),
            TokenKind::Minus => BinaryExpression::Subtraction(lhs, rhs),
            TokenKind::Star => BinaryExpression::Multiplication(lhs, rhs),
            TokenKind::Slash => BinaryExpression::Division(lhs, rhs),
            TokenKind::EqualEqual => BinaryExpression::Equal(lhs, rhs),
            TokenKind::BangEqual => BinaryExpression::NotEqual(lhs, rhs),
            TokenKind::Less => BinaryExpression::LessThan(lhs, rhs),
            TokenKind::LessEqual => BinaryExpression::LessOrEqual(lhs, rhs),
            TokenKind::Greater => BinaryExpression::GreaterThan(lhs, rhs),
            TokenKind::GreaterEqual => BinaryExpression::GreaterOrEqual(lhs, rhs),
            TokenKind::And => BinaryExpression::And(lhs, rhs),
            TokenKind::Or => BinaryExpression::Or(lhs, rhs),
            _ => unreachable!(),
        };

        Ok(Expression::Binary(Box::new(binary.balance())))
    }

    /// Assignment is right-associative and binds loosest of all, so the
    /// value is simply the rest of the expression.
    fn parse_assignment(
        target: Expression,
        tokens: &mut ParseState<Token>,
    ) -> Result<Expression, ParseError> {
        let Some(equals) = tokens.next() else {
            unreachable!()
        };

        let Expression::Id(id) = target else {
            return Err(ParseError::new("Expect expression.", &equals));
        };

        let result = Self::parse(tokens)?;
        let AstNode::Expression(value) = result else {
            unreachable!()
        };

        Ok(Expression::Assignment(Assignment {
            id,
            value: Box::new(value),
        }))
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(literal) => literal.fmt(f),
            Expression::Id(id) => id.fmt(f),
            Expression::Grouping(grouping) => grouping.fmt(f),
            Expression::Prefix(prefix) => prefix.fmt(f),
            Expression::Binary(binary) => binary.fmt(f),
            Expression::Call(call) => call.fmt(f),
            Expression::Assignment(assignment) => assignment.fmt(f),
        }
    }
}

impl From<Expression> for AstNode {
    fn from(value: Expression) -> Self {
        AstNode::Expression(value)
    }
}

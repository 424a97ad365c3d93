use std::fmt::Display;

use super::Expression;

/// A binary operation over two sub-expressions. `And` and `Or` live here as
/// well; the interpreter gives them short-circuit behavior.
#[derive(Debug, Clone, PartialEq)]
pub enum BinaryExpression {
    Addition(Expression, Expression),
    Subtraction(Expression, Expression),
    Multiplication(Expression, Expression),
    Division(Expression, Expression),
    Equal(Expression, Expression),
    NotEqual(Expression, Expression),
    LessThan(Expression, Expression),
    LessOrEqual(Expression, Expression),
    GreaterThan(Expression, Expression),
    GreaterOrEqual(Expression, Expression),
    And(Expression, Expression),
    Or(Expression, Expression),
}

impl BinaryExpression {
    pub fn inner(&self) -> (Expression, Expression) {
        match self {
            BinaryExpression::Addition(lhs, rhs)
            | BinaryExpression::Subtraction(lhs, rhs)
            | BinaryExpression::Multiplication(lhs, rhs)
            | BinaryExpression::Division(lhs, rhs)
            | BinaryExpression::Equal(lhs, rhs)
            | BinaryExpression::NotEqual(lhs, rhs)
            | BinaryExpression::LessThan(lhs, rhs)
            | BinaryExpression::LessOrEqual(lhs, rhs)
            | BinaryExpression::GreaterThan(lhs, rhs)
            | BinaryExpression::GreaterOrEqual(lhs, rhs)
            | BinaryExpression::And(lhs, rhs)
            | BinaryExpression::Or(lhs, rhs) => (lhs.clone(), rhs.clone()),
        }
    }

    pub fn converter(&self) -> impl Fn(Expression, Expression) -> BinaryExpression {
        match self {
            BinaryExpression::Addition(_, _) => BinaryExpression::Addition,
            BinaryExpression::Subtraction(_, _) => BinaryExpression::Subtraction,
            BinaryExpression::Multiplication(_, _) => BinaryExpression::Multiplication,
            BinaryExpression::Division(_, _) => BinaryExpression::Division,
            BinaryExpression::Equal(_, _) => BinaryExpression::Equal,
            BinaryExpression::NotEqual(_, _) => BinaryExpression::NotEqual,
            BinaryExpression::LessThan(_, _) => BinaryExpression::LessThan,
            BinaryExpression::LessOrEqual(_, _) => BinaryExpression::LessOrEqual,
            BinaryExpression::GreaterThan(_, _) => BinaryExpression::GreaterThan,
            BinaryExpression::GreaterOrEqual(_, _) => BinaryExpression::GreaterOrEqual,
            BinaryExpression::And(_, _) => BinaryExpression::And,
            BinaryExpression::Or(_, _) => BinaryExpression::Or,
        }
    }

    /// The operator's spelling, as it appears in pretty-printed trees.
    pub fn operator(&self) -> &'static str {
        match self {
            BinaryExpression::Addition(_, _) => "+",
            BinaryExpression::Subtraction(_, _) => "-",
            BinaryExpression::Multiplication(_, _) => "*",
            BinaryExpression::Division(_, _) => "/",
            BinaryExpression::Equal(_, _) => "==",
            BinaryExpression::NotEqual(_, _) => "!=",
            BinaryExpression::LessThan(_, _) => "<",
            BinaryExpression::LessOrEqual(_, _) => "<=",
            BinaryExpression::GreaterThan(_, _) => ">",
            BinaryExpression::GreaterOrEqual(_, _) => ">=",
            BinaryExpression::And(_, _) => "and",
            BinaryExpression::Or(_, _) => "or",
        }
    }

    /// This function balances a binary expression according to the precedence
    /// of the operators.
    ///
    /// Attention: This function assumes the left hand side to be a non-binary
    /// expression! All binary operators here are left-associative, so a right
    /// child of equal precedence rotates as well.
    pub fn balance(&self) -> BinaryExpression {
        let converter = self.converter();
        let (mut lhs, mut rhs) = self.inner();

        if let Expression::Binary(rhs_binary) = rhs {
            let precedence = rhs_binary.precedence();
            let (inner_lhs, inner_rhs) = rhs_binary.inner();
            let inner_converter = rhs_binary.converter();

            if precedence <= self.precedence() {
                lhs = Expression::Binary(Box::new(converter(lhs, inner_lhs).balance()));
                rhs = inner_rhs;
                return inner_converter(lhs, rhs);
            }
        }

        self.clone()
    }

    pub fn precedence(&self) -> usize {
        use BinaryExpression::*;

        match self {
            Or(_, _) => 1,
            And(_, _) => 2,
            Equal(_, _) | NotEqual(_, _) => 3,
            LessThan(_, _) | LessOrEqual(_, _) | GreaterThan(_, _) | GreaterOrEqual(_, _) => 4,
            Addition(_, _) | Subtraction(_, _) => 5,
            Multiplication(_, _) | Division(_, _) => 6,
        }
    }
}

impl Display for BinaryExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (lhs, rhs) = self.inner();
        write!(f, "({} {} {})", self.operator(), lhs, rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::{Expression, Literal, Num};

    use super::BinaryExpression;

    fn num(value: i64) -> Expression {
        Expression::Literal(Literal::Number(Num::Integer(value)))
    }

    #[test]
    fn test_simple_balance() {
        let testee = BinaryExpression::Multiplication(
            num(42),
            Expression::Binary(Box::new(BinaryExpression::Addition(num(1), num(2)))),
        );

        let expected = BinaryExpression::Addition(
            Expression::Binary(Box::new(BinaryExpression::Multiplication(num(42), num(1)))),
            num(2),
        );

        assert_eq!(expected, testee.balance());
    }

    #[test]
    fn test_unneeded_balance() {
        let testee = BinaryExpression::Addition(
            num(42),
            Expression::Binary(Box::new(BinaryExpression::Multiplication(num(1), num(2)))),
        );

        assert_eq!(testee, testee.balance());
    }

    #[test]
    fn test_equal_precedence_balances_left() {
        let testee = BinaryExpression::Subtraction(
            num(1),
            Expression::Binary(Box::new(BinaryExpression::Subtraction(num(2), num(3)))),
        );

        let expected = BinaryExpression::Subtraction(
            Expression::Binary(Box::new(BinaryExpression::Subtraction(num(1), num(2)))),
            num(3),
        );

        assert_eq!(expected, testee.balance());
    }

    #[test]
    fn test_logical_operators_balance_below_comparison() {
        let testee = BinaryExpression::And(
            num(1),
            Expression::Binary(Box::new(BinaryExpression::LessThan(num(2), num(3)))),
        );

        assert_eq!(testee, testee.balance());
    }

    #[test]
    fn test_display() {
        let testee = BinaryExpression::Addition(num(1), num(2));

        assert_eq!("(+ 1.0 2.0)", testee.to_string());
    }
}

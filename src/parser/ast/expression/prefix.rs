use std::fmt::Display;

use super::Expression;

/// A prefix (unary) operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Prefix {
    Minus(Box<Expression>),
    Bang(Box<Expression>),
}

impl Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prefix::Minus(expr) => write!(f, "(- {expr})"),
            Prefix::Bang(expr) => write!(f, "(! {expr})"),
        }
    }
}

use std::fmt::Display;

use super::Expression;

/// A parenthesized sub-expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping(pub Box<Expression>);

impl Display for Grouping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(group {})", self.0)
    }
}

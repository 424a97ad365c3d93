use std::fmt::Display;

use super::{Expression, Id};

/// Assignment to an existing variable. The target must be a plain
/// identifier; declaration is `var`'s job.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub id: Id,
    pub value: Box<Expression>,
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(= {} {})", self.id, self.value)
    }
}

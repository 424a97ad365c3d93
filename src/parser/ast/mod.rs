pub mod expression;
pub mod statement;

pub use self::expression::*;
pub use self::statement::*;

/// Intermediate result of a node parser; callers destructure the variant
/// they asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    Expression(Expression),
    Statement(Statement),
    Block(Block),
}

/// Root of a parsed source file: the ordered top-level statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

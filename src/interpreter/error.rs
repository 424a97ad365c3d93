use std::{error::Error, fmt::Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    OperandsMustBeNumbers,
    OperandsMustMatch,
    UndefinedVariable(String),
    NotCallable,
    WrongArity { expected: usize, got: usize },
}

impl RuntimeError {
    pub fn message(&self) -> String {
        match self {
            RuntimeError::OperandsMustBeNumbers => "Operands must be numbers.".into(),
            RuntimeError::OperandsMustMatch => {
                "Operands must be two numbers or two strings.".into()
            }
            RuntimeError::UndefinedVariable(name) => format!("Undefined variable '{name}'."),
            RuntimeError::NotCallable => "Can only call functions and classes.".into(),
            RuntimeError::WrongArity { expected, got } => {
                format!("Expected {expected} arguments but got {got}.")
            }
        }
    }
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // the reported line is fixed at 1; the evaluator does not track
        // source positions
        write!(f, "{}\n[line 1]", self.message())
    }
}

impl Error for RuntimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            "Operands must be numbers.",
            RuntimeError::OperandsMustBeNumbers.message()
        );
        assert_eq!(
            "Undefined variable 'ghost'.",
            RuntimeError::UndefinedVariable("ghost".into()).message()
        );
        assert_eq!(
            "Expected 2 arguments but got 3.",
            RuntimeError::WrongArity {
                expected: 2,
                got: 3
            }
            .message()
        );
    }

    #[test]
    fn test_display_appends_line() {
        assert_eq!(
            "Can only call functions and classes.\n[line 1]",
            RuntimeError::NotCallable.to_string()
        );
    }
}

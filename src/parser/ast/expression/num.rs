use std::fmt::Display;

/// Unified numeric type. Integers and floats are stored separately but mix
/// freely in arithmetic; comparisons and equality go through the float value.
#[derive(Debug, Clone, Copy)]
pub enum Num {
    Integer(i64),
    Float(f64),
}

impl Num {
    /// Build a number from its source spelling: a decimal dot makes a float.
    pub fn from_lexeme(lexeme: &str) -> Num {
        if lexeme.contains('.') {
            Num::Float(lexeme.parse().unwrap_or(f64::INFINITY))
        } else {
            match lexeme.parse::<i64>() {
                Ok(value) => Num::Integer(value),
                Err(_) => Num::Float(lexeme.parse().unwrap_or(f64::INFINITY)),
            }
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Num::Integer(value) => value as f64,
            Num::Float(value) => value,
        }
    }

    pub fn neg(self) -> Num {
        match self {
            Num::Integer(value) => Num::Integer(-value),
            Num::Float(value) => Num::Float(-value),
        }
    }

    pub fn add(self, other: Num) -> Num {
        match (self, other) {
            (Num::Integer(left), Num::Integer(right)) => match left.checked_add(right) {
                Some(value) => Num::Integer(value),
                None => Num::Float(left as f64 + right as f64),
            },
            (left, right) => Num::Float(left.as_f64() + right.as_f64()),
        }
    }

    pub fn sub(self, other: Num) -> Num {
        match (self, other) {
            (Num::Integer(left), Num::Integer(right)) => match left.checked_sub(right) {
                Some(value) => Num::Integer(value),
                None => Num::Float(left as f64 - right as f64),
            },
            (left, right) => Num::Float(left.as_f64() - right.as_f64()),
        }
    }

    pub fn mul(self, other: Num) -> Num {
        match (self, other) {
            (Num::Integer(left), Num::Integer(right)) => match left.checked_mul(right) {
                Some(value) => Num::Integer(value),
                None => Num::Float(left as f64 * right as f64),
            },
            (left, right) => Num::Float(left.as_f64() * right.as_f64()),
        }
    }

    /// A division that leaves no remainder collapses to an integer; every
    /// other division yields the real quotient.
    pub fn div(self, other: Num) -> Num {
        let (left, right) = (self.as_f64(), other.as_f64());
        let quotient = left / right;

        if right != 0.0 && left % right == 0.0 {
            Num::Integer(quotient as i64)
        } else {
            Num::Float(quotient)
        }
    }
}

impl PartialEq for Num {
    fn eq(&self, other: &Self) -> bool {
        self.as_f64() == other.as_f64()
    }
}

impl Display for Num {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Num::Integer(value) => write!(f, "{value}"),
            Num::Float(value) => write!(f, "{value:?}"),
        }
    }
}

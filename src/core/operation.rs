//! Binary arithmetic operations and their pure evaluator.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors produced by the arithmetic evaluator.
///
/// These abort only the operation being attempted; the running result
/// and the session history are left untouched.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Division by zero is undefined.")]
    DivisionByZero,

    #[error("Modulo by zero is undefined.")]
    ModuloByZero,

    #[error("Unsupported operation.")]
    UnsupportedOperation,
}

/// A binary operation applied to the running result.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Operation {
    /// All operations, in prompt order.
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Modulo,
    ];

    /// Map a console symbol to an operation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recall_calc::core::{EvalError, Operation};
    ///
    /// assert_eq!(Operation::from_symbol('%'), Ok(Operation::Modulo));
    /// assert_eq!(Operation::from_symbol('^'), Err(EvalError::UnsupportedOperation));
    /// ```
    pub fn from_symbol(symbol: char) -> Result<Self, EvalError> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            '%' => Ok(Self::Modulo),
            _ => Err(EvalError::UnsupportedOperation),
        }
    }

    /// The symbol used both for input and in step descriptions.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Modulo => '%',
        }
    }

    /// Apply this operation to `lhs` and `rhs`.
    ///
    /// Pure: no side effects, the same inputs always give the same output.
    /// Zero checks use exact equality, so `-0.0` is a zero divisor too.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recall_calc::core::{EvalError, Operation};
    ///
    /// assert_eq!(Operation::Multiply.apply(15.0, 2.0), Ok(30.0));
    /// assert_eq!(Operation::Modulo.apply(-7.0, 3.0), Ok(-1.0));
    /// assert_eq!(Operation::Divide.apply(8.0, 0.0), Err(EvalError::DivisionByZero));
    /// ```
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
            Self::Modulo => {
                if rhs == 0.0 {
                    return Err(EvalError::ModuloByZero);
                }
                // `%` on f64 is the truncated remainder: sign follows lhs.
                Ok(lhs % rhs)
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Evaluate `lhs <symbol> rhs` for a raw operator selector.
///
/// Selectors outside `+ - * / %` fail with [`EvalError::UnsupportedOperation`].
pub fn evaluate(lhs: f64, rhs: f64, symbol: char) -> Result<f64, EvalError> {
    Operation::from_symbol(symbol)?.apply(lhs, rhs)
}

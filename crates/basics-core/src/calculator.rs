//! Four-function calculator over `f64`.
//!
//! `Operator` is the closed set of supported symbols. `compute` is the
//! character-level entry point used by the interactive session.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

/// Error type for calculator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// The operator symbol is not one of `+ - * /`.
    #[error("invalid operator: {0:?}")]
    InvalidOperator(char),
}

/// Arithmetic operator accepted by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in prompt order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The symbol this operator is typed as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Apply the operator with IEEE-754 semantics.
    ///
    /// Division by zero is not checked: `x / 0.0` is an infinity and
    /// `0.0 / 0.0` is NaN.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            other => Err(CalcError::InvalidOperator(other)),
        }
    }
}

/// Parses the first character of a token, so `"+x"` reads as `+`.
impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // An empty token has no symbol at all; report it as NUL.
        let symbol = s.chars().next().unwrap_or('\0');
        Operator::try_from(symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Compute `num1 <operator> num2`.
///
/// # Example
/// ```
/// assert_eq!(basics_core::calculator::compute(6.0, 3.0, '/'), Ok(2.0));
/// ```
pub fn compute(num1: f64, num2: f64, operator: char) -> Result<f64, CalcError> {
    let op = Operator::try_from(operator)?;
    let result = op.apply(num1, num2);
    debug!(num1, num2, %op, result, "computed");
    Ok(result)
}

use std::collections::BTreeMap;

use log::debug;

use crate::expression::errors::ExpressionError;

/// A binary integer operation
pub type BinaryOp = fn(i64, i64) -> Result<i64, ExpressionError>;

fn add(left: i64, right: i64) -> Result<i64, ExpressionError> {
    left.checked_add(right).ok_or(ExpressionError::Overflow)
}

fn subtract(left: i64, right: i64) -> Result<i64, ExpressionError> {
    left.checked_sub(right).ok_or(ExpressionError::Overflow)
}

fn multiply(left: i64, right: i64) -> Result<i64, ExpressionError> {
    left.checked_mul(right).ok_or(ExpressionError::Overflow)
}

// Truncates toward zero.
fn divide(left: i64, right: i64) -> Result<i64, ExpressionError> {
    if right == 0 {
        debug!("Division by zero attempted: {} / {}", left, right);
        return Err(ExpressionError::DivisionByZero);
    }
    left.checked_div(right).ok_or(ExpressionError::Overflow)
}

/// Immutable lookup from operator symbol to its implementation
#[derive(Debug, Clone)]
pub struct OperatorTable {
    operators: BTreeMap<char, BinaryOp>,
}

impl OperatorTable {
    /// Table with `+`, `-`, `*` and `/`
    pub fn standard() -> Self {
        Self::from_entries([
            ('+', add as BinaryOp),
            ('-', subtract as BinaryOp),
            ('*', multiply as BinaryOp),
            ('/', divide as BinaryOp),
        ])
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, BinaryOp)>,
    {
        Self {
            operators: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, symbol: char) -> Option<BinaryOp> {
        self.operators.get(&symbol).copied()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.operators.contains_key(&symbol)
    }

    /// Registered symbols in ascending order
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.operators.keys().copied()
    }

    /// # Errors
    ///
    /// Returns `UnknownOperator` if `symbol` is not registered, otherwise
    /// whatever the operation itself reports.
    pub fn apply(&self, symbol: char, left: i64, right: i64) -> Result<i64, ExpressionError> {
        let op = self
            .get(symbol)
            .ok_or(ExpressionError::UnknownOperator(symbol))?;
        op(left, right)
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests_inner_ops {
    use super::{add, divide, multiply, subtract};
    use crate::expression::errors::ExpressionError;

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(add(2, 3), Ok(5));
        assert_eq!(subtract(2, 3), Ok(-1));
        assert_eq!(multiply(-4, 3), Ok(-12));
        assert_eq!(add(i64::MAX, 1), Err(ExpressionError::Overflow));
        assert_eq!(subtract(i64::MIN, 1), Err(ExpressionError::Overflow));
        assert_eq!(multiply(i64::MAX, 2), Err(ExpressionError::Overflow));
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        assert_eq!(divide(7, 2), Ok(3));
        assert_eq!(divide(-7, 2), Ok(-3));
        assert_eq!(divide(7, -2), Ok(-3));
    }

    #[test]
    fn test_divide_edge_cases() {
        assert_eq!(divide(1, 0), Err(ExpressionError::DivisionByZero));
        assert_eq!(divide(0, 0), Err(ExpressionError::DivisionByZero));
        assert_eq!(divide(i64::MIN, -1), Err(ExpressionError::Overflow));
    }
}

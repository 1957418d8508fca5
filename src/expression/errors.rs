use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("invalid expression")]
    InvalidExpression,
    #[error("unknown node type")]
    UnknownNodeType,
    #[error("unknown operator: {0}")]
    UnknownOperator(char),
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow")]
    Overflow,
}

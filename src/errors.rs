use thiserror::Error;

use crate::expression::{ExpressionError, ParseError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreewalkError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Evaluation error: {0}")]
    ExpressionError(#[from] ExpressionError),
}

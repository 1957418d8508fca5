//! Expression trees: construction, parsing, display and evaluation

mod ast;
mod display;
mod errors;
mod eval;
mod operators;
mod parser;

pub use ast::{Token, TreeNode};
pub use errors::ExpressionError;
pub use eval::Evaluator;
pub use operators::{BinaryOp, OperatorTable};
pub use parser::{ParseError, parse};

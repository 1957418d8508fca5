use log::debug;

use crate::expression::ast::{Token, TreeNode};
use crate::expression::errors::ExpressionError;
use crate::expression::operators::OperatorTable;

/// Walks expression trees against a fixed operator table
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    operators: OperatorTable,
}

impl Evaluator {
    /// Create an evaluator over the standard arithmetic operators
    pub fn new() -> Self {
        Self::with_operators(OperatorTable::standard())
    }

    pub fn with_operators(operators: OperatorTable) -> Self {
        Self { operators }
    }

    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    /// # Errors
    ///
    /// Returns an error when:
    /// - a node (or an operator's child) is missing or carries no payload
    /// - a node carries a payload kind this evaluator does not handle
    /// - an operator symbol is not in the table
    /// - the operation itself fails (division by zero, overflow)
    ///
    /// The left subtree is evaluated first and its error, if any, is
    /// returned without touching the right subtree.
    pub fn evaluate(&self, node: Option<&TreeNode>) -> Result<i64, ExpressionError> {
        let Some(node) = node else {
            debug!("Encountered missing node");
            return Err(ExpressionError::InvalidExpression);
        };

        match &node.val {
            None => {
                debug!("Encountered node without a value");
                Err(ExpressionError::InvalidExpression)
            }
            Some(Token::Number(value)) => Ok(*value),
            Some(Token::Operator(symbol)) => {
                let left = self.evaluate(node.lchild.as_deref())?;
                let right = self.evaluate(node.rchild.as_deref())?;
                let result = self.operators.apply(*symbol, left, right);
                match &result {
                    Ok(value) => debug!("{} {} {} = {}", left, symbol, right, value),
                    Err(e) => debug!("{} {} {} failed: {}", left, symbol, right, e),
                }
                result
            }
            #[allow(unreachable_patterns)]
            Some(other) => {
                debug!("Unknown node type: {:?}", other);
                Err(ExpressionError::UnknownNodeType)
            }
        }
    }
}

impl TreeNode {
    /// Evaluate this tree with the standard operators
    ///
    /// # Errors
    ///
    /// See [`Evaluator::evaluate`].
    pub fn evaluate(&self) -> Result<i64, ExpressionError> {
        Evaluator::new().evaluate(Some(self))
    }
}

//! Treewalk - evaluate integer expression trees
//!
//! Expressions are binary trees whose nodes carry either a number or an
//! operator symbol. Trees can be built by hand or parsed from infix text,
//! and are evaluated by a recursive walk that fails fast on the first error.
//! A small league-ranking utility lives alongside.

mod errors;
pub mod expression;
pub mod league;

// Re-export the main public API
pub use errors::TreewalkError;
pub use expression::{
    Evaluator, ExpressionError, OperatorTable, ParseError, Token, TreeNode, parse,
};
pub use league::{League, LeagueError, MatchOutcome, Team};

/// Parse an infix expression and evaluate it with the standard operators
///
/// # Errors
///
/// This function will return an error if:
/// * The input is empty or not a well-formed expression
/// * Evaluation fails, e.g. on division by zero or integer overflow
///
/// # Examples
///
/// ```
/// use treewalk::evaluate_expression;
///
/// match evaluate_expression("5*10+20") {
///     Ok(value) => assert_eq!(value, 70),
///     Err(e) => panic!("unexpected error: {}", e),
/// }
/// assert!(evaluate_expression("1/0").is_err());
/// ```
pub fn evaluate_expression(input: &str) -> Result<i64, TreewalkError> {
    let tree = parse(input)?;
    Ok(Evaluator::new().evaluate(Some(&tree))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_expression() {
        assert_eq!(evaluate_expression("5*10+20"), Ok(70));
        assert_eq!(evaluate_expression("(5 + 10) * 20"), Ok(300));
    }

    #[test]
    fn test_evaluate_expression_errors() {
        assert_eq!(
            evaluate_expression("1 / 0"),
            Err(TreewalkError::ExpressionError(ExpressionError::DivisionByZero))
        );
        assert_eq!(
            evaluate_expression(""),
            Err(TreewalkError::ParseError(ParseError::EmptyInput))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = TreewalkError::from(ExpressionError::InvalidExpression);
        assert_eq!(err.to_string(), "Evaluation error: invalid expression");
        let err = TreewalkError::from(ExpressionError::UnknownNodeType);
        assert_eq!(err.to_string(), "Evaluation error: unknown node type");
    }
}

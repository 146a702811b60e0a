use crate::{
    error::EvalError,
    interpreter::evaluator::{core::EvalResult, operation::evaluate_simple_expression},
};

/// Evaluates every parenthesized group and substitutes the results back into
/// the expression.
///
/// The group opened by the last `(` is always innermost, so it is evaluated
/// first with [`evaluate_simple_expression`], replaced (parentheses included)
/// by its value, and the search starts over until no parentheses remain.
///
/// # Parameters
/// - `expression`: Validated expression text.
///
/// # Returns
/// The expression with no parentheses left.
///
/// # Errors
/// - `MismatchedParentheses` if a `(` has no `)` after it, or a `)` is left
///   with no `(` before it.
/// - Any error from evaluating a group.
///
/// # Example
/// ```
/// use calcbot::{EvalError, interpreter::evaluator::parens::evaluate_parens};
///
/// assert_eq!(evaluate_parens("4 * (7 - (4 / 2)) * 2").unwrap(), "4 * 5 * 2");
/// assert_eq!(evaluate_parens("4 * (7 - 5"), Err(EvalError::MismatchedParentheses));
/// ```
pub fn evaluate_parens(expression: &str) -> EvalResult<String> {
    let mut expression = expression.to_string();

    loop {
        let Some(open) = expression.rfind('(') else {
            if expression.contains(')') {
                return Err(EvalError::MismatchedParentheses);
            }
            return Ok(expression);
        };

        let close = expression[open..].find(')')
                                      .map(|offset| open + offset)
                                      .ok_or(EvalError::MismatchedParentheses)?;

        let value = evaluate_simple_expression(&expression[open + 1..close])?;
        expression.replace_range(open..=close, &value);
    }
}

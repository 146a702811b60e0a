use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, operator::Operator},
    util::num::parse_float,
};

fn parse_operand(operand: &str) -> EvalResult<f64> {
    parse_float(operand).filter(|value| !value.is_nan())
                        .ok_or_else(|| EvalError::NotANumber { operand: operand.to_string() })
}

/// Calculates the result of one binary operation.
///
/// Both operands are given as text and parsed leniently (leading number
/// only). The arithmetic itself is plain `f64` arithmetic.
///
/// # Parameters
/// - `operand1`: Left operand text.
/// - `operator`: The operator to apply.
/// - `operand2`: Right operand text.
///
/// # Returns
/// The result of the operation.
///
/// # Errors
/// - `NotANumber` naming the first operand that fails to parse.
/// - `DivideByZero` if `operator` is `/` and the right operand is zero.
///
/// # Example
/// ```
/// use calcbot::{
///     EvalError,
///     interpreter::{evaluator::calc::calc, operator::Operator},
/// };
///
/// assert_eq!(calc("-6", Operator::Div, "-2"), Ok(3.0));
/// assert_eq!(calc("1", Operator::Div, "0"), Err(EvalError::DivideByZero));
/// assert_eq!(calc("a1", Operator::Mul, "2"),
///            Err(EvalError::NotANumber { operand: "a1".to_string() }));
/// ```
pub fn calc(operand1: &str, operator: Operator, operand2: &str) -> EvalResult<f64> {
    let left = parse_operand(operand1)?;
    let right = parse_operand(operand2)?;

    Ok(match operator {
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::Mul => left * right,
        Operator::Div => {
            if right == 0.0 {
                return Err(EvalError::DivideByZero);
            }
            left / right
        },
    })
}

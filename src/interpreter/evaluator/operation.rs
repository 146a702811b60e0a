use std::ops::Range;

use tracing::trace;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{calc::calc, core::EvalResult},
        operator::{Operator, PRECEDENCE},
    },
    util::num::{
        format_number, is_numeric_result, is_operator_byte, scan_decimal, scan_fraction,
        scan_signed, scan_unsigned, skip_spaces,
    },
};

/// One `operand1 OP operand2` occurrence found in an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation<'a> {
    /// Byte range of the whole occurrence.
    pub span:     Range<usize>,
    /// Left operand, including any operator and spaces captured in front of a
    /// negative number.
    pub operand1: &'a str,
    /// The operator.
    pub operator: Operator,
    /// Right operand.
    pub operand2: &'a str,
}

/// Computes one operation and renders it for splicing back into the
/// expression.
///
/// The left operand of a match may carry the operator (and spaces) that
/// precede a negative number, e.g. `+ -3`. That prefix is removed before
/// calculating and put back in front of the result, so reducing `-3 * 2`
/// inside `1 + -3 * 2` yields `+ -6` and the `+` is not lost.
///
/// # Parameters
/// - `operand1`: Left operand, possibly with an operator prefix.
/// - `operator`: The operator to apply.
/// - `operand2`: Right operand.
///
/// # Returns
/// The prefix followed by the rendered result.
///
/// # Errors
/// Propagates `NotANumber` and `DivideByZero` from [`calc`].
///
/// # Example
/// ```
/// use calcbot::interpreter::{evaluator::operation::get_result, operator::Operator};
///
/// assert_eq!(get_result("+ -3", Operator::Mul, "2").unwrap(), "+ -6");
/// assert_eq!(get_result("-2", Operator::Sub, "-1").unwrap(), "-1");
/// ```
pub fn get_result(operand1: &str, operator: Operator, operand2: &str) -> EvalResult<String> {
    let (prefix, number) =
        split_operand(operand1).ok_or_else(|| EvalError::NotANumber { operand:
                                                                          operand1.to_string() })?;

    let value = calc(number, operator, operand2)?;
    Ok(format!("{prefix}{}", format_number(value)))
}

/// Splits a left operand into its leading operator text and the number.
///
/// The number is looked for first; the operator prefix is only taken when
/// the number cannot start where the prefix does.
fn split_operand(operand: &str) -> Option<(&str, &str)> {
    let bytes = operand.as_bytes();
    (0..bytes.len()).find_map(|start| {
                        if let Some(end) = scan_signed(operand, start) {
                            return Some(("", &operand[start..end]));
                        }
                        if is_operator_byte(bytes[start]) {
                            let number_start = skip_spaces(operand, start + 1);
                            let end = scan_signed(operand, number_start)?;
                            return Some((&operand[start..number_start],
                                         &operand[number_start..end]));
                        }
                        None
                    })
}

/// Candidate end offsets for a left operand starting at `start`, in the order
/// they are tried.
///
/// A left operand is a decimal number, optionally negated when the minus sign
/// opens the expression or follows another operator (which is then captured
/// too), or a bare fraction.
///
/// A literal starting right after a digit ends where the one starting a byte
/// earlier does, and that candidate has already been tried, so it is skipped.
/// This keeps the search linear in the length of long literals.
fn left_operand_ends(expression: &str, start: usize) -> [Option<usize>; 4] {
    let bytes = expression.as_bytes();
    let inside_digits = start > 0 && bytes[start - 1].is_ascii_digit();

    let at_start_negative = (start == 0 && bytes[0] == b'-').then(|| scan_decimal(expression, 1))
                                                            .flatten();
    let after_operator_negative = if is_operator_byte(bytes[start]) {
        let minus = skip_spaces(expression, start + 1);
        (bytes.get(minus) == Some(&b'-')).then(|| scan_decimal(expression, minus + 1))
                                         .flatten()
    } else {
        None
    };

    let (decimal, fraction) = if inside_digits {
        (None, None)
    } else {
        (scan_decimal(expression, start), scan_fraction(expression, start))
    };

    [at_start_negative, after_operator_negative, decimal, fraction]
}

/// Finds the leftmost `number OP number` occurrence where `OP` belongs to
/// `class`.
///
/// # Parameters
/// - `expression`: Expression without parentheses.
/// - `class`: Operators to look for.
///
/// # Returns
/// The leftmost occurrence, or `None` if there is none.
///
/// # Example
/// ```
/// use calcbot::interpreter::{evaluator::operation::find_operation, operator::MUL_DIV};
///
/// let found = find_operation("1 + -3 * 2", MUL_DIV).unwrap();
/// assert_eq!(found.operand1, "+ -3");
/// assert_eq!(found.operand2, "2");
/// assert_eq!(found.span, 2..10);
/// ```
#[must_use]
pub fn find_operation<'a>(expression: &'a str, class: &[Operator]) -> Option<Operation<'a>> {
    let bytes = expression.as_bytes();

    (0..bytes.len()).find_map(|start| {
                        left_operand_ends(expression, start).into_iter()
                                                            .flatten()
                                                            .find_map(|end| {
                                                                match_operation_rest(expression,
                                                                                     start,
                                                                                     end,
                                                                                     class)
                                                            })
                    })
}

/// Matches ` *OP *operand2` after a left operand spanning `start..end`.
fn match_operation_rest<'a>(expression: &'a str,
                            start: usize,
                            end: usize,
                            class: &[Operator])
                            -> Option<Operation<'a>> {
    let op_pos = skip_spaces(expression, end);
    let operator = expression.as_bytes()
                             .get(op_pos)
                             .copied()
                             .and_then(Operator::from_byte)
                             .filter(|op| class.contains(op))?;

    let operand2_start = skip_spaces(expression, op_pos + 1);
    let operand2_end = scan_signed(expression, operand2_start)?;

    Some(Operation { span: start..operand2_end,
                     operand1: &expression[start..end],
                     operator,
                     operand2: &expression[operand2_start..operand2_end] })
}

fn count_operators(expression: &str, class: &[Operator]) -> usize {
    expression.bytes()
              .filter_map(Operator::from_byte)
              .filter(|op| class.contains(op))
              .count()
}

/// Counts negative literals: `-N` at the very start of the expression, or an
/// operator, optional spaces, then `-N`. Matches do not overlap.
fn count_negative_literals(expression: &str) -> usize {
    let bytes = expression.as_bytes();
    let mut count = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let at_start = (pos == 0 && bytes[0] == b'-').then(|| scan_unsigned(expression, 1))
                                                     .flatten();
        let after_operator = if is_operator_byte(bytes[pos]) {
            let minus = skip_spaces(expression, pos + 1);
            (bytes.get(minus) == Some(&b'-')).then(|| scan_unsigned(expression, minus + 1))
                                             .flatten()
        } else {
            None
        };

        if let Some(end) = at_start.or(after_operator) {
            count += 1;
            pos = end;
        } else {
            pos += 1;
        }
    }

    count
}

/// Rewrites an expression that is only a double negation (`--6`, `- -6`) to
/// the plain number.
fn strip_double_negation(expression: &str) -> Option<String> {
    let rest = expression.strip_prefix('-')?;
    let number = rest.trim_start_matches(' ').strip_prefix('-')?;
    scan_unsigned(number, 0).filter(|&end| end == number.len())
                            .map(|_| number.to_string())
}

/// Reduces every operation of one operator class, leftmost first.
///
/// Each round reduces a single occurrence and splices the result back into
/// the text. Reduction stops once no operator of the class is left, or once
/// every remaining one is the sign of a negative literal (e.g. the `-` in
/// `-2 + -4 * 5` when reducing `+-`). A whole-expression double negation is
/// simplified to the plain number along the way.
///
/// # Parameters
/// - `expression`: Expression without parentheses.
/// - `class`: Operators to reduce, e.g. [`MUL_DIV`](crate::interpreter::operator::MUL_DIV).
///
/// # Returns
/// The expression with every reducible operation of `class` replaced by its
/// result.
///
/// # Errors
/// - `NotANumber` and `DivideByZero` from [`calc`].
/// - `InvalidOperatorPlacement` if operators of the class remain but none of
///   them can be reduced.
///
/// # Example
/// ```
/// use calcbot::interpreter::{evaluator::operation::do_operation, operator::Operator};
///
/// assert_eq!(do_operation("2 * 2 - 3 * 3 + 4 * 5", &[Operator::Mul]).unwrap(),
///            "4 - 9 + 20");
/// assert_eq!(do_operation("3 - 5 + 4 - 8 * 5", &[Operator::Sub]).unwrap(),
///            "-2 + -4 * 5");
/// ```
pub fn do_operation(expression: &str, class: &[Operator]) -> EvalResult<String> {
    let mut expression = expression.to_string();
    if count_operators(&expression, class) == 0 {
        return Ok(expression);
    }

    loop {
        let mut progressed = false;

        if let Some(Operation { span,
                                operand1,
                                operator,
                                operand2, }) = find_operation(&expression, class)
        {
            trace!(%operator, operand1, operand2, "reducing operation");
            let reduced = get_result(operand1, operator, operand2)?;
            expression.replace_range(span, &reduced);
            progressed = true;
        }

        let remaining = count_operators(&expression, class);
        let mut negatives = None;
        if remaining > 0 && class.contains(&Operator::Sub) {
            if let Some(number) = strip_double_negation(&expression) {
                expression = number;
                progressed = true;
            }
            negatives = Some(count_negative_literals(&expression));
        }

        if remaining == 0 || negatives == Some(remaining) {
            return Ok(expression);
        }
        if !progressed {
            return Err(EvalError::InvalidOperatorPlacement);
        }
    }
}

/// Evaluates an expression without parentheses, following the order of
/// operations: `*` and `/` first, then `+` and `-`, each left to right.
///
/// Returns the single resulting number as text, or an empty string for a
/// blank expression.
///
/// # Parameters
/// - `expression`: Expression without parentheses.
///
/// # Returns
/// The resulting number as text, or an empty string.
///
/// # Errors
/// - Any error from [`do_operation`].
/// - `NotANumber` if the reduction does not end in a single number.
///
/// # Example
/// ```
/// use calcbot::interpreter::evaluator::operation::evaluate_simple_expression;
///
/// assert_eq!(evaluate_simple_expression("4 + 1 * 6 / 3 - 2").unwrap(), "4");
/// assert_eq!(evaluate_simple_expression("8 - 8 / 4 + 3 * 5").unwrap(), "21");
/// ```
pub fn evaluate_simple_expression(expression: &str) -> EvalResult<String> {
    let mut expression = expression.to_string();
    for class in PRECEDENCE {
        expression = do_operation(&expression, class)?;
    }

    let result = expression.trim();
    if result.is_empty() || is_numeric_result(result) {
        Ok(result.to_string())
    } else {
        Err(EvalError::NotANumber { operand: result.to_string() })
    }
}

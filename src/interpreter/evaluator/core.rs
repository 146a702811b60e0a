use std::borrow::Cow;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{operation::evaluate_simple_expression, parens::evaluate_parens},
        store::VariableStore,
        validator::{validate_raw, validate_substituted},
    },
    util::num::{format_number, has_operator, parse_float, scan_fraction},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates expressions and equations against per-account variables.
///
/// ## Usage
///
/// A `Calculator` is created once by the host and reused for every command.
/// It owns the [`VariableStore`]; reads borrow it, assignments and deletions
/// need `&mut self`.
///
/// ```
/// use calcbot::Calculator;
///
/// let mut calculator = Calculator::new();
/// calculator.evaluate_equation("a = 14 - 5 * 6", "bill").unwrap();
/// assert_eq!(calculator.get_variable("a", "bill").unwrap(), -16.0);
/// assert_eq!(calculator.evaluate_expression("2 * (a + 20)", "bill").unwrap(), "8");
/// ```
#[derive(Debug, Default)]
pub struct Calculator {
    /// Variables of every account.
    pub variables:         VariableStore,
    pub(crate) log_errors: bool,
}

/// Returns `true` if `text` is a negative literal such as `-5` or `-.5`.
///
/// Repeated fractional parts (`-1.2.3`) are accepted; the value is then read
/// up to the second dot.
fn is_negative_literal(text: &str) -> bool {
    let Some(rest) = text.strip_prefix('-') else {
        return false;
    };
    if scan_fraction(rest, 0) == Some(rest.len()) {
        return true;
    }

    let digits = rest.trim_start_matches(|c: char| c.is_ascii_digit());
    if digits.len() == rest.len() {
        return false;
    }
    let mut tail = digits;
    while !tail.is_empty() {
        match scan_fraction(tail, 0) {
            Some(end) => tail = &tail[end..],
            None => return false,
        }
    }
    true
}

impl Calculator {
    /// Creates a calculator with no variables and error logging disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables logging of errors reported by
    /// [`execute`](Self::execute).
    #[must_use]
    pub const fn with_error_logging(mut self, log_errors: bool) -> Self {
        self.log_errors = log_errors;
        self
    }

    /// Replaces every occurrence of each of the account's variable letters by
    /// its value.
    ///
    /// This is plain text replacement, not token-aware; the validation run
    /// before it guarantees letters only appear as standalone names.
    fn substitute_variables(&self, expression: &str, account: &str) -> String {
        let mut expression = expression.to_string();
        for (name, value) in self.variables.variables(account) {
            expression = expression.replace(name, &format_number(value));
        }
        expression
    }

    /// Calculates the result of an expression.
    ///
    /// The expression is validated, the account's variables are substituted,
    /// parenthesized groups are evaluated innermost first, and the remainder
    /// is reduced following the order of operations.
    ///
    /// # Parameters
    /// - `expression`: The expression text, e.g. `2 * (a + b)`.
    /// - `account`: The account whose variables are used.
    ///
    /// # Returns
    /// The resulting number as text, or an empty string if the expression had
    /// nothing to evaluate.
    ///
    /// # Errors
    /// Any validation error, `MismatchedParentheses`, `NotANumber` or
    /// `DivideByZero`.
    pub fn evaluate_expression(&self, expression: &str, account: &str) -> EvalResult<String> {
        validate_raw(expression)?;
        let expression = self.substitute_variables(expression, account);
        validate_substituted(&expression)?;

        let simple = evaluate_parens(&expression)?;
        evaluate_simple_expression(&simple)
    }

    /// Evaluates an equation, assigning the value on the right to the
    /// variable on the left.
    ///
    /// The right side is only evaluated as an expression when it contains an
    /// operator and is not just a negative literal; otherwise it is read as a
    /// number directly. The right side is evaluated before the name is
    /// checked.
    ///
    /// # Parameters
    /// - `equation`: The equation text, e.g. `a = 2 * b`.
    /// - `account`: The account the variable belongs to.
    ///
    /// # Returns
    /// The simplified equation, e.g. `a = -16`.
    ///
    /// # Errors
    /// - `MissingOperator` if there is no `=`.
    /// - `InvalidCharacter` if there is more than one `=`.
    /// - `InvalidVariableName` or `InvalidValue` from the store.
    /// - Any error from [`evaluate_expression`](Self::evaluate_expression).
    ///
    /// # Example
    /// ```
    /// use calcbot::{Calculator, EvalError};
    ///
    /// let mut calculator = Calculator::new();
    /// assert_eq!(calculator.evaluate_equation("x = -4.5", "matt").unwrap(), "x = -4.5");
    /// assert_eq!(calculator.evaluate_equation("xy = 1", "matt"),
    ///            Err(EvalError::InvalidVariableName));
    /// ```
    pub fn evaluate_equation(&mut self, equation: &str, account: &str) -> EvalResult<String> {
        let (name, value) = equation.split_once('=').ok_or(EvalError::MissingOperator)?;
        if value.contains('=') {
            return Err(EvalError::InvalidCharacter);
        }
        let name = name.trim();
        let value = value.trim();

        let value = if has_operator(value) && !is_negative_literal(value) {
            Cow::Owned(self.evaluate_expression(value, account)?)
        } else {
            Cow::Borrowed(value)
        };
        let value = parse_float(&value).unwrap_or(f64::NAN);

        self.variables.set(account, name, value)?;
        Ok(format!("{name} = {}", format_number(value)))
    }

    /// Assigns a value to a variable directly.
    ///
    /// # Parameters
    /// - `name`: The variable name.
    /// - `value`: The value to assign.
    /// - `account`: The account the variable belongs to.
    ///
    /// # Errors
    /// `InvalidVariableName` or `InvalidValue`.
    pub fn set_variable(&mut self, name: &str, value: f64, account: &str) -> EvalResult<()> {
        self.variables.set(account, name, value)
    }

    /// Returns the value of a variable of the given account.
    ///
    /// # Parameters
    /// - `name`: The variable name.
    /// - `account`: The account the variable belongs to.
    ///
    /// # Returns
    /// The stored value.
    ///
    /// # Errors
    /// `UndefinedVariable` if it was never assigned.
    pub fn get_variable(&self, name: &str, account: &str) -> EvalResult<f64> {
        self.variables.get(account, name)
    }

    /// Deletes all variables of an account, e.g. when it goes offline.
    ///
    /// Returns `true` if the account had variables.
    ///
    /// # Parameters
    /// - `account`: The account whose variables are removed.
    pub fn delete_variables(&mut self, account: &str) -> bool {
        self.variables.delete_all(account)
    }
}

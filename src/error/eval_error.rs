#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression or
/// equation.
pub enum EvalError {
    /// A variable name is longer than one letter, touches a digit or dot, or is
    /// not alphabetic.
    InvalidVariableName,
    /// A value to be assigned is not a finite number.
    InvalidValue,
    /// A variable was read before it was assigned.
    UndefinedVariable {
        /// The name that was looked up.
        name: String,
    },
    /// The expression contains a character outside `()0123456789.+-*/ `.
    InvalidCharacter,
    /// A numeric literal has a trailing dot or more than one dot.
    InvalidNumberFormat,
    /// Two operands (numbers or parenthesized groups) are not separated by an
    /// operator.
    MissingOperator,
    /// An operator is placed where no operand can precede or follow it.
    InvalidOperatorPlacement,
    /// A parenthesis has no partner.
    MismatchedParentheses,
    /// An operand could not be parsed as a number.
    NotANumber {
        /// The offending operand text.
        operand: String,
    },
    /// The right operand of a division is zero.
    DivideByZero,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidVariableName => write!(f, "Invalid variable name"),
            Self::InvalidValue => write!(f, "Value is not a number"),
            Self::UndefinedVariable { name } => write!(f, "Variable '{name}' is not defined"),
            Self::InvalidCharacter => write!(f, "Invalid character"),
            Self::InvalidNumberFormat => write!(f, "Invalid number format"),
            Self::MissingOperator => write!(f, "Missing operator"),
            Self::InvalidOperatorPlacement => write!(f, "Invalid operator placement"),
            Self::MismatchedParentheses => write!(f, "Mismatched parentheses"),
            Self::NotANumber { operand } => write!(f, "{operand} is not a number"),
            Self::DivideByZero => write!(f, "Cannot divide by zero"),
        }
    }
}

impl std::error::Error for EvalError {}

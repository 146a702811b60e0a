use crate::error::EvalError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the command dispatcher can report to a user.
pub enum CommandError {
    /// The command is not a keyword, equation, expression or variable name.
    Unrecognized,
    /// Evaluating the command failed.
    Eval(EvalError),
}

impl From<EvalError> for CommandError {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unrecognized => write!(f, "Unrecognized command"),
            Self::Eval(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unrecognized => None,
            Self::Eval(error) => Some(error),
        }
    }
}

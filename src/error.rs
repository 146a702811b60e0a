/// Evaluation errors.
///
/// Defines every error that can be raised while validating, substituting or
/// evaluating an expression or equation, and while reading or writing the
/// variable store.
pub mod eval_error;
/// Command errors.
///
/// Errors raised by the command dispatcher: unrecognized commands, and any
/// evaluation error carried up from the evaluator.
pub mod command_error;

pub use command_error::CommandError;
pub use eval_error::EvalError;

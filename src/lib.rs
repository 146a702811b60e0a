//! # calcbot
//!
//! calcbot evaluates arithmetic expressions and single-letter variable
//! assignments sent as text commands, keeping a separate set of variables for
//! every account (chat sender or terminal session).
//!
//! ```
//! use calcbot::Calculator;
//!
//! let mut calculator = Calculator::new();
//! calculator.evaluate_equation("a = 2", "bill").unwrap();
//! assert_eq!(calculator.evaluate_expression("4 * (a - 5) / (3 + 3)", "bill").unwrap(), "-2");
//! assert!(calculator.evaluate_expression("a + 1", "matt").is_err());
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Text command dispatch.
///
/// Turns a raw command into a reply: fixed keywords, equations, expressions
/// and variable lookups. Errors are converted into messages so a host never
/// has to stop on bad input.
pub mod command;
/// Provides the error types for evaluation and command dispatch.
///
/// # Responsibilities
/// - Defines closed enums for evaluation and command failures.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Validation, variable substitution and evaluation of expressions and
/// equations.
///
/// # Responsibilities
/// - Tokenizes and validates expression text.
/// - Stores variables per account.
/// - Reduces expressions following the order of operations.
pub mod interpreter;
/// General numeric helpers used throughout the evaluator.
pub mod util;

pub use error::{CommandError, EvalError};
pub use interpreter::evaluator::core::{Calculator, EvalResult};

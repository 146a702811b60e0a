/// Single binary operations on operand text.
///
/// Parses two operands and applies one arithmetic operator, reporting
/// unparsable operands and division by zero.
pub mod calc;

/// Order-of-operations reduction.
///
/// Finds and reduces one `a OP b` occurrence at a time for a class of
/// operators, splicing each result back into the expression text.
pub mod operation;

/// Parenthesis resolution.
///
/// Evaluates the innermost parenthesized group first and substitutes its
/// value until no parentheses remain.
pub mod parens;

/// Expression and equation evaluation.
///
/// Contains the `Calculator`, which owns the variable store and drives
/// validation, substitution and reduction.
pub mod core;

/// The evaluator module reduces expression text to a number.
///
/// Evaluation works by rewriting the expression string: every reduction
/// replaces one `a OP b` substring, or one parenthesized group, with its
/// value until a single number is left.
///
/// # Responsibilities
/// - Calculates single operations and splices results back into the text.
/// - Applies the order of operations and resolves parentheses.
/// - Substitutes variables and commits equation results.
pub mod evaluator;
/// The lexer module tokenizes expression text for validation.
///
/// # Responsibilities
/// - Splits the text into numbers, letters, operators, parentheses, dots and
///   spaces.
/// - Keeps unrecognized characters so validation can report them.
pub mod lexer;
/// Binary operators and their precedence classes.
pub mod operator;
/// Per-account storage of single-letter variables.
pub mod store;
/// Syntax checks run before an expression is evaluated.
///
/// The checks run in a fixed order, so an expression that breaks several
/// rules always reports the same error.
pub mod validator;

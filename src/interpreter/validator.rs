use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        lexer::{Lexeme, Token, tokenize},
    },
    util::num::is_unsigned_literal,
};

/// Runs the checks that must see the expression before variables are
/// substituted.
///
/// # Parameters
/// - `expression`: The expression as typed, before substitution.
///
/// # Returns
/// `Ok(())` if both checks pass.
///
/// # Errors
/// - `MissingOperator` for a lone negative literal such as `-6`.
/// - `InvalidVariableName` for multi-letter names or letters touching digits.
pub fn validate_raw(expression: &str) -> EvalResult<()> {
    check_lone_negative(expression)?;
    check_variable_names(&tokenize(expression))
}

/// Runs the checks on an expression whose variables have been substituted.
///
/// The checks run in a fixed order and the first failing one decides the
/// error.
///
/// # Parameters
/// - `expression`: The expression with every known variable replaced by its
/// -   value.
///
/// # Returns
/// `Ok(())` if every check passes.
///
/// # Errors
/// `InvalidCharacter`, `InvalidNumberFormat`, `MissingOperator` or
/// `InvalidOperatorPlacement`.
///
/// # Example
/// ```
/// use calcbot::{EvalError, interpreter::validator::validate_substituted};
///
/// assert!(validate_substituted("3 * (-1 + 5)").is_ok());
/// assert_eq!(validate_substituted("2 ^ 3"), Err(EvalError::InvalidCharacter));
/// assert_eq!(validate_substituted("1. * 4"), Err(EvalError::InvalidNumberFormat));
/// assert_eq!(validate_substituted("(1 + 2) (5 - 4)"), Err(EvalError::MissingOperator));
/// assert_eq!(validate_substituted("1 + + 1"), Err(EvalError::InvalidOperatorPlacement));
/// ```
pub fn validate_substituted(expression: &str) -> EvalResult<()> {
    let lexemes = tokenize(expression);
    check_characters(expression, &lexemes)?;
    check_number_format(&lexemes)?;
    check_missing_operators(&lexemes)?;
    check_operator_adjacency(&lexemes)?;
    check_operator_boundaries(&lexemes)
}

/// Rejects an expression that is nothing but a negative literal.
///
/// A negated variable (`-a`) is allowed, which is why this runs before
/// substitution.
///
/// # Parameters
/// - `expression`: The raw expression.
///
/// # Returns
/// - `Ok(())`: If the expression is more than a negated literal.
/// - `Err(EvalError::MissingOperator)`: For `-6`, `-1.5` or `-.5`.
pub fn check_lone_negative(expression: &str) -> EvalResult<()> {
    match expression.strip_prefix('-') {
        Some(rest) if is_unsigned_literal(rest) => Err(EvalError::MissingOperator),
        _ => Ok(()),
    }
}

/// Rejects any run of touching letters, digits and dots that contains a
/// letter and is longer than one character (`abc`, `2a`, `a.5`).
///
/// # Parameters
/// - `lexemes`: Lexemes of the raw expression.
///
/// # Returns
/// - `Ok(())`: If every letter stands on its own.
/// - `Err(EvalError::InvalidVariableName)`: Otherwise.
pub fn check_variable_names(lexemes: &[Lexeme<'_>]) -> EvalResult<()> {
    let touching_letter = lexemes.windows(2).any(|pair| {
                                                let (a, b) = (pair[0].token, pair[1].token);
                                                let both_words = a.is_some_and(Token::is_word)
                                                                 && b.is_some_and(Token::is_word);
                                                both_words
                                                && (a == Some(Token::Letter)
                                                    || b == Some(Token::Letter))
                                            });

    if touching_letter { Err(EvalError::InvalidVariableName) } else { Ok(()) }
}

/// Only `()0123456789.+-*/` and spaces may remain once variables are
/// substituted. Leftover letters are undefined variables and fail here too.
///
/// # Parameters
/// - `expression`: The substituted expression.
/// - `lexemes`: Its lexemes.
///
/// # Returns
/// - `Ok(())`: If only expression characters remain.
/// - `Err(EvalError::InvalidCharacter)`: For an empty expression, an unknown
///   character or a leftover letter.
pub fn check_characters(expression: &str, lexemes: &[Lexeme<'_>]) -> EvalResult<()> {
    let invalid = lexemes.iter()
                         .any(|lexeme| matches!(lexeme.token, None | Some(Token::Letter)));

    if expression.is_empty() || invalid {
        Err(EvalError::InvalidCharacter)
    } else {
        Ok(())
    }
}

/// Numbers must look like `1`, `1.5`, `0.5` or `.5`.
///
/// A dot with no digit after it, or a second dot inside one literal
/// (`1.1.1`), is rejected.
///
/// # Parameters
/// - `lexemes`: Lexemes of the substituted expression.
///
/// # Returns
/// - `Ok(())`: If every literal is well formed.
/// - `Err(EvalError::InvalidNumberFormat)`: Otherwise.
pub fn check_number_format(lexemes: &[Lexeme<'_>]) -> EvalResult<()> {
    if lexemes.iter().any(|lexeme| lexeme.is(Token::Dot)) {
        return Err(EvalError::InvalidNumberFormat);
    }

    let second_dot = lexemes.windows(2).any(|pair| {
                                           pair[0].is(Token::Number)
                                           && pair[0].text.contains('.')
                                           && pair[1].text.starts_with('.')
                                       });

    if second_dot { Err(EvalError::InvalidNumberFormat) } else { Ok(()) }
}

/// Two operands with only spaces between them need an operator: `1 1`,
/// `2 (3)`, `(1) 2` and `(1) (2)` are all rejected.
///
/// # Parameters
/// - `lexemes`: Lexemes of the substituted expression.
///
/// # Returns
/// - `Ok(())`: If every pair of operands has an operator between them.
/// - `Err(EvalError::MissingOperator)`: Otherwise.
pub fn check_missing_operators(lexemes: &[Lexeme<'_>]) -> EvalResult<()> {
    let significant: Vec<_> = lexemes.iter().filter(|lexeme| !lexeme.is_space()).collect();

    let missing = significant.windows(2).any(|pair| {
                                            (pair[0].is(Token::Number)
                                             || pair[0].is(Token::RParen))
                                            && (pair[1].is(Token::Number)
                                                || pair[1].is(Token::LParen))
                                        });

    if missing { Err(EvalError::MissingOperator) } else { Ok(()) }
}

/// Two operators separated only by spaces are rejected, unless the second
/// one is a minus sign written directly in front of a number (`5 - -1`).
///
/// # Parameters
/// - `lexemes`: Lexemes of the substituted expression.
///
/// # Returns
/// - `Ok(())`: If no two operators follow each other, except for a negation.
/// - `Err(EvalError::InvalidOperatorPlacement)`: Otherwise.
pub fn check_operator_adjacency(lexemes: &[Lexeme<'_>]) -> EvalResult<()> {
    let significant: Vec<(usize, &Lexeme<'_>)> =
        lexemes.iter().enumerate().filter(|(_, lexeme)| !lexeme.is_space()).collect();

    for pair in significant.windows(2) {
        let (_, first) = pair[0];
        let (index, second) = pair[1];
        if !first.is_operator() || !second.is_operator() {
            continue;
        }

        let negates_number = second.is(Token::Minus)
                             && lexemes.get(index + 1).is_some_and(|next| next.is(Token::Number));
        if !negates_number {
            return Err(EvalError::InvalidOperatorPlacement);
        }
    }

    Ok(())
}

/// `*`, `/` and `+` cannot open the expression or a parenthesized group, and
/// no operator can close either. Only directly touching characters count.
///
/// # Parameters
/// - `lexemes`: Lexemes of the substituted expression.
///
/// # Returns
/// - `Ok(())`: If the expression and every group start and end correctly.
/// - `Err(EvalError::InvalidOperatorPlacement)`: Otherwise.
pub fn check_operator_boundaries(lexemes: &[Lexeme<'_>]) -> EvalResult<()> {
    let is_binary_only = |lexeme: &Lexeme<'_>| lexeme.is_operator() && !lexeme.is(Token::Minus);

    let bad_start = lexemes.first().is_some_and(is_binary_only);
    let bad_end = lexemes.last().is_some_and(Lexeme::is_operator);
    let bad_group = lexemes.windows(2).any(|pair| {
                                          (pair[0].is(Token::LParen) && is_binary_only(&pair[1]))
                                          || (pair[0].is_operator() && pair[1].is(Token::RParen))
                                      });

    if bad_start || bad_end || bad_group {
        Err(EvalError::InvalidOperatorPlacement)
    } else {
        Ok(())
    }
}

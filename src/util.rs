/// Number scanning, parsing and rendering helpers.
///
/// Expressions are evaluated by rewriting their text, so numbers constantly
/// move between `&str` and `f64`. This module holds the scanners that
/// recognize numeric literals inside expression text, the lenient float parser
/// used for operands and assignments, and the renderer that turns results
/// back into text.
///
/// # Responsibilities
/// - Recognize `123`, `123.456` and `.456` literals at a byte offset.
/// - Parse the leading float of a string without failing on trailing text.
/// - Render `f64` results in a form the evaluator can scan again.
pub mod num;

/// Returns `true` if `byte` is one of `* / + -`.
///
/// # Returns
/// `true` for the four operator bytes, `false` for anything else.
#[must_use]
pub const fn is_operator_byte(byte: u8) -> bool {
    matches!(byte, b'*' | b'/' | b'+' | b'-')
}

/// Returns `true` if `text` contains any of `* / + -`.
///
/// # Parameters
/// - `text`: The text to search.
///
/// # Returns
/// `true` if an operator appears anywhere, even inside a literal such as `-5`.
#[must_use]
pub fn has_operator(text: &str) -> bool {
    text.bytes().any(is_operator_byte)
}

/// Returns the index of the first byte at or after `at` that is not a space.
///
/// # Parameters
/// - `text`: The text to scan.
/// - `at`: Byte offset to start from.
///
/// # Returns
/// The offset of the first non-space byte, or `text.len()` if only spaces follow.
#[must_use]
pub fn skip_spaces(text: &str, at: usize) -> usize {
    let bytes = text.as_bytes();
    let mut pos = at;
    while pos < bytes.len() && bytes[pos] == b' ' {
        pos += 1;
    }
    pos
}

fn skip_digits(bytes: &[u8], at: usize) -> usize {
    let mut pos = at;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

/// Scans a decimal literal of the form `123` or `123.456` starting at `at`.
///
/// The fractional part is only consumed when at least one digit follows the
/// dot, so `1.` scans as `1`.
///
/// # Parameters
/// - `text`: The text to scan.
/// - `at`: Byte offset where the literal must start.
///
/// # Returns
/// The end offset of the literal, or `None` if no digit is found at `at`.
///
/// # Example
/// ```
/// use calcbot::util::num::scan_decimal;
///
/// assert_eq!(scan_decimal("12.5 + 1", 0), Some(4));
/// assert_eq!(scan_decimal("1. + 1", 0), Some(1));
/// assert_eq!(scan_decimal(".5", 0), None);
/// ```
#[must_use]
pub fn scan_decimal(text: &str, at: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let end = skip_digits(bytes, at);
    if end == at {
        return None;
    }
    if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        return Some(skip_digits(bytes, end + 1));
    }
    Some(end)
}

/// Scans a fraction literal of the form `.456` starting at `at`.
///
/// # Parameters
/// - `text`: The text to scan.
/// - `at`: Byte offset of the leading dot.
///
/// # Returns
/// The end offset of the fraction, or `None` if `at` is not a dot followed by
/// a digit.
#[must_use]
pub fn scan_fraction(text: &str, at: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if at + 1 < bytes.len() && bytes[at] == b'.' && bytes[at + 1].is_ascii_digit() {
        Some(skip_digits(bytes, at + 1))
    } else {
        None
    }
}

/// Scans an unsigned literal (`123`, `123.456` or `.456`) starting at `at`.
///
/// # Parameters
/// - `text`: The text to scan.
/// - `at`: Byte offset where the literal must start.
///
/// # Returns
/// The end offset of the literal, or `None` if none starts at `at`.
#[must_use]
pub fn scan_unsigned(text: &str, at: usize) -> Option<usize> {
    scan_decimal(text, at).or_else(|| scan_fraction(text, at))
}

/// Scans an operand literal starting at `at`.
///
/// A minus sign is only accepted in front of a decimal literal (`-3`,
/// `-3.5`), never in front of a bare fraction.
///
/// # Parameters
/// - `text`: The text to scan.
/// - `at`: Byte offset of the sign or first digit.
///
/// # Returns
/// The end offset of the operand, or `None` if none starts at `at`.
///
/// # Example
/// ```
/// use calcbot::util::num::scan_signed;
///
/// assert_eq!(scan_signed("-3 * 2", 0), Some(2));
/// assert_eq!(scan_signed(".25", 0), Some(3));
/// assert_eq!(scan_signed("-.25", 0), None);
/// ```
#[must_use]
pub fn scan_signed(text: &str, at: usize) -> Option<usize> {
    if text.as_bytes().get(at) == Some(&b'-')
       && let Some(end) = scan_decimal(text, at + 1)
    {
        return Some(end);
    }
    scan_unsigned(text, at)
}

/// Returns `true` if the whole of `text` is an unsigned literal.
///
/// # Parameters
/// - `text`: Candidate literal, without sign or surrounding spaces.
///
/// # Returns
/// `true` only if a single unsigned literal covers all of `text`.
#[must_use]
pub fn is_unsigned_literal(text: &str) -> bool {
    scan_unsigned(text, 0) == Some(text.len())
}

/// Returns `true` if `text` is a complete evaluation result: an optionally
/// negated literal, or a signed infinity produced by overflow.
///
/// # Parameters
/// - `text`: A trimmed reduction result.
///
/// # Returns
/// `true` for `12`, `-0.5`, `.5` or `-Infinity`; `false` for text still
/// holding operators.
#[must_use]
pub fn is_numeric_result(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    unsigned == "Infinity" || is_unsigned_literal(unsigned)
}

/// Parses the longest float literal at the start of `text`.
///
/// Leading whitespace is skipped and anything after the literal is ignored,
/// so `"9 apples"` parses as `9`. A signed `Infinity` is accepted. Returns
/// `None` when `text` does not start with a number.
///
/// # Parameters
/// - `text`: Text starting with the number to read.
///
/// # Returns
/// - `Some(f64)`: The parsed leading number.
/// - `None`: If `text` does not start with a number.
///
/// # Example
/// ```
/// use calcbot::util::num::parse_float;
///
/// assert_eq!(parse_float("  -16"), Some(-16.0));
/// assert_eq!(parse_float(".5abc"), Some(0.5));
/// assert_eq!(parse_float("1e3"), Some(1000.0));
/// assert_eq!(parse_float("b4"), None);
/// ```
#[must_use]
pub fn parse_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut pos = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }
    if text[pos..].starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_end = skip_digits(bytes, pos);
    let mut end = int_end;
    if end < bytes.len() && bytes[end] == b'.' {
        end = skip_digits(bytes, end + 1);
    }
    // A lone sign or dot is not a number.
    if int_end == pos && end <= pos + 1 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

/// Renders a value the way it is spliced back into expression text.
///
/// Finite values use the shortest representation that parses back to the
/// same `f64`, without exponent notation. Negative zero renders as `0`.
///
/// # Parameters
/// - `value`: The value to render.
///
/// # Returns
/// The rendered text: `NaN`, `Infinity`, `-Infinity` or a plain decimal.
///
/// # Example
/// ```
/// use calcbot::util::num::format_number;
///
/// assert_eq!(format_number(-16.0), "-16");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        format!("{sign}Infinity")
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

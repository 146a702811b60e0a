use logos::Logos;

/// Represents a lexical token in an expression.
///
/// The evaluator itself works on raw text; tokens are only used to check the
/// text before it is evaluated. Spaces are kept as tokens because several
/// checks care whether two tokens touch.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    #[regex(r"\.[0-9]+")]
    Number,
    /// A single ASCII letter, i.e. a variable name.
    #[regex(r"[a-zA-Z]")]
    Letter,
    /// A dot that does not start a fraction.
    #[token(".")]
    Dot,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A run of spaces.
    #[regex(r" +")]
    Space,
}

impl Token {
    /// Returns `true` for `+ - * /`.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash)
    }

    /// Returns `true` for tokens that may be part of a variable-name run:
    /// letters, numbers and dots.
    #[must_use]
    pub const fn is_word(self) -> bool {
        matches!(self, Self::Number | Self::Letter | Self::Dot)
    }
}

/// A token together with the source text it was read from.
///
/// `token` is `None` for characters the lexer does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    /// The recognized token, if any.
    pub token: Option<Token>,
    /// The matched source text.
    pub text:  &'a str,
}

impl Lexeme<'_> {
    /// Returns `true` if this lexeme is the given token.
    #[must_use]
    pub fn is(&self, token: Token) -> bool {
        self.token == Some(token)
    }

    /// Returns `true` if this lexeme is a space run.
    #[must_use]
    pub fn is_space(&self) -> bool {
        self.is(Token::Space)
    }

    /// Returns `true` if this lexeme is an operator.
    #[must_use]
    pub fn is_operator(&self) -> bool {
        self.token.is_some_and(Token::is_operator)
    }
}

/// Splits `source` into lexemes covering the whole input.
///
/// Unrecognized characters are not an error here; they are returned as
/// lexemes without a token so that each check can decide how to treat them.
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// One lexeme per token, in source order, together covering all of `source`.
///
/// # Example
/// ```
/// use calcbot::interpreter::lexer::{Token, tokenize};
///
/// let lexemes = tokenize("2 * (a - .5)");
/// let tokens: Vec<_> = lexemes.iter().filter_map(|l| l.token).collect();
/// assert_eq!(tokens,
///            [Token::Number,
///             Token::Space,
///             Token::Star,
///             Token::Space,
///             Token::LParen,
///             Token::Letter,
///             Token::Space,
///             Token::Minus,
///             Token::Space,
///             Token::Number,
///             Token::RParen]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Lexeme<'_>> {
    let mut lexer = Token::lexer(source);
    let mut lexemes = Vec::new();

    while let Some(token) = lexer.next() {
        lexemes.push(Lexeme { token: token.ok(),
                              text:  lexer.slice(), });
    }

    lexemes
}

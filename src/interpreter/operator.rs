/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// Operators reduced in the first pass.
pub const MUL_DIV: &[Operator] = &[Operator::Mul, Operator::Div];
/// Operators reduced in the second pass.
pub const ADD_SUB: &[Operator] = &[Operator::Add, Operator::Sub];
/// Operator classes in the order they are reduced.
pub const PRECEDENCE: [&[Operator]; 2] = [MUL_DIV, ADD_SUB];

impl Operator {
    /// Returns the operator written as `byte`, if any.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'+' => Some(Self::Add),
            b'-' => Some(Self::Sub),
            b'*' => Some(Self::Mul),
            b'/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

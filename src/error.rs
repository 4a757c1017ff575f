#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Lexical errors (`InvalidCharacter`, `MalformedNumber`) are produced while
/// tokenizing, syntactic errors (`UnbalancedParens`, `UnexpectedToken`,
/// `UnexpectedEnd`) while parsing, and `DivisionByZero` while the result is
/// being computed. Positions are byte offsets into the input expression.
pub enum EvalError {
    /// Found a character that is not a digit, operator, parenthesis, dot or
    /// whitespace.
    InvalidCharacter {
        /// The character encountered.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
    /// Found a numeric literal that cannot be read as a number, such as one
    /// with more than one decimal point.
    MalformedNumber {
        /// The malformed literal as written.
        literal:  String,
        /// Byte offset where the literal starts.
        position: usize,
    },
    /// A `(` without a matching `)`, or a `)` without a matching `(`.
    UnbalancedParens {
        /// Byte offset of the offending parenthesis.
        position: usize,
    },
    /// A token appeared where the grammar does not allow it. This includes
    /// trailing tokens left over after a complete expression.
    UnexpectedToken {
        /// The token encountered, as written.
        token:    String,
        /// Byte offset where the token starts.
        position: usize,
    },
    /// The input ended while more tokens were still expected.
    UnexpectedEnd,
    /// The right operand of a division was exactly zero.
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Error at position {position}: Invalid character '{character}'.")
            },

            Self::MalformedNumber { literal, position } => {
                write!(f, "Error at position {position}: Malformed number '{literal}'.")
            },

            Self::UnbalancedParens { position } => {
                write!(f, "Error at position {position}: Unbalanced parentheses.")
            },

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEnd => write!(f, "Error: Unexpected end of input."),

            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for EvalError {}

use logos::Logos;

use crate::error::EvalError;

/// Represents a lexical token in an arithmetic expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
///
/// The lexer never decides whether a `+` or `-` is a sign or a binary
/// operator; it emits the same `Plus`/`Minus` token in both positions and
/// leaves the distinction to the grammar.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(error = LexError)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `2.0`.
    ///
    /// A literal is one or more digits with at most one decimal point, and a
    /// decimal point must have digits on both sides. Dotted digit runs that
    /// break those rules (`1.2.3`, `1.`, `.5`) are caught here as
    /// [`LexError::MalformedNumber`] rather than falling through as stray
    /// characters.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    #[regex(r"[0-9]*\.[0-9]*\.[0-9.]*", malformed_number)]
    #[regex(r"[0-9]+\.", malformed_number)]
    #[regex(r"\.[0-9]*", malformed_number)]
    Number(f64),
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
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Classifies why the lexer rejected a span of input.
///
/// [`tokenize`] turns this, together with the offending slice and its span,
/// into the crate-level [`EvalError`].
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LexError {
    /// A character outside the expression alphabet.
    #[default]
    InvalidCharacter,
    /// A dotted digit run that is not a valid numeric literal.
    MalformedNumber,
}

/// The ordered token sequence produced by [`tokenize`].
///
/// Each token carries the byte offset of its first character, used only for
/// error messages. The evaluator walks this sequence once, front to back.
pub type TokenStream = Vec<(Token, usize)>;

/// Converts an expression string into a sequence of tokens.
///
/// Whitespace between tokens is skipped and never significant, so `"2 + 3"`
/// and `"2+3"` tokenize identically. Tokenization is all-or-nothing: the
/// first rejected span aborts the scan and no partial stream is returned.
///
/// # Errors
/// - [`EvalError::InvalidCharacter`] for a character outside
///   `0-9 . + - * / ( )` and whitespace.
/// - [`EvalError::MalformedNumber`] for a numeric literal with a misplaced
///   or repeated decimal point.
///
/// # Example
/// ```
/// use numeval::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(1.0), 0), (Token::Plus, 2), (Token::Number(2.0), 4)]);
///
/// assert!(tokenize("2 + a").is_err());
/// ```
pub fn tokenize(input: &str) -> Result<TokenStream, EvalError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(LexError::MalformedNumber) => {
                return Err(EvalError::MalformedNumber { literal: lexer.slice().to_string(),
                                                        position });
            },
            Err(LexError::InvalidCharacter) => {
                return Err(EvalError::InvalidCharacter { character: lexer.slice()
                                                                         .chars()
                                                                         .next()
                                                                         .unwrap_or('\0'),
                                                         position });
            },
        }
    }

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid literal.
/// - `None`: If the slice cannot be read as `f64`.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Rejects a dotted digit run that matched one of the malformed-literal
/// patterns, such as `1.2.3` or a bare trailing dot.
fn malformed_number(_lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    Err(LexError::MalformedNumber)
}

use std::iter::Peekable;

use crate::{
    error::EvalError,
    interpreter::lexer::{Token, TokenStream},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a full token stream to a single number.
///
/// This is the entry point for evaluation. It parses one complete
/// `expression` production and then requires that every token has been
/// consumed, so inputs like `2 2` that parse a valid prefix but leave
/// garbage behind are rejected.
///
/// A leftover `)` is reported as [`EvalError::UnbalancedParens`], since it
/// is a closing parenthesis with no matching `(`; any other leftover token
/// is an [`EvalError::UnexpectedToken`].
///
/// # Parameters
/// - `tokens`: Token stream produced by [`crate::interpreter::lexer::tokenize`].
///
/// # Returns
/// The numeric value of the expression.
pub fn evaluate(tokens: &TokenStream) -> EvalResult<f64> {
    let mut iter = tokens.iter().peekable();
    let value = parse_expression(&mut iter)?;

    match iter.next() {
        None => Ok(value),
        Some((Token::RParen, position)) => {
            Err(EvalError::UnbalancedParens { position: *position })
        },
        Some((token, position)) => Err(EvalError::UnexpectedToken { token:    token.to_string(),
                                                                    position: *position, }),
    }
}

/// Parses and evaluates addition and subtraction.
///
/// Handles the lowest-precedence, left-associative binary operators `+` and
/// `-`: operators are applied in the order they are encountered, so
/// `10 - 3 - 2` computes as `(10 - 3) - 2`.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
///
/// # Returns
/// The accumulated numeric value.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut value = parse_term(tokens)?;

    loop {
        match tokens.peek() {
            Some((Token::Plus, _)) => {
                tokens.next();
                value += parse_term(tokens)?;
            },
            Some((Token::Minus, _)) => {
                tokens.next();
                value -= parse_term(tokens)?;
            },
            _ => break,
        }
    }

    Ok(value)
}

/// Parses and evaluates multiplication and division.
///
/// Handles the left-associative binary operators `*` and `/`, which bind
/// tighter than `+` and `-`. Division checks its right operand at the point
/// of division: a divisor of exactly `0.0` fails with
/// [`EvalError::DivisionByZero`] carrying the position of the `/`.
///
/// Grammar: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
///
/// # Returns
/// The accumulated numeric value.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut value = parse_factor(tokens)?;

    loop {
        match tokens.peek() {
            Some((Token::Star, _)) => {
                tokens.next();
                value *= parse_factor(tokens)?;
            },
            Some((Token::Slash, position)) => {
                let position = *position;
                tokens.next();

                let divisor = parse_factor(tokens)?;
                if divisor == 0.0 {
                    return Err(EvalError::DivisionByZero { position });
                }
                value /= divisor;
            },
            _ => break,
        }
    }

    Ok(value)
}

/// Parses and evaluates a factor.
///
/// A factor is a numeric literal, a parenthesized expression, or a unary
/// sign applied to another factor. Unary signs are resolved recursively and
/// right-associatively, so `--5` is `-(-5)` and evaluates to `5`.
///
/// On `(`, the function recurses back into [`parse_expression`]; the next
/// token after the inner expression must be `)`, otherwise (including at
/// end of input) the factor fails with [`EvalError::UnbalancedParens`].
///
/// Grammar:
/// ```text
///     factor := ("+" | "-") factor
///             | number
///             | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
///
/// # Returns
/// The numeric value of the factor.
///
/// # Errors
/// - [`EvalError::UnexpectedEnd`] if no tokens remain.
/// - [`EvalError::UnexpectedToken`] if the next token cannot start a factor.
/// - [`EvalError::UnbalancedParens`] if a `(` is never closed.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Plus, _)) => parse_factor(tokens),
        Some((Token::Minus, _)) => Ok(-parse_factor(tokens)?),

        Some((Token::Number(n), _)) => Ok(*n),

        Some((Token::LParen, position)) => {
            let position = *position;
            let value = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(value),
                _ => Err(EvalError::UnbalancedParens { position }),
            }
        },

        Some((token, position)) => Err(EvalError::UnexpectedToken { token:    token.to_string(),
                                                                    position: *position, }),

        None => Err(EvalError::UnexpectedEnd),
    }
}

//! # numeval
//!
//! numeval is a small arithmetic expression evaluator written in Rust.
//! It tokenizes and evaluates expressions built from numbers, the operators
//! `+ - * /`, parentheses, and unary sign prefixes, with standard
//! mathematical precedence and left associativity.
//!
//! Evaluation is a deterministic pure function: the same input string always
//! yields the same value or the same error, and no state is shared between
//! calls. Nested parentheses recurse once per nesting level, so the nesting
//! depth an expression may use is bounded by the native stack of the calling
//! thread.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator, lexer};

pub use crate::error::EvalError;

/// Provides the error type shared by all evaluation phases.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or computing an expression. It standardizes error reporting and carries
/// detailed information about failures, including the offending character or
/// token and its position in the input.
///
/// # Responsibilities
/// - Defines one error enum covering every failure mode (lexer, parser,
///   arithmetic).
/// - Attaches byte positions and offending lexemes for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the two stages of expression evaluation.
///
/// This module ties together the lexer and the recursive-descent evaluator
/// to turn an expression string into a number. The lexer produces an ordered
/// token sequence; the evaluator walks it exactly once, left to right,
/// evaluating sub-expressions as it descends into parentheses.
///
/// # Responsibilities
/// - Coordinates the core components: lexer and evaluator.
/// - Provides the building blocks behind the top-level [`evaluate`].
/// - Propagates errors from either phase unchanged.
pub mod interpreter;

/// Evaluates an arithmetic expression to a single number.
///
/// The input is fully tokenized first; any lexical error short-circuits with
/// the same error type. The token sequence is then parsed and evaluated in
/// one left-to-right pass, and the result is returned only if every token
/// was consumed. All results are `f64`; a result that mathematically is a
/// whole number is still a float.
///
/// # Errors
/// Returns an [`EvalError`] describing the first violation encountered:
/// lexical (invalid character, malformed number), syntactic (unbalanced
/// parentheses, unexpected token, unexpected end of input), or arithmetic
/// (division by zero). There is no recovery or partial result.
///
/// # Examples
/// ```
/// use numeval::evaluate;
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
///
/// // Parentheses override precedence.
/// assert_eq!(evaluate("(2 + 3) * 4"), Ok(20.0));
///
/// // Unary signs chain right-associatively.
/// assert_eq!(evaluate("--5"), Ok(5.0));
///
/// // Division by zero is a terminal error.
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let tokens = lexer::tokenize(expression)?;
    evaluator::evaluate(&tokens)
}

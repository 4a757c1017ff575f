/// The evaluator module parses tokens and computes the result.
///
/// The evaluator consumes the token stream through a recursive-descent
/// grammar (`expression` → `term` → `factor`) and evaluates sub-expressions
/// inline as it descends; no syntax tree is built. Precedence and
/// associativity fall out of the grammar shape: each production only
/// recurses into the next-tighter-binding production, except parentheses,
/// which recurse back into `expression`.
///
/// # Responsibilities
/// - Parses the token stream exactly once, front to back.
/// - Applies `+ - * /` with standard precedence and left associativity, and
///   resolves unary signs right-associatively.
/// - Reports syntactic errors and division by zero with source positions.
pub mod evaluator;
/// The lexer module tokenizes an expression for further parsing.
///
/// The lexer (tokenizer) reads the raw expression text and produces the
/// ordered token sequence consumed by the evaluator: numbers, the four
/// arithmetic operators, and parentheses. This is the first stage of
/// evaluation and a pure function of its input.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Skips insignificant whitespace between tokens.
/// - Reports lexical errors for invalid characters and malformed numeric
///   literals.
pub mod lexer;

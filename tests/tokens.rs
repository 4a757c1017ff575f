use numeval::EvalError;
use numeval::interpreter::lexer::{Token, tokenize};

#[test]
fn tokenizes_numbers_operators_and_parentheses() {
    let tokens = tokenize("(1.5+2)*3-4/5").unwrap();
    let kinds: Vec<Token> = tokens.into_iter().map(|(tok, _)| tok).collect();

    assert_eq!(kinds,
               vec![Token::LParen,
                    Token::Number(1.5),
                    Token::Plus,
                    Token::Number(2.0),
                    Token::RParen,
                    Token::Star,
                    Token::Number(3.0),
                    Token::Minus,
                    Token::Number(4.0),
                    Token::Slash,
                    Token::Number(5.0)]);
}

#[test]
fn whitespace_between_tokens_is_skipped() {
    let spaced: Vec<Token> = tokenize(" 2 +\t3 ").unwrap()
                                                 .into_iter()
                                                 .map(|(tok, _)| tok)
                                                 .collect();
    let dense: Vec<Token> = tokenize("2+3").unwrap()
                                           .into_iter()
                                           .map(|(tok, _)| tok)
                                           .collect();
    assert_eq!(spaced, dense);
}

#[test]
fn sign_tokens_are_position_independent() {
    // The lexer emits the same Minus token for unary and binary uses; the
    // grammar tells them apart later.
    let tokens = tokenize("-5-3").unwrap();
    assert_eq!(tokens,
               vec![(Token::Minus, 0),
                    (Token::Number(5.0), 1),
                    (Token::Minus, 2),
                    (Token::Number(3.0), 3)]);
}

#[test]
fn empty_input_produces_an_empty_stream() {
    assert_eq!(tokenize("").unwrap(), vec![]);
    assert_eq!(tokenize("   ").unwrap(), vec![]);
}

#[test]
fn invalid_characters_abort_the_scan() {
    assert_eq!(tokenize("2+x*3"),
               Err(EvalError::InvalidCharacter { character: 'x',
                                                 position:  2, }));
    assert_eq!(tokenize("#"),
               Err(EvalError::InvalidCharacter { character: '#',
                                                 position:  0, }));
}

#[test]
fn malformed_literals_are_reported_as_written() {
    assert_eq!(tokenize("3.1.4"),
               Err(EvalError::MalformedNumber { literal:  "3.1.4".to_string(),
                                                position: 0, }));
    assert_eq!(tokenize("7."),
               Err(EvalError::MalformedNumber { literal:  "7.".to_string(),
                                                position: 0, }));
    assert_eq!(tokenize(".5"),
               Err(EvalError::MalformedNumber { literal:  ".5".to_string(),
                                                position: 0, }));
}

use logos::Logos;

use crate::{error::ParseError, postfix::BinaryOperator};

/// Characters that separate tokens and are otherwise ignored.
pub const DELIMITERS: &str = " =";
/// Characters that form single-character operator tokens.
pub const OPERATORS: &str = "+-*/^()";

/// Represents a lexical token in an arithmetic expression.
///
/// A number is a maximal run that starts with a digit and extends over every
/// following character that is neither a delimiter nor an operator. The run
/// is kept as text; whether it is a valid number is decided when it is
/// evaluated.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'a> {
    /// Number literal tokens, such as `42` or `3.25`.
    #[regex(r"[0-9][^ =+\-*/^()]*", |lex| lex.slice(), allow_greedy = true)]
    Number(&'a str),
    /// `+`, `-`, `*`, `/` and `^`.
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    #[token("^", |_| BinaryOperator::Pow)]
    Operator(BinaryOperator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces and `=` signs.
    #[regex(r"[ =]+", logos::skip)]
    Delimiter,
}

/// Splits an expression into tokens, each paired with its byte offset.
///
/// # Errors
/// Returns [`ParseError::UnexpectedCharacter`] for the first character that
/// cannot start a token.
///
/// # Example
/// ```
/// use rpncalc::{
///     interpreter::lexer::{Token, tokenize},
///     postfix::BinaryOperator,
/// };
///
/// let tokens = tokenize("12 + 3.5").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number("12"), 0),
///                 (Token::Operator(BinaryOperator::Add), 3),
///                 (Token::Number("3.5"), 5)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token<'_>, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            tokens.push((tok, position));
        } else {
            let character = source[position..].chars().next().unwrap_or_default();
            return Err(ParseError::UnexpectedCharacter { character, position });
        }
    }

    Ok(tokens)
}

/// Returns `true` if `c` separates tokens (a space or `=`).
#[must_use]
pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(c)
}

/// Returns `true` if `c` is one of `+ - * / ^ ( )`.
#[must_use]
pub fn is_operator(c: char) -> bool {
    OPERATORS.contains(c)
}

/// Returns the rank of a symbol in the priority table.
///
/// | symbol | rank |
/// |--------|------|
/// | `(`    | 0    |
/// | `)`    | 1    |
/// | `+`    | 2    |
/// | `-`    | 3    |
/// | `*` `/`| 4    |
/// | `^`    | 5    |
/// | other  | 6    |
#[must_use]
pub const fn priority(symbol: char) -> u8 {
    match symbol {
        '(' => 0,
        ')' => 1,
        '+' => 2,
        '-' => 3,
        '*' | '/' => 4,
        '^' => 5,
        _ => 6,
    }
}

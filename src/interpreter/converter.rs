use log::{debug, trace};

use crate::{
    error::ParseError,
    interpreter::lexer::{Token, priority, tokenize},
    postfix::{BinaryOperator, Postfix, PostfixToken},
};

/// Result type used throughout conversion.
pub type ParseResult<T> = Result<T, ParseError>;

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    /// An open parenthesis and the byte offset it was found at.
    Group(usize),
    Operator(BinaryOperator),
}

impl Pending {
    const fn priority(self) -> u8 {
        match self {
            Self::Group(_) => priority('('),
            Self::Operator(op) => op.priority(),
        }
    }
}

/// Converts an infix expression into postfix order.
///
/// This is the shunting-yard algorithm. Operators wait on a stack until an
/// operator of lower rank arrives, a closing parenthesis ends their group, or
/// the input ends. An incoming operator first pops every stacked operator
/// whose rank is greater than **or equal to** its own, so operators of equal
/// rank associate to the left. That includes `^`: `2^3^2` converts to
/// `2 3 ^ 2 ^`.
///
/// A `-` standing where an operand is expected (at the start, after `(` or
/// after another operator) and immediately followed by a number is read as
/// the sign of that number.
///
/// # Errors
/// - [`ParseError::UnexpectedCharacter`] if tokenizing fails.
/// - [`ParseError::UnbalancedParentheses`] for a `)` without a matching `(`
///   or a `(` that is never closed.
/// - [`ParseError::EmptyExpression`] if there is nothing to convert.
///
/// # Example
/// ```
/// use rpncalc::interpreter::converter::to_postfix;
///
/// assert_eq!(to_postfix("2+3*4").unwrap().to_string(), "2 3 4 * +");
/// assert_eq!(to_postfix("(2+3)*4").unwrap().to_string(), "2 3 + 4 *");
/// assert_eq!(to_postfix("-5/0").unwrap().to_string(), "-5 0 /");
/// ```
pub fn to_postfix(source: &str) -> ParseResult<Postfix<'_>> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut output = Postfix::new();
    let mut stack: Vec<Pending> = Vec::new();
    let mut expect_operand = true;
    let mut iter = tokens.iter().peekable();

    while let Some(&(token, position)) = iter.next() {
        if expect_operand
           && token == Token::Operator(BinaryOperator::Sub)
           && let Some((Token::Number(literal), next)) = iter.peek()
           && *next == position + 1
        {
            let end = *next + literal.len();
            iter.next();
            output.push(PostfixToken::Number(&source[position..end]));
            expect_operand = false;
            continue;
        }

        match token {
            Token::Number(literal) => {
                output.push(PostfixToken::Number(literal));
                expect_operand = false;
            },
            Token::LParen => {
                stack.push(Pending::Group(position));
                expect_operand = true;
            },
            Token::RParen => {
                close_group(&mut stack, &mut output, position)?;
                expect_operand = false;
            },
            Token::Operator(op) => {
                while let Some(&top) = stack.last()
                      && op.priority() <= top.priority()
                {
                    stack.pop();
                    if let Pending::Operator(popped) = top {
                        trace!("'{op}' pops '{popped}'");
                        output.push(PostfixToken::Operator(popped));
                    }
                }
                stack.push(Pending::Operator(op));
                expect_operand = true;
            },
            Token::Delimiter => {},
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(PostfixToken::Operator(op)),
            Pending::Group(position) => return Err(ParseError::UnbalancedParentheses { position }),
        }
    }

    debug!("{source:?} converted to postfix \"{output}\"");
    Ok(output)
}

/// Pops and emits operators until the `(` that opened the current group.
///
/// The parenthesis itself is discarded.
fn close_group(stack: &mut Vec<Pending>,
               output: &mut Postfix<'_>,
               position: usize)
               -> ParseResult<()> {
    loop {
        match stack.pop() {
            Some(Pending::Group(_)) => return Ok(()),
            Some(Pending::Operator(op)) => output.push(PostfixToken::Operator(op)),
            None => return Err(ParseError::UnbalancedParentheses { position }),
        }
    }
}

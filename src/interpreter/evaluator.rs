use log::{debug, trace, warn};

use crate::{
    error::RuntimeError,
    postfix::{BinaryOperator, Postfix, PostfixToken},
};

/// Result type used throughout evaluation.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix sequence with a value stack.
///
/// Numbers are parsed and pushed. An operator pops the later operand, then
/// the earlier one, and pushes the result of applying itself to them. The
/// value on top of the stack once the sequence is consumed is the answer.
///
/// # Errors
/// - [`RuntimeError::InvalidNumber`] if a literal does not parse as `f64`.
/// - [`RuntimeError::StackUnderflow`] if an operator has fewer than two
///   operands available.
/// - [`RuntimeError::EmptyStack`] if no value is left at the end.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{converter::to_postfix, evaluator::evaluate};
///
/// let postfix = to_postfix("8-3-2").unwrap();
/// assert_eq!(evaluate(&postfix).unwrap(), 3.0);
/// ```
pub fn evaluate(postfix: &Postfix<'_>) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match *token {
            PostfixToken::Number(literal) => stack.push(parse_number(literal)?),
            PostfixToken::Operator(op) => {
                let (left, right) = pop_operands(&mut stack, op)?;
                let value = op.apply(left, right);
                trace!("{left} {op} {right} = {value}");
                stack.push(value);
            },
        }
    }

    let result = stack.last().copied().ok_or(RuntimeError::EmptyStack)?;
    if stack.len() > 1 {
        warn!("{} values left on the stack, using the topmost", stack.len());
    }
    debug!("\"{postfix}\" evaluated to {result}");
    Ok(result)
}

/// Parses a number literal as `f64`.
fn parse_number(literal: &str) -> EvalResult<f64> {
    literal.parse()
           .map_err(|_| RuntimeError::InvalidNumber { literal: literal.to_string() })
}

/// Pops the two operands of `op`, returned in source order.
fn pop_operands(stack: &mut Vec<f64>, op: BinaryOperator) -> EvalResult<(f64, f64)> {
    let underflow = || RuntimeError::StackUnderflow { operator: op };
    let right = stack.pop().ok_or_else(underflow)?;
    let left = stack.pop().ok_or_else(underflow)?;
    Ok((left, right))
}

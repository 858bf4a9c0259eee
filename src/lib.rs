//! # rpncalc
//!
//! rpncalc evaluates arithmetic expressions such as `(2+3)*4` or `2^0.5`.
//! An expression is first converted into Reverse Polish Notation with the
//! shunting-yard algorithm, and the resulting postfix sequence is then
//! evaluated with a value stack.
//!
//! All arithmetic is done on `f64`. Division by zero is not an error: it
//! produces an infinity or NaN.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcError,
    interpreter::{converter::to_postfix, evaluator::evaluate},
};

/// Provides the error types for conversion and evaluation.
///
/// Failures are split by stage: [`error::ParseError`] for problems in the
/// input text, [`error::RuntimeError`] for problems found while evaluating
/// the postfix sequence. [`error::CalcError`] wraps both.
pub mod error;
/// Ties the stages of the calculator together.
///
/// # Responsibilities
/// - Tokenizes the input text.
/// - Converts the tokens to postfix order.
/// - Evaluates the postfix sequence.
pub mod interpreter;
/// Defines the postfix representation shared by the converter and the
/// evaluator.
///
/// This module declares [`postfix::BinaryOperator`], the typed tokens of a
/// postfix sequence, and [`postfix::Postfix`] itself, whose textual form is
/// the familiar space-separated RPN notation.
pub mod postfix;

/// Calculates the value of an arithmetic expression.
///
/// The expression may use numbers, the binary operators `+ - * / ^` and
/// parentheses. Spaces and `=` signs are ignored. Operators of equal rank,
/// including `^`, are applied left to right.
///
/// Each call is independent: no state is shared between calls, so the
/// function may be used from any number of threads at once.
///
/// # Errors
/// Returns [`CalcError::Parse`] if the expression cannot be converted to
/// postfix order, or [`CalcError::Runtime`] if the postfix sequence cannot be
/// evaluated. No partial result is produced in either case.
///
/// # Examples
/// ```
/// use rpncalc::calculate;
///
/// assert_eq!(calculate("2+3*4").unwrap(), 14.0);
/// assert_eq!(calculate("(2+3)*4").unwrap(), 20.0);
/// assert_eq!(calculate("2^3^2").unwrap(), 64.0);
/// assert_eq!(calculate("5/0").unwrap(), f64::INFINITY);
///
/// // An unclosed parenthesis is an error.
/// assert!(calculate("(1+2").is_err());
/// ```
pub fn calculate(expression: &str) -> Result<f64, CalcError> {
    let postfix = to_postfix(expression)?;
    Ok(evaluate(&postfix)?)
}

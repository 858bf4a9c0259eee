use thiserror::Error;

/// Parsing errors.
///
/// Defines the errors that can occur while tokenizing an expression and
/// converting it to postfix order. These describe problems with the input
/// text itself: stray characters, unbalanced parentheses, or an expression
/// with nothing in it.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a postfix sequence. These
/// cover operators without enough operands and number literals that are not
/// valid floating-point values.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Every way a call to [`calculate`](crate::calculate) can fail.
///
/// Failures are never recovered from: the first error aborts the whole
/// computation and no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The expression could not be converted to postfix order.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The postfix sequence could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl CalcError {
    /// Returns `true` when the failure was caused by the syntax of the input
    /// rather than by the evaluation of an already converted expression.
    ///
    /// # Example
    /// ```
    /// use rpncalc::calculate;
    ///
    /// assert!(calculate("(1+2").unwrap_err().is_syntax_error());
    /// assert!(!calculate("1+").unwrap_err().is_syntax_error());
    /// ```
    #[must_use]
    pub const fn is_syntax_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

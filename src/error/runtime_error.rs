use thiserror::Error;

use crate::postfix::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while evaluating a postfix sequence.
///
/// Arithmetic edge cases are not errors: division by zero and powers outside
/// the real domain produce infinities and NaN as IEEE-754 prescribes.
pub enum RuntimeError {
    /// An operator was reached with fewer than two values on the stack.
    #[error("Error: Operator '{operator}' is missing an operand.")]
    StackUnderflow {
        /// The operator that could not be applied.
        operator: BinaryOperator,
    },
    /// A number literal is not a valid floating-point value, for example
    /// `1.2.3`.
    #[error("Error: Invalid number literal '{literal}'.")]
    InvalidNumber {
        /// The literal as it appeared in the input.
        literal: String,
    },
    /// The sequence was consumed without leaving a value behind.
    #[error("Error: No value left to return.")]
    EmptyStack,
}

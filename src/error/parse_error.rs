use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during tokenizing or conversion.
pub enum ParseError {
    /// A `)` had no matching `(`, or a `(` was never closed.
    #[error("Error at position {position}: Unbalanced parentheses.")]
    UnbalancedParentheses {
        /// Byte offset of the offending parenthesis.
        position: usize,
    },
    /// Found a character that can neither start a number nor is an operator
    /// or delimiter.
    #[error("Error at position {position}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The character encountered.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// The input contained no numbers or operators at all.
    #[error("Error: The expression is empty.")]
    EmptyExpression,
}

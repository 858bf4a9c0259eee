/// The converter module rewrites infix expressions in postfix order.
///
/// It runs the shunting-yard algorithm over the token sequence: numbers go
/// straight to the output, while operators and open parentheses wait on a
/// stack until their rank or a closing parenthesis releases them.
///
/// # Responsibilities
/// - Resolves operator priority and left associativity.
/// - Removes parentheses, reporting unbalanced ones.
/// - Reads a `-` directly in front of a number in operand position as a sign.
pub mod converter;
/// The evaluator module computes the value of a postfix sequence.
///
/// # Responsibilities
/// - Parses number literals as `f64`.
/// - Applies operators to the top two values of a value stack.
/// - Reports operators that lack operands.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// The lexer reads the raw text in a single pass and produces typed tokens:
/// number literals and the single-character operators `+ - * / ^ ( )`.
/// Spaces and `=` signs separate tokens and are dropped. It also holds the
/// character classification helpers and the priority table.
pub mod lexer;

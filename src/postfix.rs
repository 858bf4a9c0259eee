use std::fmt;

use crate::interpreter::lexer::priority;

/// A binary arithmetic operator.
///
/// Every operator takes two operands. Parentheses are not operators here:
/// they only group during conversion and never reach a [`Postfix`] sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
    /// Exponentiation (`^`).
    Pow,
}

impl BinaryOperator {
    /// Returns the character this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Returns the operator's rank in the priority table.
    ///
    /// Note that `-` ranks above `+`, while `*` and `/` share a rank.
    ///
    /// # Example
    /// ```
    /// use rpncalc::postfix::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Add.priority() < BinaryOperator::Sub.priority());
    /// assert_eq!(BinaryOperator::Mul.priority(), BinaryOperator::Div.priority());
    /// assert!(BinaryOperator::Div.priority() < BinaryOperator::Pow.priority());
    /// ```
    #[must_use]
    pub const fn priority(self) -> u8 {
        priority(self.symbol())
    }

    /// Applies the operator to two operands.
    ///
    /// `left` is the lexically earlier operand and `right` the later one, so
    /// `Sub.apply(8.0, 3.0)` computes `8 - 3`. All arithmetic follows IEEE-754:
    /// dividing by zero yields an infinity or NaN instead of failing.
    ///
    /// # Example
    /// ```
    /// use rpncalc::postfix::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(8.0, 3.0), 5.0);
    /// assert_eq!(BinaryOperator::Pow.apply(2.0, 10.0), 1024.0);
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One element of a postfix sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixToken<'a> {
    /// A number literal, still in its textual form.
    Number(&'a str),
    /// An operator that follows both of its operands.
    Operator(BinaryOperator),
}

impl fmt::Display for PostfixToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(literal) => f.write_str(literal),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// An expression in Reverse Polish Notation.
///
/// Produced by [`to_postfix`](crate::interpreter::converter::to_postfix) and
/// consumed by [`evaluate`](crate::interpreter::evaluator::evaluate). Number
/// literals borrow from the source text. The [`Display`](fmt::Display)
/// implementation renders the space-delimited form, e.g. `2 3 4 * +`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix<'a> {
    tokens: Vec<PostfixToken<'a>>,
}

impl<'a> Postfix<'a> {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Appends a token to the end of the sequence.
    pub fn push(&mut self, token: PostfixToken<'a>) {
        self.tokens.push(token);
    }

    /// Returns the tokens in evaluation order.
    #[must_use]
    pub fn tokens(&self) -> &[PostfixToken<'a>] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> FromIterator<PostfixToken<'a>> for Postfix<'a> {
    fn from_iter<I: IntoIterator<Item = PostfixToken<'a>>>(iter: I) -> Self {
        Self { tokens: iter.into_iter().collect() }
    }
}

impl<'a, 'p> IntoIterator for &'p Postfix<'a> {
    type IntoIter = std::slice::Iter<'p, PostfixToken<'a>>;
    type Item = &'p PostfixToken<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for Postfix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

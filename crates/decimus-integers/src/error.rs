//! Error types for arithmetic and parsing.

use thiserror::Error;

/// Errors raised by arithmetic operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// The divisor (or a denominator) was zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Errors raised by the strict text parsers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseNumberError {
    /// The input contained no digits.
    #[error("cannot parse number from empty string")]
    Empty,

    /// A character other than a decimal digit was found.
    #[error("invalid digit {found:?} at byte {position}")]
    InvalidDigit {
        /// The offending character.
        found: char,
        /// Byte offset of the character in the input.
        position: usize,
    },

    /// A fraction was written with a zero denominator.
    #[error("rational with zero denominator")]
    ZeroDenominator,
}

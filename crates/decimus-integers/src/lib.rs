//! # decimus-integers
//!
//! Arbitrary precision integer and rational arithmetic.
//!
//! This crate provides:
//! - Arbitrary precision integers (`BigInt`) over base `10^9` limbs
//! - Exact rationals (`Rational`) kept in lowest terms
//! - Euclidean GCD, plus a variant finishing in machine words
//! - Algebraic traits for code generic over its scalar type
//!
//! ## Performance Notes
//!
//! - Multiplication switches from schoolbook to Karatsuba once the operands
//!   span [`algorithms::KARATSUBA_THRESHOLD`] limb pairs
//! - Division is limb-at-a-time long division with a binary-searched
//!   quotient digit
//! - Decimal formatting and parsing are linear: a limb is nine digits

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod macros;

pub mod algorithms;
pub mod error;
pub mod integer;
pub mod rational;
mod text;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use algorithms::{gcd, gcd_fast};
pub use error::{ArithmeticError, ParseNumberError};
pub use integer::BigInt;
pub use rational::Rational;
pub use traits::{EuclideanDomain, Field, Ring};

//! # Decimus
//!
//! Arbitrary precision integers and exact rationals in pure Rust.
//!
//! Integers are stored as base `10^9` limbs, so decimal input and output
//! need no base conversion. Rationals are kept in lowest terms after every
//! operation.
//!
//! ## Features
//!
//! - **Sign-magnitude integers**: truncating division matching `i64`
//! - **Adaptive multiplication**: schoolbook for small operands, Karatsuba
//!   above a limb-pair threshold
//! - **Exact rationals**: GCD-normalized, with fixed-precision decimal
//!   rendering
//! - **Generic code**: `Ring`, `EuclideanDomain` and `Field` traits
//!
//! ## Quick Start
//!
//! ```rust
//! use decimus::prelude::*;
//!
//! let a: BigInt = "999999999".parse().unwrap();
//! assert_eq!((a + BigInt::new(1)).to_string(), "1000000000");
//!
//! let third = Rational::from_i64(1, 3);
//! assert_eq!(third.as_decimal(4), "0.3333");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use decimus_integers as integers;
pub use decimus_integers::algorithms;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use decimus_integers::{
        gcd, ArithmeticError, BigInt, EuclideanDomain, Field, ParseNumberError, Rational, Ring,
    };
}

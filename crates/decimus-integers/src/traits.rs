//! Algebraic structure traits.
//!
//! Generic code (matrices, residue fields, geometry over exact numbers)
//! takes its scalar type through these bounds instead of naming
//! [`BigInt`] or [`Rational`] directly.

use num_traits::{One, Zero};
use std::fmt::Debug;
use std::ops::{Div, Neg, Sub};

use crate::error::ArithmeticError;
use crate::{BigInt, Rational};

/// A commutative ring with a total order.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring: Clone + Ord + Debug + Zero + One + Sub<Output = Self> + Neg<Output = Self> {
    /// Computes self^n by repeated squaring.
    fn power(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }

        result
    }
}

/// A ring with division with remainder.
pub trait EuclideanDomain: Ring {
    /// Returns `(q, r)` with `q * other + r == self`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `other` is zero.
    fn div_rem(&self, other: &Self) -> Result<(Self, Self), ArithmeticError>;

    /// Greatest common divisor by repeated remainders.
    fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = match a.div_rem(&b) {
                Ok((_, r)) => r,
                Err(_) => unreachable!("divisor checked nonzero"),
            };
            a = b;
            b = r;
        }
        if a < Self::zero() {
            -a
        } else {
            a
        }
    }

    /// Extended Euclid: returns `(g, s, t)` with `s * self + t * other == g`.
    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let (mut old_r, mut r) = (self.clone(), other.clone());
        let (mut old_s, mut s) = (Self::one(), Self::zero());
        let (mut old_t, mut t) = (Self::zero(), Self::one());

        while !r.is_zero() {
            let (q, rem) = match old_r.div_rem(&r) {
                Ok(qr) => qr,
                Err(_) => unreachable!("divisor checked nonzero"),
            };
            old_r = std::mem::replace(&mut r, rem);
            let next_s = old_s - q.clone() * s.clone();
            old_s = std::mem::replace(&mut s, next_s);
            let next_t = old_t - q * t.clone();
            old_t = std::mem::replace(&mut t, next_t);
        }

        if old_r < Self::zero() {
            (-old_r, -old_s, -old_t)
        } else {
            (old_r, old_s, old_t)
        }
    }
}

/// A ring where every nonzero element is invertible.
pub trait Field: Ring + Div<Output = Self> {
    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] for zero.
    fn inv(&self) -> Result<Self, ArithmeticError>;
}

impl Ring for BigInt {
    fn power(&self, n: u32) -> Self {
        self.pow(n)
    }
}

impl EuclideanDomain for BigInt {
    fn div_rem(&self, other: &Self) -> Result<(Self, Self), ArithmeticError> {
        BigInt::div_rem(self, other)
    }

    fn gcd(&self, other: &Self) -> Self {
        crate::gcd(self, other)
    }
}

impl Ring for Rational {}

impl Field for Rational {
    fn inv(&self) -> Result<Self, ArithmeticError> {
        self.checked_recip()
    }
}

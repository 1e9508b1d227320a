//! Arbitrary precision integers.
//!
//! A [`BigInt`] stores its magnitude as base `10^9` limbs, least significant
//! first, next to a sign flag. Every mutating operation ends by restoring
//! the canonical form: no high zero limbs, at least one limb, and zero is
//! never negative. Derived equality and hashing rely on that.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use tracing::{debug, trace};

use crate::algorithms::{self, Limb, BASE, KARATSUBA_THRESHOLD};
use crate::error::ArithmeticError;
use crate::macros::forward_binop;

/// An arbitrary precision signed integer.
///
/// Division truncates toward zero and the remainder takes the sign of the
/// dividend, matching Rust's primitive integers.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    limbs: Vec<Limb>,
    non_negative: bool,
}

impl BigInt {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::from_magnitude(value.unsigned_abs(), value >= 0)
    }

    fn from_magnitude(mut magnitude: u64, non_negative: bool) -> Self {
        let mut limbs = Vec::with_capacity(3);
        loop {
            let (low, rest) = algorithms::split_wide(magnitude);
            limbs.push(low);
            magnitude = rest;
            if magnitude == 0 {
                break;
            }
        }
        Self::from_limbs(limbs, non_negative)
    }

    /// Builds an integer from raw limbs and normalizes it.
    pub(crate) fn from_limbs(limbs: Vec<Limb>, non_negative: bool) -> Self {
        let mut out = Self {
            limbs,
            non_negative,
        };
        out.normalize();
        out
    }

    fn normalize(&mut self) {
        algorithms::trim(&mut self.limbs);
        if self.is_zero() {
            self.non_negative = true;
        }
    }

    /// Returns true if this integer is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0]
    }

    /// Returns true if this integer is not zero.
    ///
    /// This is the integer's truth value.
    #[must_use]
    pub fn is_nonzero(&self) -> bool {
        !self.is_zero()
    }

    /// Returns true if this integer is one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.non_negative && self.limbs == [1]
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        !self.non_negative
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.non_negative {
            1
        } else {
            -1
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            limbs: self.limbs.clone(),
            non_negative: true,
        }
    }

    /// Flips the sign in place. Zero stays non-negative.
    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.non_negative = !self.non_negative;
        }
    }

    /// Number of base `10^9` limbs in the magnitude.
    #[must_use]
    pub fn limb_len(&self) -> usize {
        self.limbs.len()
    }

    /// The magnitude's limbs, least significant first.
    #[must_use]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// The least significant limb of the magnitude.
    #[must_use]
    pub fn low_limb(&self) -> Limb {
        self.limbs[0]
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        // 10^27 > i64::MAX, so three limbs is the most worth accumulating.
        if self.limbs.len() > 3 {
            return None;
        }
        let magnitude = self
            .limbs
            .iter()
            .rev()
            .fold(0i128, |acc, &l| acc * i128::from(BASE) + i128::from(l));
        let value = if self.non_negative { magnitude } else { -magnitude };
        i64::try_from(value).ok()
    }

    /// Converts to the nearest representable f64, losing precision for
    /// large magnitudes. Values beyond the f64 range become infinite.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let value = self
            .limbs
            .iter()
            .rev()
            .fold(0.0, |acc, &l| acc * f64::from(BASE) + f64::from(l));
        if self.non_negative {
            value
        } else {
            -value
        }
    }

    /// Computes self^exp by repeated squaring.
    #[must_use]
    pub fn pow(&self, mut exp: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result *= &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Computes the greatest common divisor.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        algorithms::gcd(self, other)
    }

    /// Computes the least common multiple.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        (&(self / &g) * other).abs()
    }

    /// Divides with truncation toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    /// Remainder of truncating division; takes the sign of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    /// Computes quotient and remainder in one long division.
    ///
    /// The pair satisfies `q * rhs + r == self`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), ArithmeticError> {
        if rhs.is_zero() {
            debug!(dividend_limbs = self.limbs.len(), "rejected division by zero");
            return Err(ArithmeticError::DivisionByZero);
        }
        let (q, r) = algorithms::div_rem(&self.limbs, &rhs.limbs);
        Ok((
            Self::from_limbs(q, self.non_negative == rhs.non_negative),
            Self::from_limbs(r, self.non_negative),
        ))
    }

    /// Multiplies with the schoolbook method regardless of size.
    #[must_use]
    pub fn mul_schoolbook(&self, rhs: &Self) -> Self {
        self.mul_with(rhs, algorithms::schoolbook)
    }

    /// Multiplies with a top-level Karatsuba split regardless of size.
    #[must_use]
    pub fn mul_karatsuba(&self, rhs: &Self) -> Self {
        self.mul_with(rhs, algorithms::karatsuba)
    }

    fn mul_with(&self, rhs: &Self, mul: fn(&[Limb], &[Limb]) -> Vec<Limb>) -> Self {
        Self::from_limbs(mul(&self.limbs, &rhs.limbs), self.non_negative == rhs.non_negative)
    }

    /// Adds one in place and returns the updated value.
    pub fn increment(&mut self) -> &mut Self {
        *self += &Self::one();
        self
    }

    /// Subtracts one in place and returns the updated value.
    pub fn decrement(&mut self) -> &mut Self {
        *self -= &Self::one();
        self
    }

    /// Adds one in place and returns the previous value.
    pub fn post_increment(&mut self) -> Self {
        let prev = self.clone();
        self.increment();
        prev
    }

    /// Subtracts one in place and returns the previous value.
    pub fn post_decrement(&mut self) -> Self {
        let prev = self.clone();
        self.decrement();
        prev
    }

    /// Adds `rhs` carrying the sign `rhs_non_negative`, so subtraction is
    /// addition with the sign flipped.
    fn add_signed(&mut self, rhs: &Self, rhs_non_negative: bool) {
        if self.non_negative == rhs_non_negative {
            algorithms::add_assign_at(&mut self.limbs, &rhs.limbs, 0);
        } else if algorithms::cmp(&self.limbs, &rhs.limbs) == Ordering::Less {
            self.limbs = algorithms::sub(&rhs.limbs, &self.limbs);
            self.non_negative = rhs_non_negative;
        } else {
            algorithms::sub_assign(&mut self.limbs, &rhs.limbs);
        }
        self.normalize();
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        Self {
            limbs: vec![0],
            non_negative: true,
        }
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    fn one() -> Self {
        Self {
            limbs: vec![1],
            non_negative: true,
        }
    }

    fn is_one(&self) -> bool {
        BigInt::is_one(self)
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.non_negative, other.non_negative) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => algorithms::cmp(&self.limbs, &other.limbs),
            (false, false) => algorithms::cmp(&other.limbs, &self.limbs),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}

// Arithmetic operations
impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        self.add_signed(rhs, rhs.non_negative);
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        self.add_signed(rhs, !rhs.non_negative);
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        let pairs = self.limbs.len() * rhs.limbs.len();
        if pairs >= KARATSUBA_THRESHOLD {
            trace!(
                lhs_limbs = self.limbs.len(),
                rhs_limbs = rhs.limbs.len(),
                "karatsuba multiplication"
            );
        }
        *self = self.mul_with(rhs, algorithms::mul);
    }
}

impl DivAssign<&BigInt> for BigInt {
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div_assign(&mut self, rhs: &BigInt) {
        match self.checked_div(rhs) {
            Ok(q) => *self = q,
            Err(e) => panic!("{e}"),
        }
    }
}

impl RemAssign<&BigInt> for BigInt {
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn rem_assign(&mut self, rhs: &BigInt) {
        match self.checked_rem(rhs) {
            Ok(r) => *self = r,
            Err(e) => panic!("{e}"),
        }
    }
}

forward_binop!(BigInt, Add, add, AddAssign, add_assign);
forward_binop!(BigInt, Sub, sub, SubAssign, sub_assign);
forward_binop!(BigInt, Mul, mul, MulAssign, mul_assign);
forward_binop!(BigInt, Div, div, DivAssign, div_assign);
forward_binop!(BigInt, Rem, rem, RemAssign, rem_assign);

impl Neg for BigInt {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::from_magnitude(value, true)
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        Self::from_magnitude(u64::from(value), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_basic_ops() {
        let a = BigInt::new(10);
        let b = BigInt::new(3);

        assert_eq!((a.clone() + b.clone()).to_i64(), Some(13));
        assert_eq!((a.clone() - b.clone()).to_i64(), Some(7));
        assert_eq!((a.clone() * b.clone()).to_i64(), Some(30));
        assert_eq!((a.clone() / b.clone()).to_i64(), Some(3));
        assert_eq!((a % b).to_i64(), Some(1));
    }

    #[test]
    fn test_construction_from_i64() {
        assert_eq!(BigInt::new(0).limbs(), &[0]);
        assert!(!BigInt::new(0).is_negative());
        assert_eq!(BigInt::new(-1_234_567_890_123).limbs(), &[567_890_123, 1_234]);
        assert!(BigInt::new(-5).is_negative());
        assert_eq!(BigInt::new(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
    }

    #[test]
    fn test_carry_into_new_limb() {
        assert_eq!((big("999999999") + big("1")).to_string(), "1000000000");
    }

    #[test]
    fn test_mixed_sign_addition() {
        assert_eq!((BigInt::new(5) + BigInt::new(-8)).to_i64(), Some(-3));
        assert_eq!((BigInt::new(-5) + BigInt::new(8)).to_i64(), Some(3));
        assert_eq!((BigInt::new(-5) - BigInt::new(-8)).to_i64(), Some(3));
        assert_eq!((BigInt::new(0) - BigInt::new(4)).to_i64(), Some(-4));
        assert_eq!((BigInt::new(-5) + BigInt::new(5)), BigInt::zero());
        assert!(!(BigInt::new(-5) + BigInt::new(5)).is_negative());
    }

    #[test]
    fn test_borrow_across_limbs() {
        assert_eq!((big("1000000000000000000") - big("1")).to_string(), "999999999999999999");
        assert_eq!((big("1") - big("1000000000000000000")).to_string(), "-999999999999999999");
    }

    #[test]
    fn test_large_multiplication() {
        let a = big("1000000000000000000");
        assert_eq!((&a * &a).to_string(), "1000000000000000000000000000000000000");
    }

    #[test]
    fn test_multiplication_sign() {
        assert_eq!((BigInt::new(-4) * BigInt::new(6)).to_i64(), Some(-24));
        assert_eq!((BigInt::new(-4) * BigInt::new(-6)).to_i64(), Some(24));
        let z = BigInt::new(-4) * BigInt::new(0);
        assert!(z.is_zero());
        assert!(!z.is_negative());
    }

    #[test]
    fn test_forced_paths_agree() {
        let a = big(&"987654321".repeat(15));
        let b = big(&"123456789".repeat(12));
        assert_eq!(a.mul_schoolbook(&b), a.mul_karatsuba(&b));
        assert_eq!(a.mul_schoolbook(&b), &a * &b);
        assert_eq!((-&a).mul_karatsuba(&b), -(&a * &b));
    }

    #[test]
    fn test_truncating_division() {
        assert_eq!((BigInt::new(7) / BigInt::new(-2)).to_string(), "-3");
        assert_eq!((BigInt::new(7) % BigInt::new(-2)).to_string(), "1");
        assert_eq!((BigInt::new(-7) / BigInt::new(2)).to_string(), "-3");
        assert_eq!((BigInt::new(-7) % BigInt::new(2)).to_string(), "-1");
        assert_eq!((BigInt::new(-7) / BigInt::new(-2)).to_string(), "3");
        assert_eq!((BigInt::new(-6) % BigInt::new(3)), BigInt::zero());
    }

    #[test]
    fn test_matches_native_division() {
        for a in [-1_000_000_007i64, -99, -1, 0, 1, 42, 1_000_000_000_000] {
            for b in [-1_000_000_000i64, -7, -1, 1, 3, 999_999_999] {
                let (q, r) = BigInt::new(a).div_rem(&BigInt::new(b)).unwrap();
                assert_eq!(q.to_i64(), Some(a / b), "{a} / {b}");
                assert_eq!(r.to_i64(), Some(a % b), "{a} % {b}");
            }
        }
    }

    #[test]
    fn test_large_division() {
        let a = big("123456789012345678901234567890123456789");
        let b = big("987654321987654321");
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(&q * &b + &r, a);
        assert!(r < b);
        assert_eq!(q.to_string(), "124999998748437501153");
    }

    #[test]
    fn test_division_by_zero() {
        let a = BigInt::new(5);
        assert_eq!(a.checked_div(&BigInt::zero()), Err(ArithmeticError::DivisionByZero));
        assert_eq!(a.checked_rem(&BigInt::zero()), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_division_operator_panics_on_zero() {
        let _ = BigInt::new(5) / BigInt::zero();
    }

    #[test]
    fn test_ordering() {
        let mut values = vec![
            big("1000000000"),
            BigInt::new(-3),
            BigInt::new(0),
            big("-1000000000"),
            BigInt::new(999_999_999),
            BigInt::new(-2),
        ];
        values.sort();
        let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            ["-1000000000", "-3", "-2", "0", "999999999", "1000000000"]
        );
    }

    #[test]
    fn test_increment_decrement() {
        let mut x = BigInt::new(-1);
        assert_eq!(x.post_increment().to_i64(), Some(-1));
        assert!(x.is_zero());
        assert!(!x.is_negative());
        x.increment().increment();
        assert_eq!(x.to_i64(), Some(2));
        assert_eq!(x.post_decrement().to_i64(), Some(2));
        x.decrement().decrement();
        assert_eq!(x.to_i64(), Some(-1));

        let mut y = big("1000000000");
        y.decrement();
        assert_eq!(y.limbs(), &[999_999_999]);
    }

    #[test]
    fn test_truth_value() {
        assert!(!BigInt::zero().is_nonzero());
        assert!(BigInt::new(-1).is_nonzero());
    }

    #[test]
    fn test_negate_keeps_zero_positive() {
        let mut z = BigInt::zero();
        z.negate();
        assert!(!z.is_negative());
        assert_eq!(-BigInt::zero(), BigInt::zero());
    }

    #[test]
    fn test_pow_and_lcm() {
        assert_eq!(BigInt::new(10).pow(20).to_string(), "100000000000000000000");
        assert_eq!(BigInt::new(-2).pow(3).to_i64(), Some(-8));
        assert_eq!(BigInt::new(7).pow(0), BigInt::one());
        assert_eq!(BigInt::new(4).lcm(&BigInt::new(-6)).to_i64(), Some(12));
        assert!(BigInt::new(4).lcm(&BigInt::zero()).is_zero());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(big("9223372036854775807").to_i64(), Some(i64::MAX));
        assert_eq!(big("9223372036854775808").to_i64(), None);
        assert_eq!(big("-9223372036854775808").to_i64(), Some(i64::MIN));
        assert_eq!(big("1000000000000000000000000000000").to_i64(), None);
        assert!((big("-2500000000").to_f64() + 2.5e9).abs() < 1e-3);
        assert_eq!(BigInt::new(3).low_limb(), 3);
    }

    #[test]
    fn test_to_f64_saturates_to_infinity() {
        // 10^400 has zero limbs above the f64 range.
        let huge = BigInt::new(10).pow(400);
        let (up, down) = (huge.to_f64(), (-&huge).to_f64());
        assert!(up.is_infinite() && up > 0.0);
        assert!(down.is_infinite() && down < 0.0);

        let close = big("123456789000000000123456789");
        assert!((close.to_f64() / 1.234_567_890_000_000_001e26 - 1.0).abs() < 1e-15);
        assert!((BigInt::new(10).pow(300).to_f64() / 1e300 - 1.0).abs() < 1e-12);
    }
}

//! Exact rational numbers.
//!
//! A [`Rational`] is a pair of [`BigInt`]s kept in lowest terms with a
//! strictly positive denominator. Zero is always `0/1`.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::algorithms::BASE_DIGITS;
use crate::error::{ArithmeticError, ParseNumberError};
use crate::macros::forward_binop;
use crate::{gcd, text, BigInt};

/// Places rendered past the first nonzero limb for the float parser.
const F64_DECIMAL_DIGITS: usize = 20;

/// Anything below `10^-345` rounds to zero as an f64.
const F64_MAX_DECIMAL_PLACES: usize = 345;

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: BigInt, denominator: BigInt) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        Self::reduced(numerator, denominator)
    }

    /// Creates a new rational, rejecting a zero denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `denominator` is zero.
    pub fn try_new(numerator: BigInt, denominator: BigInt) -> Result<Self, ArithmeticError> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::reduced(numerator, denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: BigInt) -> Self {
        Self {
            numerator: n,
            denominator: BigInt::one(),
        }
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(BigInt::new(numerator), BigInt::new(denominator))
    }

    fn reduced(numerator: BigInt, denominator: BigInt) -> Self {
        let mut out = Self {
            numerator,
            denominator,
        };
        out.normalize();
        out
    }

    /// Moves the sign to the numerator and divides out the common factor.
    fn normalize(&mut self) {
        if self.denominator.is_negative() {
            self.numerator.negate();
            self.denominator.negate();
        }
        if self.numerator.is_zero() {
            self.denominator = BigInt::one();
            return;
        }
        let g = gcd(&self.numerator, &self.denominator);
        if !g.is_one() {
            self.numerator /= &g;
            self.denominator /= &g;
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Returns the denominator. Always positive.
    #[must_use]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Splits into `(numerator, denominator)`.
    #[must_use]
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<BigInt> {
        if self.is_integer() {
            Some(self.numerator.clone())
        } else {
            None
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        Self::reduced(self.denominator.clone(), self.numerator.clone())
    }

    /// Returns the reciprocal, or an error for zero.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the rational is zero.
    pub fn checked_recip(&self) -> Result<Self, ArithmeticError> {
        if self.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(self.recip())
    }

    /// Computes self^exp; negative exponents invert first.
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero and `exp` is negative.
    #[must_use]
    pub fn pow(&self, exp: i32) -> Self {
        let base = if exp < 0 { self.recip() } else { self.clone() };
        let exp = exp.unsigned_abs();
        // Powers of coprime values stay coprime.
        Self {
            numerator: base.numerator.pow(exp),
            denominator: base.denominator.pow(exp),
        }
    }

    /// Divides, rejecting a zero divisor.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::reduced(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        ))
    }

    /// Renders the value rounded half-up to `precision` fractional digits.
    ///
    /// A zero precision prints no decimal point. A minus sign is printed
    /// only if the rounded digits are not all zero.
    #[must_use]
    pub fn as_decimal(&self, precision: usize) -> String {
        // One guard digit decides the rounding.
        let scale = BigInt::new(10).pow(u32::try_from(precision + 1).unwrap_or(u32::MAX));
        let ten = BigInt::new(10);

        let mut scaled = &(&self.numerator.abs() * &scale) / &self.denominator;
        if &scaled % &ten >= BigInt::new(5) {
            scaled += &BigInt::new(5);
        }
        scaled /= &ten;

        let sign = if self.is_negative() && scaled.is_nonzero() { "-" } else { "" };
        let digits = scaled.to_string();
        if precision == 0 {
            return format!("{sign}{digits}");
        }

        let digits = format!("{digits:0>width$}", width = precision + 1);
        let (int_part, frac_part) = digits.split_at(digits.len() - precision);
        format!("{sign}{int_part}.{frac_part}")
    }

    /// Converts to the nearest f64 via a decimal rendering.
    ///
    /// Enough places are rendered to keep the leading significant digits
    /// of small magnitudes.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        // The first nonzero digit lies within this many limbs of the point.
        let leading = self
            .denominator
            .limb_len()
            .saturating_sub(self.numerator.limb_len())
            + 1;
        let precision = (leading * BASE_DIGITS + F64_DECIMAL_DIGITS).min(F64_MAX_DECIMAL_PLACES);
        // The rendering is always a well-formed float literal.
        self.as_decimal(precision)
            .parse()
            .unwrap_or(f64::NAN)
    }

    /// Reads an integer leniently, as [`BigInt::parse_lenient`] does.
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        Self::from_integer(BigInt::parse_lenient(input))
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross multiplication keeps the order.
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Rational {
    type Err = ParseNumberError;

    /// Parses `n` or `n/d`; the denominator may carry a sign.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            None => text::parse_strict(s, 0).map(Self::from_integer),
            Some((n, d)) => {
                let numerator = text::parse_strict(n, 0)?;
                let denominator = text::parse_strict(d, n.len() + 1)?;
                Self::try_new(numerator, denominator).map_err(|_| ParseNumberError::ZeroDenominator)
            }
        }
    }
}

// Arithmetic operations
impl AddAssign<&Rational> for Rational {
    fn add_assign(&mut self, rhs: &Rational) {
        self.numerator = &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator;
        self.denominator *= &rhs.denominator;
        self.normalize();
    }
}

impl SubAssign<&Rational> for Rational {
    fn sub_assign(&mut self, rhs: &Rational) {
        self.numerator = &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator;
        self.denominator *= &rhs.denominator;
        self.normalize();
    }
}

impl MulAssign<&Rational> for Rational {
    fn mul_assign(&mut self, rhs: &Rational) {
        if self.is_zero() || rhs.is_zero() {
            *self = Self::zero();
            return;
        }
        self.numerator *= &rhs.numerator;
        self.denominator *= &rhs.denominator;
        self.normalize();
    }
}

impl DivAssign<&Rational> for Rational {
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div_assign(&mut self, rhs: &Rational) {
        match self.checked_div(rhs) {
            Ok(q) => *self = q,
            Err(e) => panic!("{e}"),
        }
    }
}

forward_binop!(Rational, Add, add, AddAssign, add_assign);
forward_binop!(Rational, Sub, sub, SubAssign, sub_assign);
forward_binop!(Rational, Mul, mul, MulAssign, mul_assign);
forward_binop!(Rational, Div, div, DivAssign, div_assign);

impl Neg for Rational {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.numerator.negate();
        self
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(BigInt::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(BigInt::from(n))
    }
}

//! Decimal text for [`BigInt`].
//!
//! Formatting prints the top limb as is and every lower limb padded to nine
//! digits. Parsing comes in two flavours: the strict [`FromStr`] impl, and
//! lenient readers that treat input without digits as zero.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::algorithms::{Limb, BASE_DIGITS};
use crate::error::ParseNumberError;
use crate::BigInt;

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::with_capacity(self.limb_len() * BASE_DIGITS);
        let mut limbs = self.limbs().iter().rev();
        if let Some(top) = limbs.next() {
            write!(digits, "{top}")?;
        }
        for limb in limbs {
            write!(digits, "{limb:0width$}", width = BASE_DIGITS)?;
        }
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl FromStr for BigInt {
    type Err = ParseNumberError;

    /// Parses an optional `+`/`-` followed by one or more decimal digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_strict(s, 0)
    }
}

impl BigInt {
    /// Reads an integer from the front of `input` and returns it with the
    /// unconsumed rest.
    ///
    /// Leading whitespace is skipped, then at most one sign, then digits up
    /// to the first non-digit. No digits at all reads as zero: this is a
    /// leniency kept for compatibility, not validation.
    #[must_use]
    pub fn read_lenient(input: &str) -> (Self, &str) {
        let (non_negative, unsigned) = split_sign(input.trim_start());
        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let (digits, rest) = unsigned.split_at(end);
        (from_digits(digits, non_negative), rest)
    }

    /// Parses like [`BigInt::read_lenient`], ignoring trailing input.
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        Self::read_lenient(input).0
    }
}

/// Strict parse of `s`; error positions are shifted by `offset`.
pub(crate) fn parse_strict(s: &str, offset: usize) -> Result<BigInt, ParseNumberError> {
    let (non_negative, digits) = split_sign(s);
    if digits.is_empty() {
        return Err(ParseNumberError::Empty);
    }

    let sign_len = s.len() - digits.len();
    if let Some((i, found)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(ParseNumberError::InvalidDigit {
            found,
            position: offset + sign_len + i,
        });
    }

    Ok(from_digits(digits, non_negative))
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (false, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (true, rest)
    } else {
        (true, s)
    }
}

/// Groups ASCII digits into limbs from the least significant end.
fn from_digits(digits: &str, non_negative: bool) -> BigInt {
    let digits = digits.trim_start_matches('0').as_bytes();
    let limbs = digits
        .rchunks(BASE_DIGITS)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0, |acc: Limb, &d| acc * 10 + Limb::from(d - b'0'))
        })
        .collect();
    BigInt::from_limbs(limbs, non_negative)
}

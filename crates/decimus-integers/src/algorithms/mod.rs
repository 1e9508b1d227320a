//! Limb-level arithmetic.
//!
//! A magnitude is a little-endian slice of base `10^9` limbs. Nothing in
//! this module looks at signs: [`BigInt`](crate::BigInt) combines these
//! primitives with its sign rules. Inputs may carry high zero limbs unless
//! stated otherwise; outputs are only trimmed where documented.

use std::cmp::Ordering;

mod addition;
mod division;
mod euclid;
mod multiplication;

pub use self::addition::{add, add_assign_at, sub, sub_assign};
pub use self::division::div_rem;
pub use self::euclid::{binary_gcd, gcd, gcd_fast};
pub use self::multiplication::{karatsuba, mul, mul_limb, schoolbook};

/// A single base `10^9` digit.
pub type Limb = u32;

/// Wide accumulator for limb products.
pub type DoubleLimb = u64;

/// The limb radix.
pub const BASE: Limb = 1_000_000_000;

/// Decimal digits stored per limb.
pub const BASE_DIGITS: usize = 9;

/// Limb-pair count below which schoolbook multiplication is used.
///
/// The product of the operand lengths is compared against this value, so a
/// 9x11 product runs schoolbook while 10x10 goes to Karatsuba.
pub const KARATSUBA_THRESHOLD: usize = 100;

/// Splits a wide value into its lowest limb and the carry above it.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // the remainder is below BASE
pub fn split_wide(value: DoubleLimb) -> (Limb, DoubleLimb) {
    let base = DoubleLimb::from(BASE);
    ((value % base) as Limb, value / base)
}

/// Returns `limbs` without its high zero limbs. Zero becomes the empty slice.
#[must_use]
pub fn trimmed(limbs: &[Limb]) -> &[Limb] {
    let len = limbs.iter().rposition(|&l| l != 0).map_or(0, |i| i + 1);
    &limbs[..len]
}

/// Drops high zero limbs in place, keeping at least one limb.
pub fn trim(limbs: &mut Vec<Limb>) {
    while limbs.len() > 1 && limbs.last() == Some(&0) {
        limbs.pop();
    }
    if limbs.is_empty() {
        limbs.push(0);
    }
}

/// Compares two magnitudes.
///
/// After trimming, the longer magnitude is larger; equal lengths compare
/// limb by limb from the most significant end.
#[must_use]
pub fn cmp(a: &[Limb], b: &[Limb]) -> Ordering {
    let a = trimmed(a);
    let b = trimmed(b);
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

//! Greatest common divisor.
//!
//! Both variants return the same non-negative value for every input;
//! `gcd(0, 0)` is `0`.

use std::mem;

use crate::BigInt;

/// GCD by the Euclidean algorithm on absolute values.
///
/// Repeatedly replaces `(a, b)` with `(b, a mod b)` until `b` is zero.
#[must_use]
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let r = &a % &b;
        a = mem::replace(&mut b, r);
    }
    a
}

/// GCD that finishes in machine words.
///
/// Euclidean steps run while either operand spans several limbs. Once both
/// fit in a single limb the rest is handed to [`binary_gcd`].
#[must_use]
pub fn gcd_fast(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    loop {
        if b.is_zero() {
            return a;
        }
        if a.limb_len() == 1 && b.limb_len() == 1 {
            let g = binary_gcd(u64::from(a.low_limb()), u64::from(b.low_limb()));
            return BigInt::from(g);
        }
        let r = &a % &b;
        a = mem::replace(&mut b, r);
    }
}

/// Stein's binary GCD on `u64`.
#[must_use]
pub fn binary_gcd(mut a: u64, mut b: u64) -> u64 {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    let shift = (a | b).trailing_zeros();
    a >>= a.trailing_zeros();
    loop {
        b >>= b.trailing_zeros();
        if a > b {
            mem::swap(&mut a, &mut b);
        }
        b -= a;
        if b == 0 {
            break;
        }
    }
    a << shift
}

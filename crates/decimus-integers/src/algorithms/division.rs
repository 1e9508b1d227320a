//! Long division of magnitudes.

use std::cmp::Ordering;

use super::{cmp, mul_limb, sub_assign, trim, trimmed, Limb, BASE};

/// Divides `dividend` by a nonzero `divisor`, returning `(quotient, remainder)`.
///
/// Dividend limbs are brought down one at a time, most significant first.
/// The running remainder always stays below `BASE * divisor`, so each
/// quotient digit lies in `[0, BASE)` and is found by binary search.
/// Both results are trimmed.
///
/// # Panics
///
/// Panics in debug builds if `divisor` is zero.
#[must_use]
pub fn div_rem(dividend: &[Limb], divisor: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    let divisor = trimmed(divisor);
    debug_assert!(!divisor.is_empty(), "division by a zero magnitude");

    let mut quotient = Vec::with_capacity(dividend.len());
    let mut rem: Vec<Limb> = Vec::with_capacity(divisor.len() + 1);

    for &limb in dividend.iter().rev() {
        rem.insert(0, limb);
        while rem.last() == Some(&0) {
            rem.pop();
        }

        if cmp(&rem, divisor) == Ordering::Less {
            quotient.push(0);
            continue;
        }

        let q = quotient_digit(&rem, divisor);
        sub_assign(&mut rem, &mul_limb(divisor, q));
        quotient.push(q);
    }

    quotient.reverse();
    trim(&mut quotient);
    trim(&mut rem);
    (quotient, rem)
}

/// Largest `q` in `[1, BASE)` with `q * divisor <= rem`. Requires `rem >= divisor`.
fn quotient_digit(rem: &[Limb], divisor: &[Limb]) -> Limb {
    let (mut lo, mut hi) = (1, BASE);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if cmp(&mul_limb(divisor, mid), rem) == Ordering::Greater {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    lo
}

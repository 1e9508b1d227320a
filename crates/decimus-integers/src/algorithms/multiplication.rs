//! Multiplication of magnitudes.
//!
//! Small products use the quadratic schoolbook method. Once the number of
//! limb pairs reaches [`KARATSUBA_THRESHOLD`], the Karatsuba split trades one
//! of the four half-size products for a few additions, giving O(n^1.58).

use super::{
    add, add_assign_at, split_wide, sub_assign, trimmed, DoubleLimb, Limb, KARATSUBA_THRESHOLD,
};

/// Multiplies two magnitudes, choosing the algorithm by size.
#[must_use]
pub fn mul(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let a = trimmed(a);
    let b = trimmed(b);
    if a.is_empty() || b.is_empty() {
        return vec![0];
    }

    if a.len() * b.len() < KARATSUBA_THRESHOLD {
        schoolbook(a, b)
    } else {
        karatsuba(a, b)
    }
}

/// Multiplies a magnitude by a single limb.
#[must_use]
pub fn mul_limb(a: &[Limb], m: Limb) -> Vec<Limb> {
    schoolbook(a, &[m])
}

/// Schoolbook multiplication: O(n*m).
///
/// The result has exactly `a.len() + b.len()` limbs, untrimmed.
#[must_use]
pub fn schoolbook(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let mut out = vec![0; a.len() + b.len()];

    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }

        // (BASE-1)^2 + 2*(BASE-1) still fits in 64 bits.
        let mut carry: DoubleLimb = 0;
        for (j, &y) in b.iter().enumerate() {
            let cur =
                DoubleLimb::from(x) * DoubleLimb::from(y) + DoubleLimb::from(out[i + j]) + carry;
            (out[i + j], carry) = split_wide(cur);
        }

        let mut k = i + b.len();
        while carry != 0 {
            let cur = DoubleLimb::from(out[k]) + carry;
            (out[k], carry) = split_wide(cur);
            k += 1;
        }
    }

    out
}

/// Karatsuba multiplication.
///
/// Both operands are treated as zero-padded to the same even length `2k`
/// and split as `a = a1*B^k + a0`. Sub-products go back through [`mul`], so
/// only this level is forced to use the split. The result has exactly
/// `a.len() + b.len()` limbs, untrimmed.
#[must_use]
pub fn karatsuba(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let half = (a.len().max(b.len()) + 1) / 2;

    let (a0, a1) = split(a, half);
    let (b0, b1) = split(b, half);

    let high = mul(a1, b1);
    let low = mul(a0, b0);

    // (a0 + a1)(b0 + b1) - a0*b0 - a1*b1 = a0*b1 + a1*b0
    let mut middle = mul(&add(a0, a1), &add(b0, b1));
    sub_assign(&mut middle, &low);
    sub_assign(&mut middle, &high);

    let mut out = vec![0; a.len() + b.len()];
    add_assign_at(&mut out, trimmed(&low), 0);
    add_assign_at(&mut out, trimmed(&middle), half);
    add_assign_at(&mut out, trimmed(&high), 2 * half);
    debug_assert_eq!(out.len(), a.len() + b.len());

    out
}

/// Splits at limb index `at`; a short operand gets an empty high half.
fn split(x: &[Limb], at: usize) -> (&[Limb], &[Limb]) {
    if x.len() <= at {
        (x, &[])
    } else {
        x.split_at(at)
    }
}

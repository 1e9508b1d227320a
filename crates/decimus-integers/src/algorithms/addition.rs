//! Magnitude addition and subtraction with carry and borrow propagation.

use std::cmp::Ordering;

use super::{cmp, trimmed, Limb, BASE};

/// Adds two magnitudes.
#[must_use]
pub fn add(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    out.extend_from_slice(long);
    add_assign_at(&mut out, short, 0);
    out
}

/// Adds `b * BASE^offset` into `acc`.
///
/// `acc` grows by one limb when a carry leaves its most significant limb.
pub fn add_assign_at(acc: &mut Vec<Limb>, b: &[Limb], offset: usize) {
    if acc.len() < offset + b.len() {
        acc.resize(offset + b.len(), 0);
    }

    let mut carry = 0;
    let mut i = offset;
    for &limb in b {
        let sum = acc[i] + limb + carry;
        if sum >= BASE {
            acc[i] = sum - BASE;
            carry = 1;
        } else {
            acc[i] = sum;
            carry = 0;
        }
        i += 1;
    }

    while carry != 0 {
        if i == acc.len() {
            acc.push(0);
        }
        let sum = acc[i] + carry;
        if sum >= BASE {
            acc[i] = sum - BASE;
        } else {
            acc[i] = sum;
            carry = 0;
        }
        i += 1;
    }
}

/// Subtracts `b` from `a`. Requires `a >= b`.
#[must_use]
pub fn sub(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let mut out = a.to_vec();
    sub_assign(&mut out, b);
    out
}

/// Subtracts `b` from `acc` in place. Requires `acc >= b`.
pub fn sub_assign(acc: &mut [Limb], b: &[Limb]) {
    debug_assert!(cmp(acc, b) != Ordering::Less, "magnitude underflow");
    let b = trimmed(b);

    let mut borrow = 0;
    let mut i = 0;
    for &limb in b {
        let take = limb + borrow;
        if acc[i] >= take {
            acc[i] -= take;
            borrow = 0;
        } else {
            acc[i] += BASE - take;
            borrow = 1;
        }
        i += 1;
    }

    while borrow != 0 {
        if acc[i] == 0 {
            acc[i] = BASE - 1;
        } else {
            acc[i] -= 1;
            borrow = 0;
        }
        i += 1;
    }
}

//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::collection::vec;
    use proptest::prelude::*;

    use crate::algorithms::{Limb, BASE};
    use crate::{gcd, gcd_fast, BigInt, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Multi-limb integers, biased towards the limb boundary values.
    fn big_int_with(max_limbs: usize) -> impl Strategy<Value = BigInt> {
        let limb = prop_oneof![
            Just(0 as Limb),
            Just(1 as Limb),
            Just(BASE - 1),
            0..BASE,
        ];
        (any::<bool>(), vec(limb, 1..=max_limbs))
            .prop_map(|(negative, limbs)| BigInt::from_limbs(limbs, !negative))
    }

    fn big_int() -> impl Strategy<Value = BigInt> {
        big_int_with(6)
    }

    fn non_zero_big_int() -> impl Strategy<Value = BigInt> {
        big_int().prop_filter("non-zero divisor", BigInt::is_nonzero)
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (big_int_with(3), non_zero_big_int()).prop_map(|(n, d)| Rational::new(n, d))
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (big_int_with(3).prop_filter("non-zero numerator", BigInt::is_nonzero), non_zero_big_int())
            .prop_map(|(n, d)| Rational::new(n, d))
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in big_int(), b in big_int()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn integer_add_associative(a in big_int(), b in big_int(), c in big_int()) {
            prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        }

        // Up to 20x20 limbs, so the dispatcher also picks Karatsuba.

        #[test]
        fn integer_mul_commutative(a in big_int_with(20), b in big_int_with(20)) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn integer_mul_associative(a in big_int_with(20), b in big_int_with(20), c in big_int()) {
            prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
        }

        #[test]
        fn integer_distributive(a in big_int(), b in big_int(), c in big_int()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn integer_identities(a in big_int()) {
            prop_assert_eq!(&a + &(-&a), BigInt::zero());
            prop_assert_eq!(&a - &a, BigInt::zero());
            prop_assert_eq!(&a * &BigInt::one(), a.clone());
            prop_assert!((&a * &BigInt::zero()).is_zero());
            prop_assert!(!(&a * &BigInt::zero()).is_negative());
        }

        #[test]
        fn integer_matches_i64(a in small_int(), b in small_int()) {
            let (x, y) = (BigInt::new(a), BigInt::new(b));
            prop_assert_eq!((&x + &y).to_i64(), Some(a + b));
            prop_assert_eq!((&x - &y).to_i64(), Some(a - b));
            prop_assert_eq!((&x * &y).to_i64(), Some(a * b));
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        }

        #[test]
        fn integer_division_matches_i64(a in -(1i64 << 62)..(1i64 << 62), b in non_zero_int()) {
            let (q, r) = BigInt::new(a).div_rem(&BigInt::new(b)).unwrap();
            prop_assert_eq!(q.to_i64(), Some(a / b));
            prop_assert_eq!(r.to_i64(), Some(a % b));
        }

        // Division identity

        #[test]
        fn division_identity(a in big_int_with(8), b in non_zero_big_int()) {
            let q = &a / &b;
            let r = &a % &b;
            prop_assert_eq!(&q * &b + &r, a.clone());
            prop_assert!(r.abs() < b.abs());
            prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
        }

        // Schoolbook and Karatsuba must agree

        #[test]
        fn karatsuba_matches_schoolbook(a in big_int_with(40), b in big_int_with(40)) {
            prop_assert_eq!(a.mul_karatsuba(&b), a.mul_schoolbook(&b));
        }

        // Text round trip

        #[test]
        fn display_parse_round_trip(a in big_int_with(10)) {
            let parsed: BigInt = a.to_string().parse().unwrap();
            prop_assert_eq!(parsed, a);
        }

        #[test]
        fn digit_strings_round_trip(s in "-?[1-9][0-9]{0,80}") {
            let parsed: BigInt = s.parse().unwrap();
            prop_assert_eq!(parsed.to_string(), s);
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_big_int(), b in non_zero_big_int()) {
            let g = gcd(&a, &b);
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
            prop_assert!(!g.is_negative());
        }

        #[test]
        fn gcd_commutative(a in big_int(), b in big_int()) {
            prop_assert_eq!(gcd(&a, &b), gcd(&b, &a));
        }

        #[test]
        fn gcd_fast_agrees(a in big_int_with(4), b in big_int_with(4)) {
            prop_assert_eq!(gcd_fast(&a, &b), gcd(&a, &b));
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn rational_recip_cancels(a in non_zero_rational()) {
            let inv = a.recip();
            prop_assert_eq!(inv.recip(), a.clone());
            prop_assert!((&a * &inv).is_one());
            prop_assert!((&a / &a).is_one());
        }

        #[test]
        fn rational_stays_reduced(a in rational(), b in rational()) {
            let mut results = vec![&a + &b, &a - &b, &a * &b];
            if !b.is_zero() {
                results.push(&a / &b);
            }
            for r in results {
                prop_assert!(!r.denominator().is_negative());
                prop_assert!(r.denominator().is_nonzero());
                prop_assert!(gcd(r.numerator(), r.denominator()).is_one());
            }
        }

        #[test]
        fn rational_order_matches_cross_products(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            // Cross products are exact in i64 at this size.
            let lhs = num_a * den_b * den_a.signum() * den_b.signum();
            let rhs = num_b * den_a * den_a.signum() * den_b.signum();
            prop_assert_eq!(a.cmp(&b), lhs.cmp(&rhs));
        }
    }
}

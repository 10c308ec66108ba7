use bigint_cow::BigInt;
use proptest::prelude::*;

fn bigint_with(max_limbs: usize) -> impl Strategy<Value = BigInt> {
    (any::<bool>(), prop::collection::vec(any::<u32>(), 0..max_limbs))
        .prop_map(|(negative, limbs)| BigInt::from_limbs(negative, &limbs))
}

fn bigint() -> impl Strategy<Value = BigInt> {
    bigint_with(12)
}

/// Long enough to reach the Karatsuba paths.
fn wide_bigint() -> impl Strategy<Value = BigInt> {
    bigint_with(90)
}

proptest! {
    #[test]
    fn add_then_sub(a in bigint(), b in bigint()) {
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn add_commutes(a in bigint(), b in bigint()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn mul_then_div(a in wide_bigint(), b in wide_bigint()) {
        prop_assume!(!b.is_zero());
        prop_assert_eq!(&(&a * &b) / &b, a);
    }

    #[test]
    fn mul_distributes(a in wide_bigint(), b in wide_bigint(), c in wide_bigint()) {
        prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
    }

    #[test]
    fn div_rem_identity(a in wide_bigint(), b in bigint()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert!(r.abs() < b.abs());
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
        prop_assert_eq!(&q * &b + &r, a.clone());
        prop_assert_eq!(&a / &b, q);
        prop_assert_eq!(&a % &b, r);
    }

    #[test]
    fn double_not(a in bigint()) {
        prop_assert_eq!(!!a.clone(), a);
    }

    #[test]
    fn not_is_negated_successor(a in bigint()) {
        prop_assert_eq!(!&a, -(&a + 1u32));
    }

    #[test]
    fn bitop_identities(a in bigint()) {
        prop_assert_eq!(&a & &a, a.clone());
        prop_assert_eq!(&a | &BigInt::new(), a.clone());
        prop_assert!((&a ^ &a).is_zero());
    }

    #[test]
    fn shl_then_shr(a in bigint(), n in 0usize..300) {
        let a = a.abs();
        prop_assert_eq!(&(&a << n) >> n, a);
    }

    #[test]
    fn shl_composes(a in bigint(), m in 0u32..100, n in 0u32..100) {
        prop_assert_eq!(&(&a << m) << n, &a << (m + n));
    }

    #[test]
    fn shl_is_mul_by_power_of_two(a in bigint(), n in 0u32..100) {
        prop_assert_eq!(&a << n, &a * &(BigInt::from(1) << n));
    }

    #[test]
    fn decimal_round_trip(a in wide_bigint()) {
        let s = a.to_string();
        prop_assert_eq!(s.parse::<BigInt>().unwrap(), a);
    }

    #[test]
    fn order_matches_difference(a in bigint(), b in bigint()) {
        prop_assert_eq!(a < b, (&b - &a).is_positive());
    }

    #[test]
    fn arithmetic_matches_i128(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        let (a, b) = (i128::from(a), i128::from(b));
        prop_assert_eq!(&x + &y, BigInt::from(a + b));
        prop_assert_eq!(&x - &y, BigInt::from(a - b));
        prop_assert_eq!(&x * &y, BigInt::from(a * b));
        if b != 0 {
            prop_assert_eq!(&x / &y, BigInt::from(a / b));
            prop_assert_eq!(&x % &y, BigInt::from(a % b));
        }
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
    }

    #[test]
    fn bits_match_i64(a in any::<i64>(), b in any::<i64>(), n in 0u32..32) {
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        prop_assert_eq!(&x & &y, BigInt::from(a & b));
        prop_assert_eq!(&x | &y, BigInt::from(a | b));
        prop_assert_eq!(&x ^ &y, BigInt::from(a ^ b));
        prop_assert_eq!(!&x, BigInt::from(!a));
        prop_assert_eq!(&x >> n, BigInt::from(a >> n));
    }
}

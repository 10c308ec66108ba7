use bigint_cow::BigInt;

// The top two limbs of the window over the divisor's top limb overshoot the
// true quotient digit, and the scaled estimate has to be clamped and then
// corrected downward.
#[test]
fn test() {
    let a = BigInt::from_limbs(false, &[0, u32::MAX, 0x8000_0000]);
    let b = BigInt::from_limbs(false, &[u32::MAX, 0x8000_0000]);
    let (q, r) = a.div_rem(&b).unwrap();
    assert!(!r.is_negative());
    assert!(r < b);
    assert_eq!(&q * &b + &r, a);

    let a = BigInt::from_limbs(false, &[u32::MAX, u32::MAX, u32::MAX, 0x7FFF_FFFF]);
    let b = BigInt::from_limbs(false, &[1, 0, 0x8000_0000]);
    let (q, r) = a.div_rem(&b).unwrap();
    assert!(r < b);
    assert_eq!(&q * &b + &r, a);
}

use bigint_cow::BigInt;

// A negative value whose magnitude shifts all the way to zero floors to -1
// rather than collapsing to zero.
#[test]
fn test() {
    assert_eq!(BigInt::from(-1) >> 1u32, BigInt::from(-1));
    assert_eq!(BigInt::from(-(1i64 << 32)) >> 33u32, BigInt::from(-1));
    assert_eq!(BigInt::from(-(1i64 << 32)) >> 32u32, BigInt::from(-1));
    assert_eq!(BigInt::from(-(1i64 << 32)) >> 31u32, BigInt::from(-2));
}

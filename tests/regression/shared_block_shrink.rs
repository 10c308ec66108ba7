use bigint_cow::BigInt;

// Subtraction that shrinks a heap-backed clone must not truncate the block
// still held by the original.
#[test]
fn test() {
    let a = BigInt::from(1) << 200u32;
    let mut b = a.clone();
    b -= &a;
    assert!(b.is_zero());
    assert_eq!(a.bits(), 201);

    let mut c = a.clone();
    c >>= 190u32;
    assert_eq!(c, BigInt::from(1024));
    assert_eq!(a, BigInt::from(1) << 200u32);
}

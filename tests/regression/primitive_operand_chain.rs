use bigint_cow::BigInt;

// A suffixed primitive operand picks one impl, so the result can feed a
// method call or a unary operator directly.
#[test]
fn test() {
    let x: BigInt = "123456789012345678901234567890".parse().unwrap();
    assert_eq!((&x * 2u32).to_string(), "246913578024691357802469135780");
    assert_eq!((&x * -2i64).to_string(), "-246913578024691357802469135780");
    assert_eq!(-(&x + 1u32), !&x);
    assert!((&x - &x + 0u64).is_zero());
}

#![cfg(feature = "serde")]

use bigint_cow::BigInt;
use serde_derive::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Balance {
    account: String,
    amount: BigInt,
}

#[test]
fn test_serialize_as_string() {
    let x: BigInt = "-123456789012345678901234567890".parse().unwrap();
    assert_eq!(
        serde_json::to_string(&x).unwrap(),
        "\"-123456789012345678901234567890\""
    );
    assert_eq!(serde_json::to_string(&BigInt::new()).unwrap(), "\"0\"");
}

#[test]
fn test_deserialize_string() {
    let x: BigInt = serde_json::from_str("\"340282366920938463463374607431768211456\"").unwrap();
    assert_eq!(x, BigInt::from(u128::MAX) + 1u32);
}

#[test]
fn test_deserialize_native_integers() {
    let x: BigInt = serde_json::from_str("-9223372036854775808").unwrap();
    assert_eq!(x, BigInt::from(i64::MIN));
    let y: BigInt = serde_json::from_str("18446744073709551615").unwrap();
    assert_eq!(y, BigInt::from(u64::MAX));
    let z: BigInt = serde_json::from_str("0").unwrap();
    assert!(z.is_zero());
}

#[test]
fn test_deserialize_rejects_garbage() {
    let err = serde_json::from_str::<BigInt>("\"12a\"").unwrap_err();
    assert!(err.to_string().contains("12a"), "{}", err);
    assert!(serde_json::from_str::<BigInt>("1.5").is_err());
    assert!(serde_json::from_str::<BigInt>("null").is_err());
    assert!(serde_json::from_str::<BigInt>("\"\"").is_err());
}

#[test]
fn test_struct_round_trip() {
    let balance = Balance {
        account: "treasury".to_owned(),
        amount: BigInt::from(1) << 200u32,
    };
    let j = serde_json::to_string(&balance).unwrap();
    assert_eq!(
        j,
        "{\"account\":\"treasury\",\"amount\":\"1606938044258990275541962092341162602522202993782792835301376\"}"
    );
    let back: Balance = serde_json::from_str(&j).unwrap();
    assert_eq!(back, balance);
}

#![no_main]
use bigint_cow::BigInt;
use libfuzzer_sys::fuzz_target;

fn limbs(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks(4)
        .map(|c| c.iter().rev().fold(0, |acc, &b| (acc << 8) | u32::from(b)))
        .collect()
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let split = 1 + usize::from(data[0]) % (data.len() - 1);
    let (lo, hi) = data[1..].split_at(split - 1);
    let a = BigInt::from_limbs(data[0] & 1 == 1, &limbs(lo));
    let b = BigInt::from_limbs(data[0] & 2 == 2, &limbs(hi));

    assert_eq!(&(&a + &b) - &b, a);
    assert_eq!(!!a.clone(), a);
    if !b.is_zero() {
        let (q, r) = a.div_rem(&b).unwrap();
        assert!(r.abs() < b.abs());
        assert_eq!(&q * &b + &r, a);
    }
});

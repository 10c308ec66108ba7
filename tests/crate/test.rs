#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};
use bigint_cow::BigInt;

pub fn double(decimal: &str) -> Option<String> {
    let x: BigInt = decimal.parse().ok()?;
    Some((x << 1u32).to_string())
}

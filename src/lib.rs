//! Arbitrary-precision signed integers on a copy-on-write limb store.
//!
//! [`BigInt`] stores a sign flag and a magnitude in little-endian base-2<sup>32</sup>
//! limbs. The limbs live in a [`Digits`] store, which keeps short magnitudes
//! inline and longer ones in a reference-counted heap block. Cloning a
//! heap-backed value only bumps the reference count; the first write to
//! either copy duplicates the block.
//!
//! ```
//! use bigint_cow::BigInt;
//!
//! let a: BigInt = "123456789012345678901234567890".parse().unwrap();
//! let b = &a * &BigInt::from(2);
//! assert_eq!(b.to_string(), "246913578024691357802469135780");
//!
//! let (q, r) = b.div_rem(&BigInt::from(7)).unwrap();
//! assert_eq!(q * 7u32 + r, b);
//! ```
//!
//! # Operators
//!
//! `+ - * / % & | ^` are implemented for every owned/borrowed operand
//! combination, together with their `*Assign` forms. Shifts accept `u32`,
//! `usize`, `i32` and `i64` counts. Bitwise operators behave as if the value
//! were stored in infinitely sign-extended two's complement.
//!
//! Like the primitive integer operators, `/` and `%` panic on a zero divisor,
//! and `<<`/`>>` panic on a negative count. Use [`BigInt::checked_div`],
//! [`BigInt::checked_rem`], [`BigInt::div_rem`], [`BigInt::checked_shl`] and
//! [`BigInt::checked_shr`] to receive an [`Error`] instead.
//!
//! # Threads
//!
//! Sharing between copies is tracked with [`Rc`](alloc::rc::Rc), so neither
//! type is `Send` or `Sync`.

#![doc(html_root_url = "https://docs.rs/bigint_cow/0.1.0")]
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(
    clippy::len_without_is_empty,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

extern crate alloc;

/// Facade around the core features for name mangling.
pub(crate) mod lib {
    pub(crate) use core::{cmp, fmt, hash, mem, ops, result, slice, str};

    pub(crate) use alloc::boxed::Box;
    pub(crate) use alloc::rc::Rc;
    pub(crate) use alloc::string::String;
    pub(crate) use alloc::vec::Vec;
}

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

mod bigint;
mod bits;
mod convert;
pub mod digits;
pub mod error;
mod math;
mod ops;
#[cfg(feature = "serde")]
mod ser;

pub use crate::bigint::BigInt;
pub use crate::digits::Digits;
pub use crate::error::{Error, Result};
pub use crate::math::{Limb, KARATSUBA_CUTOFF};

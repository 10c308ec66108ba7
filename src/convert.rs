//! Conversions between `BigInt`, machine integers and decimal text.

use crate::bigint::BigInt;
use crate::digits::Digits;
use crate::error::{Error, ErrorCode, Result};
use crate::lib::fmt::{self, Debug, Display};
use crate::lib::str::FromStr;
use crate::lib::{String, Vec};
use crate::math::{small, Limb};

/// Decimal digits that always fit in one limb.
const DIGITS_PER_LIMB: usize = 9;

/// Powers of 10 for every chunk length up to `DIGITS_PER_LIMB`.
const POW10: [Limb; DIGITS_PER_LIMB + 1] = [
    1,
    10,
    100,
    1000,
    10000,
    100000,
    1000000,
    10000000,
    100000000,
    1000000000,
];

// MACHINE INTEGERS

impl BigInt {
    fn from_magnitude(negative: bool, mut n: u128) -> Self {
        let mut digits = Digits::new();
        loop {
            digits.push(n as Limb);
            n >>= Limb::BITS;
            if n == 0 {
                break;
            }
        }
        BigInt::from_parts(negative, digits)
    }
}

macro_rules! from_unsigned {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(n: $ty) -> Self {
                    BigInt::from_magnitude(false, n as u128)
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(n: $ty) -> Self {
                    BigInt::from_magnitude(n < 0, n.unsigned_abs() as u128)
                }
            }
        )*
    };
}

from_unsigned! {
    u8 u16 u32 u64 u128 usize
}

from_signed! {
    i8 i16 i32 i64 i128 isize
}

// PARSE

impl BigInt {
    /// Parse `[-]digit+` into a value.
    ///
    /// The digits accumulate left to right as `acc * 10 + digit`, a whole
    /// limb's worth of digits at a time. `"-0"` is zero.
    ///
    /// ```
    /// use bigint_cow::BigInt;
    /// use bigint_cow::error::ErrorCode;
    ///
    /// let x = BigInt::parse_decimal("-18446744073709551616").unwrap();
    /// assert_eq!(x.limbs(), &[0, 0, 1]);
    ///
    /// let err = BigInt::parse_decimal("12a4").unwrap_err();
    /// assert_eq!(*err.code(), ErrorCode::InvalidDigit('a', 2));
    /// ```
    pub fn parse_decimal(s: &str) -> Result<BigInt> {
        let (negative, start) = match s.strip_prefix('-') {
            Some(_) => (true, 1),
            None => (false, 0),
        };
        let body = &s[start..];
        if body.is_empty() {
            return Err(Error::new(ErrorCode::EmptyInput));
        }
        if let Some((pos, ch)) = body.char_indices().find(|&(_, ch)| !ch.is_ascii_digit()) {
            return Err(Error::new(ErrorCode::InvalidDigit(ch, start + pos)));
        }

        let mut digits = Digits::new();
        for chunk in body.as_bytes().chunks(DIGITS_PER_LIMB) {
            let value = chunk
                .iter()
                .fold(0, |acc: Limb, &b| acc * 10 + Limb::from(b - b'0'));
            small::imul(&mut digits, POW10[chunk.len()]);
            small::iadd(&mut digits, value);
        }
        Ok(BigInt::from_parts(negative, digits))
    }

    /// Decimal digits of the magnitude, most significant first.
    fn magnitude_to_decimal(&self) -> String {
        // Dividing a clone diverges it from `self` on the first write.
        let mut x = self.digits.clone();
        let mut reversed = Vec::new();
        loop {
            let mut rem = small::idiv(&mut x, POW10[DIGITS_PER_LIMB]);
            for _ in 0..DIGITS_PER_LIMB {
                reversed.push(b'0' + (rem % 10) as u8);
                rem /= 10;
                // The leading chunk is not zero padded.
                if x.is_empty() && rem == 0 {
                    break;
                }
            }
            if x.is_empty() {
                break;
            }
        }

        let mut out = String::with_capacity(reversed.len());
        out.extend(reversed.iter().rev().map(|&b| char::from(b)));
        out
    }
}

impl FromStr for BigInt {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<BigInt> {
        BigInt::parse_decimal(s)
    }
}

// FORMAT

impl Display for BigInt {
    /// Decimal form. Width, fill, alignment, `+` and `0` flags behave as for
    /// the primitive integers.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = self.magnitude_to_decimal();
        f.pad_integral(!self.negative, "", &digits)
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

//! Big integer type definition.

use crate::digits::Digits;
use crate::error::{Error, Result};
use crate::lib::cmp::Ordering;
use crate::math::{self, large, small, Limb};

/// An arbitrary-precision signed integer.
///
/// The value is a sign flag plus a magnitude in little-endian base-2<sup>32</sup>
/// limbs. The magnitude never carries a leading zero limb, except that zero
/// is exactly one zero limb, and zero is never negative.
///
/// Cloning is cheap once the magnitude has spilled to the heap: the copy
/// shares the limb block until either side is written to.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) negative: bool,
    pub(crate) digits: Digits,
}

impl BigInt {
    /// Zero.
    pub fn new() -> Self {
        let mut digits = Digits::new();
        digits.push(0);
        BigInt {
            negative: false,
            digits,
        }
    }

    /// Build a value from a sign and a little-endian magnitude.
    ///
    /// Leading zero limbs are stripped, and a zero magnitude is never
    /// negative.
    ///
    /// ```
    /// use bigint_cow::BigInt;
    ///
    /// let x = BigInt::from_limbs(true, &[0, 1, 0]);
    /// assert_eq!(x.to_string(), "-4294967296");
    /// assert_eq!(x.limbs(), &[0, 1]);
    /// ```
    pub fn from_limbs(negative: bool, limbs: &[Limb]) -> Self {
        BigInt::from_parts(negative, Digits::from(limbs))
    }

    pub(crate) fn from_parts(negative: bool, digits: Digits) -> Self {
        let mut x = BigInt { negative, digits };
        x.normalize();
        x
    }

    /// Restore the representation invariant after a kernel operation.
    pub(crate) fn normalize(&mut self) {
        small::normalize(&mut self.digits);
        if self.digits.is_empty() {
            self.digits.push(0);
            self.negative = false;
        }
    }

    /// The magnitude with the zero limb of zero stripped, the form the
    /// kernel works on.
    #[inline]
    pub(crate) fn magnitude(&self) -> &[Limb] {
        math::trim(&self.digits)
    }

    /// The little-endian magnitude limbs. Zero is `[0]`.
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.digits
    }

    /// Returns true if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }

    /// Returns true if the value is less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true if the value is greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// Absolute value.
    pub fn abs(&self) -> BigInt {
        BigInt {
            negative: false,
            digits: self.digits.clone(),
        }
    }

    /// `-1`, `0` or `1` according to the sign.
    pub fn signum(&self) -> BigInt {
        if self.is_zero() {
            BigInt::new()
        } else if self.negative {
            BigInt::from(-1i32)
        } else {
            BigInt::from(1u32)
        }
    }

    /// Number of bits needed to represent the magnitude. Zero has no bits.
    pub fn bits(&self) -> usize {
        small::bit_length(&self.digits)
    }

    /// Unary plus: a copy of the value.
    pub fn plus(&self) -> BigInt {
        self.clone()
    }

    // ADDITION

    /// `self += other` when `subtract` is false, `self -= other` otherwise.
    pub(crate) fn add_signed(&mut self, other: &BigInt, subtract: bool) {
        let other_negative = other.negative != subtract;
        if self.negative == other_negative {
            large::iadd(&mut self.digits, other.magnitude());
        } else {
            match large::compare(self.magnitude(), other.magnitude()) {
                Ordering::Equal => {
                    *self = BigInt::new();
                    return;
                }
                Ordering::Greater => large::isub(&mut self.digits, other.magnitude()),
                Ordering::Less => {
                    self.digits = large::sub(other.magnitude(), self.magnitude());
                    self.negative = other_negative;
                }
            }
        }
        self.normalize();
    }

    pub(crate) fn add_limb(&mut self, limb: Limb) {
        if self.negative {
            if self.digits.len() == 1 && self.digits[0] <= limb {
                self.digits[0] = limb - self.digits[0];
                self.negative = false;
            } else {
                small::isub(&mut self.digits, limb);
            }
        } else {
            small::iadd(&mut self.digits, limb);
        }
        self.normalize();
    }

    pub(crate) fn sub_limb(&mut self, limb: Limb) {
        self.negative = !self.negative;
        self.add_limb(limb);
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }

    // MULTIPLICATION

    pub(crate) fn mul_assign_ref(&mut self, other: &BigInt) {
        large::imul(&mut self.digits, other.magnitude());
        self.negative ^= other.negative;
        self.normalize();
    }

    // DIVISION

    /// Quotient truncated toward zero, or an error for a zero divisor.
    ///
    /// ```
    /// use bigint_cow::BigInt;
    ///
    /// let q = BigInt::from(-7).checked_div(&BigInt::from(2)).unwrap();
    /// assert_eq!(q, BigInt::from(-3));
    /// assert!(BigInt::from(1).checked_div(&BigInt::new()).is_err());
    /// ```
    pub fn checked_div(&self, other: &BigInt) -> Result<BigInt> {
        if other.is_zero() {
            return Err(Error::division_by_zero());
        }
        let digits = large::div(self.magnitude(), other.magnitude());
        Ok(BigInt::from_parts(self.negative != other.negative, digits))
    }

    /// Remainder whose sign follows the dividend, or an error for a zero
    /// divisor.
    pub fn checked_rem(&self, other: &BigInt) -> Result<BigInt> {
        self.div_rem(other).map(|(_, r)| r)
    }

    /// Quotient and remainder together, with `q * other + r == self`.
    pub fn div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt)> {
        let q = self.checked_div(other)?;
        let mut r = self.clone();
        let mut product = q.clone();
        product.mul_assign_ref(other);
        r.add_signed(&product, true);
        Ok((q, r))
    }

    // INCREMENT

    /// Add one in place, returning the updated value.
    pub fn increment(&mut self) -> &mut Self {
        self.add_limb(1);
        self
    }

    /// Subtract one in place, returning the updated value.
    pub fn decrement(&mut self) -> &mut Self {
        self.sub_limb(1);
        self
    }

    /// Add one in place, returning the value from before.
    pub fn post_increment(&mut self) -> BigInt {
        let old = self.clone();
        self.increment();
        old
    }

    /// Subtract one in place, returning the value from before.
    pub fn post_decrement(&mut self) -> BigInt {
        let old = self.clone();
        self.decrement();
        old
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::new()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => large::compare(self.magnitude(), other.magnitude()),
            (true, true) => large::compare(other.magnitude(), self.magnitude()),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

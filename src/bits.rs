//! Two's-complement bitwise operators and shifts on a sign-magnitude value.
//!
//! The bitwise operators behave as if both operands were stored in an
//! infinitely sign-extended two's-complement form. Each operand is widened
//! to one limb more than the longer magnitude, which is enough room for the
//! sign bit of either; negative operands are mapped into two's complement,
//! combined limb by limb, and a negative result is mapped back.

use crate::bigint::BigInt;
use crate::digits::Digits;
use crate::error::{Error, Result};
use crate::lib::cmp;
use crate::math::{large, small, Limb};

const BITS: usize = Limb::BITS as usize;

#[derive(Copy, Clone, Debug)]
pub(crate) enum BitOp {
    And,
    Or,
    Xor,
}

impl BitOp {
    #[inline]
    fn limb(self, x: Limb, y: Limb) -> Limb {
        match self {
            BitOp::And => x & y,
            BitOp::Or => x | y,
            BitOp::Xor => x ^ y,
        }
    }

    /// The sign of the result, which is the sign bit of the combined limbs.
    #[inline]
    fn sign(self, x: bool, y: bool) -> bool {
        match self {
            BitOp::And => x & y,
            BitOp::Or => x | y,
            BitOp::Xor => x ^ y,
        }
    }
}

/// Copy a magnitude into `width` limbs, in two's complement if negative.
fn complement_into(negative: bool, limbs: &[Limb], width: usize) -> Digits {
    let mut out = Digits::from(limbs);
    out.resize(width);
    if negative {
        large::twos_complement(out.as_mut_slice());
    }
    out
}

/// Convert a signed shift count, failing for a negative one.
pub(crate) fn shift_count(count: i64) -> Result<usize> {
    if count < 0 {
        return Err(Error::negative_shift(count));
    }
    // A count beyond the address space cannot be honored on the left and
    // clears everything on the right.
    Ok(usize::try_from(count).unwrap_or(usize::MAX))
}

impl BigInt {
    pub(crate) fn bitop_assign(&mut self, other: &BigInt, op: BitOp) {
        let width = cmp::max(self.digits.len(), other.digits.len()) + 1;
        self.digits.resize(width);
        if self.negative {
            large::twos_complement(self.digits.as_mut_slice());
        }
        let rhs = complement_into(other.negative, &other.digits, width);

        for (x, &y) in self.digits.iter_mut().zip(rhs.iter()) {
            *x = op.limb(*x, y);
        }

        self.negative = op.sign(self.negative, other.negative);
        if self.negative {
            large::twos_complement(self.digits.as_mut_slice());
        }
        self.normalize();
    }

    /// Bitwise complement, which is `-(self + 1)`.
    pub(crate) fn not_assign(&mut self) {
        self.add_limb(1);
        self.negate();
    }

    pub(crate) fn negate(&mut self) {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }

    pub(crate) fn shl_assign_bits(&mut self, n: usize) {
        if self.is_zero() {
            return;
        }
        small::ishl(&mut self.digits, n);
        self.normalize();
    }

    /// Floor division by `2^n`.
    ///
    /// A count that meets or exceeds the limb width of the value yields
    /// zero regardless of sign.
    pub(crate) fn shr_assign_bits(&mut self, n: usize) {
        if n >= self.digits.len().saturating_mul(BITS) {
            *self = BigInt::new();
            return;
        }

        let negative = self.negative;
        let lost = small::ishr(&mut self.digits, n);
        self.normalize();
        if negative && lost {
            // Round toward negative infinity: one further from zero.
            self.negative = true;
            small::iadd(&mut self.digits, 1);
            self.normalize();
        }
    }

    /// Left shift, or an error for a negative count.
    ///
    /// ```
    /// use bigint_cow::BigInt;
    ///
    /// let x = BigInt::from(5).checked_shl(70).unwrap();
    /// assert_eq!(x.to_string(), "5902958103587056517120");
    /// assert!(BigInt::from(5).checked_shl(-1).is_err());
    /// ```
    pub fn checked_shl(&self, count: i64) -> Result<BigInt> {
        let n = shift_count(count)?;
        let mut x = self.clone();
        x.shl_assign_bits(n);
        Ok(x)
    }

    /// Arithmetic right shift rounding toward negative infinity, or an error
    /// for a negative count.
    ///
    /// A count at or past the value's limb width, `limbs().len() * 32`, gives
    /// zero for either sign, so a negative value does not saturate at `-1`.
    ///
    /// ```
    /// use bigint_cow::BigInt;
    ///
    /// let x = BigInt::from(-1);
    /// assert_eq!(x.checked_shr(31).unwrap(), BigInt::from(-1));
    /// assert!(x.checked_shr(32).unwrap().is_zero());
    /// ```
    pub fn checked_shr(&self, count: i64) -> Result<BigInt> {
        let n = shift_count(count)?;
        let mut x = self.clone();
        x.shr_assign_bits(n);
        Ok(x)
    }
}

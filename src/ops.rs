//! Operator trait impls for `BigInt`.
//!
//! Every binary operator is implemented once as `*Assign<&BigInt>`, and the
//! remaining owned and borrowed combinations forward to it. An owned left
//! operand reuses its storage; a borrowed one is cloned, which only bumps a
//! reference count for heap-backed values.

use crate::bigint::BigInt;
use crate::bits::{self, BitOp};
use crate::error::Result;
use crate::lib::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

/// Primitive integer operators panic instead of returning an error, so the
/// `BigInt` operators do the same.
#[track_caller]
fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

impl<'a> AddAssign<&'a BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, other: &BigInt) {
        self.add_signed(other, false);
    }
}

impl<'a> SubAssign<&'a BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, other: &BigInt) {
        self.add_signed(other, true);
    }
}

impl<'a> MulAssign<&'a BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, other: &BigInt) {
        self.mul_assign_ref(other);
    }
}

impl<'a> DivAssign<&'a BigInt> for BigInt {
    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[track_caller]
    fn div_assign(&mut self, other: &BigInt) {
        *self = or_panic(self.checked_div(other));
    }
}

impl<'a> RemAssign<&'a BigInt> for BigInt {
    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[track_caller]
    fn rem_assign(&mut self, other: &BigInt) {
        *self = or_panic(self.checked_rem(other));
    }
}

impl<'a> BitAndAssign<&'a BigInt> for BigInt {
    #[inline]
    fn bitand_assign(&mut self, other: &BigInt) {
        self.bitop_assign(other, BitOp::And);
    }
}

impl<'a> BitOrAssign<&'a BigInt> for BigInt {
    #[inline]
    fn bitor_assign(&mut self, other: &BigInt) {
        self.bitop_assign(other, BitOp::Or);
    }
}

impl<'a> BitXorAssign<&'a BigInt> for BigInt {
    #[inline]
    fn bitxor_assign(&mut self, other: &BigInt) {
        self.bitop_assign(other, BitOp::Xor);
    }
}

macro_rules! forward_binop {
    ($($imp:ident $method:ident $assign:ident $assign_method:ident)*) => {
        $(
            impl $assign<BigInt> for BigInt {
                #[inline]
                #[track_caller]
                fn $assign_method(&mut self, other: BigInt) {
                    <Self as $assign<&BigInt>>::$assign_method(self, &other);
                }
            }

            impl $imp<BigInt> for BigInt {
                type Output = BigInt;

                #[inline]
                #[track_caller]
                fn $method(mut self, other: BigInt) -> BigInt {
                    <Self as $assign<&BigInt>>::$assign_method(&mut self, &other);
                    self
                }
            }

            impl<'a> $imp<&'a BigInt> for BigInt {
                type Output = BigInt;

                #[inline]
                #[track_caller]
                fn $method(mut self, other: &BigInt) -> BigInt {
                    <Self as $assign<&BigInt>>::$assign_method(&mut self, other);
                    self
                }
            }

            impl<'a> $imp<BigInt> for &'a BigInt {
                type Output = BigInt;

                #[inline]
                #[track_caller]
                fn $method(self, other: BigInt) -> BigInt {
                    let mut x = self.clone();
                    <BigInt as $assign<&BigInt>>::$assign_method(&mut x, &other);
                    x
                }
            }

            impl<'a, 'b> $imp<&'b BigInt> for &'a BigInt {
                type Output = BigInt;

                #[inline]
                #[track_caller]
                fn $method(self, other: &BigInt) -> BigInt {
                    let mut x = self.clone();
                    <BigInt as $assign<&BigInt>>::$assign_method(&mut x, other);
                    x
                }
            }
        )*
    };
}

forward_binop! {
    Add add AddAssign add_assign
    Sub sub SubAssign sub_assign
    Mul mul MulAssign mul_assign
    Div div DivAssign div_assign
    Rem rem RemAssign rem_assign
    BitAnd bitand BitAndAssign bitand_assign
    BitOr bitor BitOrAssign bitor_assign
    BitXor bitxor BitXorAssign bitxor_assign
}

macro_rules! forward_primitive {
    ($([$($ty:ty)*], $imp:ident $method:ident $assign:ident $assign_method:ident)*) => {
        $($(
            impl $assign<$ty> for BigInt {
                #[inline]
                #[track_caller]
                fn $assign_method(&mut self, other: $ty) {
                    <Self as $assign<&BigInt>>::$assign_method(self, &BigInt::from(other));
                }
            }

            impl $imp<$ty> for BigInt {
                type Output = BigInt;

                #[inline]
                #[track_caller]
                fn $method(mut self, other: $ty) -> BigInt {
                    <Self as $assign<$ty>>::$assign_method(&mut self, other);
                    self
                }
            }

            impl<'a> $imp<$ty> for &'a BigInt {
                type Output = BigInt;

                #[inline]
                #[track_caller]
                fn $method(self, other: $ty) -> BigInt {
                    let mut x = self.clone();
                    <BigInt as $assign<$ty>>::$assign_method(&mut x, other);
                    x
                }
            }
        )*)*
    };
}

forward_primitive! {
    [u32 i32 u64 i64], Add add AddAssign add_assign
    [u32 i32 u64 i64], Sub sub SubAssign sub_assign
    [u32 i32 u64 i64], Mul mul MulAssign mul_assign
    [u32 i32 u64 i64], Div div DivAssign div_assign
    [u32 i32 u64 i64], Rem rem RemAssign rem_assign
}

// SHIFTS

/// A machine integer usable as a shift count.
trait ShiftCount: Copy {
    fn count(self) -> usize;
}

impl ShiftCount for usize {
    #[inline]
    fn count(self) -> usize {
        self
    }
}

impl ShiftCount for u32 {
    #[inline]
    fn count(self) -> usize {
        usize::try_from(self).unwrap_or(usize::MAX)
    }
}

impl ShiftCount for i32 {
    #[inline]
    #[track_caller]
    fn count(self) -> usize {
        or_panic(bits::shift_count(i64::from(self)))
    }
}

impl ShiftCount for i64 {
    #[inline]
    #[track_caller]
    fn count(self) -> usize {
        or_panic(bits::shift_count(self))
    }
}

macro_rules! shift_impls {
    ($($ty:ty)*) => {
        $(
            impl ShlAssign<$ty> for BigInt {
                /// # Panics
                ///
                /// Panics if the count is negative.
                #[inline]
                #[track_caller]
                fn shl_assign(&mut self, count: $ty) {
                    let n = count.count();
                    self.shl_assign_bits(n);
                }
            }

            impl ShrAssign<$ty> for BigInt {
                /// Same rounding as [`BigInt::checked_shr`], including zero for a
                /// count at or past the limb width.
                ///
                /// # Panics
                ///
                /// Panics if the count is negative.
                #[inline]
                #[track_caller]
                fn shr_assign(&mut self, count: $ty) {
                    let n = count.count();
                    self.shr_assign_bits(n);
                }
            }

            impl Shl<$ty> for BigInt {
                type Output = BigInt;

                #[inline]
                #[track_caller]
                fn shl(mut self, count: $ty) -> BigInt {
                    self <<= count;
                    self
                }
            }

            impl<'a> Shl<$ty> for &'a BigInt {
                type Output = BigInt;

                #[inline]
                #[track_caller]
                fn shl(self, count: $ty) -> BigInt {
                    let n = count.count();
                    let mut x = self.clone();
                    x.shl_assign_bits(n);
                    x
                }
            }

            impl Shr<$ty> for BigInt {
                type Output = BigInt;

                #[inline]
                #[track_caller]
                fn shr(mut self, count: $ty) -> BigInt {
                    self >>= count;
                    self
                }
            }

            impl<'a> Shr<$ty> for &'a BigInt {
                type Output = BigInt;

                #[inline]
                #[track_caller]
                fn shr(self, count: $ty) -> BigInt {
                    let n = count.count();
                    let mut x = self.clone();
                    x.shr_assign_bits(n);
                    x
                }
            }
        )*
    };
}

shift_impls! {
    u32 usize i32 i64
}

// UNARY

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        self.negate();
        self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl Not for BigInt {
    type Output = BigInt;

    #[inline]
    fn not(mut self) -> BigInt {
        self.not_assign();
        self
    }
}

impl<'a> Not for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn not(self) -> BigInt {
        !self.clone()
    }
}

//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the large integer
//! buffers, so for `[0, 1, 2, 3]`, `3` is the most significant limb,
//! and `0` is the least significant limb.
//!
//! Magnitudes handled here may carry leading zero limbs and may be empty
//! (the empty slice is zero). Results written to a [`Digits`] are
//! normalized, which strips every leading zero limb; the single-zero-limb
//! form of zero is a [`BigInt`](crate::BigInt) concern.

use crate::digits::Digits;
use crate::lib::cmp;

// ALIASES
// -------

/// Type for a single limb of the big integer.
///
/// A limb is analogous to a digit in base10, except, it stores 32-bit
/// numbers instead.
pub type Limb = u32;

/// Only used to form the 2-limb by 1-limb trial quotient in division.
type Wide = u64;

const BITS: usize = Limb::BITS as usize;
const HALF_BITS: u32 = Limb::BITS / 2;
const HALF_MASK: Limb = (1 << HALF_BITS) - 1;

/// Strip leading zero limbs from a slice.
#[inline]
pub(crate) fn trim(x: &[Limb]) -> &[Limb] {
    let len = x.len() - x.iter().rev().take_while(|&&l| l == 0).count();
    &x[..len]
}

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

pub(crate) mod scalar {
    use super::*;

    // ADDITION

    /// AddAssign two small integers and return if overflow happens.
    ///
    /// The sum wrapped exactly when it came out smaller than the old value.
    #[inline]
    pub fn iadd(x: &mut Limb, y: Limb) -> bool {
        let old = *x;
        *x = x.wrapping_add(y);
        *x < old
    }

    // SUBTRACTION

    /// SubAssign two small integers and return if underflow happens.
    #[inline]
    pub fn isub(x: &mut Limb, y: Limb) -> bool {
        let old = *x;
        *x = x.wrapping_sub(y);
        *x > old
    }

    // MULTIPLICATION

    /// Multiply two limbs into a double limb.
    ///
    /// Each limb is split into 16-bit halves so that every partial product
    /// fits in a single limb. Returns the (low, high) components.
    #[inline]
    pub fn mul(x: Limb, y: Limb) -> (Limb, Limb) {
        let (x1, x0) = (x >> HALF_BITS, x & HALF_MASK);
        let (y1, y0) = (y >> HALF_BITS, y & HALF_MASK);

        let mut lo = x0 * y0;
        let mut hi = x1 * y1;
        let mut mid = x1 * y0;
        let mid_carry = iadd(&mut mid, x0 * y1) as Limb;

        hi += (mid >> HALF_BITS) + (mid_carry << HALF_BITS);
        if iadd(&mut lo, mid << HALF_BITS) {
            hi += 1;
        }
        (lo, hi)
    }

    /// Multiply two limbs and add a carry limb.
    ///
    /// Cannot overflow the double limb, since
    /// `(B - 1) * (B - 1) + (B - 1) < B * B`.
    #[inline]
    pub fn mul_add(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
        let (mut lo, mut hi) = mul(x, y);
        if iadd(&mut lo, carry) {
            hi += 1;
        }
        (lo, hi)
    }

    // DIVISION

    /// Divide the double limb `hi:lo` by `d`, saturating at `Limb::MAX`.
    #[inline]
    pub fn div_wide(hi: Limb, lo: Limb, d: Limb) -> Limb {
        debug_assert!(d != 0);
        let n = (Wide::from(hi) << BITS) | Wide::from(lo);
        cmp::min(n / Wide::from(d), Wide::from(Limb::MAX)) as Limb
    }
}

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

pub(crate) mod small {
    use super::*;

    // ADDITION

    /// Implied AddAssign implementation for adding a small integer to bigint.
    ///
    /// Allows us to choose a start-index in x to store, to allow incrementing
    /// from a non-zero start.
    pub fn iadd_impl(x: &mut Digits, y: Limb, xstart: usize) {
        if x.len() <= xstart {
            x.resize(xstart);
            x.push(y);
        } else {
            // Initial add
            let mut carry = scalar::iadd(&mut x[xstart], y);

            // Increment until overflow stops occurring.
            let mut size = xstart + 1;
            while carry && size < x.len() {
                carry = scalar::iadd(&mut x[size], 1);
                size += 1;
            }

            // If we overflowed the buffer entirely, need to add 1 to the end
            // of the buffer.
            if carry {
                x.push(1);
            }
        }
    }

    /// AddAssign small integer to bigint.
    #[inline]
    pub fn iadd(x: &mut Digits, y: Limb) {
        iadd_impl(x, y, 0);
    }

    // SUBTRACTION

    /// SubAssign small integer to bigint.
    /// Does not do overflowing subtraction.
    pub fn isub(x: &mut Digits, y: Limb) {
        debug_assert!(!x.is_empty() && (x[0] >= y || x.len() > 1));

        // Initial subtraction
        let mut borrow = scalar::isub(&mut x[0], y);

        // Decrement until underflow stops occurring.
        let mut size = 1;
        while borrow && size < x.len() {
            borrow = scalar::isub(&mut x[size], 1);
            size += 1;
        }
        normalize(x);
    }

    // MULTIPLICATION

    /// MulAssign small integer to bigint.
    pub fn imul(x: &mut Digits, y: Limb) {
        // Multiply iteratively over all elements, adding the carry each time.
        let mut carry: Limb = 0;
        for xi in x.iter_mut() {
            let (lo, hi) = scalar::mul_add(*xi, y, carry);
            *xi = lo;
            carry = hi;
        }

        // Overflow of value, add to end.
        if carry != 0 {
            x.push(carry);
        }
    }

    /// Mul small integer to bigint.
    #[inline]
    pub fn mul(x: &[Limb], y: Limb) -> Digits {
        let mut z = Digits::from(x);
        imul(&mut z, y);
        z
    }

    // DIVISION

    /// DivAssign by a small integer, returning the remainder.
    pub fn idiv(x: &mut Digits, y: Limb) -> Limb {
        debug_assert!(y != 0);
        let y = Wide::from(y);
        let mut rem: Wide = 0;
        for xi in x.iter_mut().rev() {
            let n = (rem << BITS) | Wide::from(*xi);
            *xi = (n / y) as Limb;
            rem = n % y;
        }
        normalize(x);
        rem as Limb
    }

    // BIT LENGTH

    /// Get number of leading zero bits in the storage.
    #[inline]
    pub fn leading_zeros(x: &[Limb]) -> usize {
        match x.last() {
            Some(&top) => top.leading_zeros() as usize,
            None => 0,
        }
    }

    /// Calculate the bit-length of the big-integer.
    #[inline]
    pub fn bit_length(x: &[Limb]) -> usize {
        let x = trim(x);
        // Avoid overflowing, calculate via total number of bits
        // minus leading zero bits.
        let nlz = leading_zeros(x);
        BITS.checked_mul(x.len())
            .map(|v| v - nlz)
            .unwrap_or(usize::MAX)
    }

    // SHL

    /// Shift-left bits inside a buffer.
    ///
    /// Assumes `n < Limb::BITS`, IE, internally shifting bits.
    pub fn ishl_bits(x: &mut Digits, n: usize) {
        // Need to shift by the number of `bits % Limb::BITS)`.
        debug_assert!(n < BITS);
        if n == 0 {
            return;
        }

        // Internally, for each item, we shift left by n, and add the previous
        // right shifted limb-bits.
        // For example, we transform (for u8) shifted left 2, to:
        //      b10100100 b01000010
        //      b10 b10010001 b00001000
        let rshift = BITS - n;
        let lshift = n;
        let mut prev: Limb = 0;
        for xi in x.iter_mut() {
            let tmp = *xi;
            *xi <<= lshift;
            *xi |= prev >> rshift;
            prev = tmp;
        }

        let carry = prev >> rshift;
        if carry != 0 {
            x.push(carry);
        }
    }

    /// Shift-left `n` digits inside a buffer.
    ///
    /// Assumes `n` is not 0.
    pub fn ishl_limbs(x: &mut Digits, n: usize) {
        debug_assert!(n != 0);
        if !x.is_empty() {
            let len = x.len();
            x.resize(len + n);
            let limbs = x.as_mut_slice();
            limbs.copy_within(..len, n);
            limbs[..n].fill(0);
        }
    }

    /// Shift-left buffer by n bits.
    pub fn ishl(x: &mut Digits, n: usize) {
        // Need to pad with zeros for the number of `bits / Limb::BITS`,
        // and shift-left with carry for `bits % Limb::BITS`.
        let rem = n % BITS;
        let div = n / BITS;
        ishl_bits(x, rem);
        if div != 0 {
            ishl_limbs(x, div);
        }
    }

    // SHR

    /// Shift-right buffer by n bits.
    ///
    /// Returns whether any of the bits shifted out were set.
    pub fn ishr(x: &mut Digits, n: usize) -> bool {
        let rem = n % BITS;
        let div = n / BITS;
        if div >= x.len() {
            let lost = x.iter().any(|&l| l != 0);
            x.truncate(0);
            return lost;
        }

        let mut lost = x[..div].iter().any(|&l| l != 0);
        if rem != 0 {
            lost |= x[div] & ((1 << rem) - 1) != 0;
        }

        if div != 0 {
            let len = x.len();
            x.as_mut_slice().copy_within(div.., 0);
            x.truncate(len - div);
        }

        if rem != 0 {
            let lshift = BITS - rem;
            let mut prev: Limb = 0;
            for xi in x.iter_mut().rev() {
                let tmp = *xi;
                *xi = (*xi >> rem) | (prev << lshift);
                prev = tmp;
            }
        }

        normalize(x);
        lost
    }

    // NORMALIZE

    /// Normalize the container by popping any leading zeros.
    #[inline]
    pub fn normalize(x: &mut Digits) {
        let len = trim(x).len();
        x.truncate(len);
    }
}

// LARGE
// -----

// Large-to-large operations, to modify a big integer from a native scalar.

pub(crate) mod large {
    use super::*;

    // RELATIVE OPERATORS

    /// Compare `x` to `y`, in little-endian order.
    ///
    /// Both sides must be normalized, so the limb count decides first.
    #[inline]
    pub fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
        if x.len() > y.len() {
            cmp::Ordering::Greater
        } else if x.len() < y.len() {
            cmp::Ordering::Less
        } else {
            let iter = x.iter().rev().zip(y.iter().rev());
            for (&xi, &yi) in iter {
                if xi > yi {
                    return cmp::Ordering::Greater;
                } else if xi < yi {
                    return cmp::Ordering::Less;
                }
            }
            // Equal case.
            cmp::Ordering::Equal
        }
    }

    /// Check if x is less than y, ignoring leading zero limbs.
    #[inline]
    pub fn less(x: &[Limb], y: &[Limb]) -> bool {
        compare(trim(x), trim(y)) == cmp::Ordering::Less
    }

    /// Check if x is greater than or equal to y, ignoring leading zero limbs.
    #[inline]
    pub fn greater_equal(x: &[Limb], y: &[Limb]) -> bool {
        !less(x, y)
    }

    // ADDITION

    /// Implied AddAssign implementation for bigints.
    ///
    /// Allows us to choose a start-index in x to store, so we can avoid
    /// padding the buffer with zeros when not needed.
    pub fn iadd_impl(x: &mut Digits, y: &[Limb], xstart: usize) {
        // The effective x buffer is from `xstart..x.len()`, so we need to treat
        // that as the current range. If the effective y buffer is longer, need
        // to resize to that, + the start index.
        if x.len() < y.len() + xstart {
            x.resize(y.len() + xstart);
        }

        // Iteratively add elements from y to x.
        let mut carry = false;
        for (xi, yi) in x[xstart..].iter_mut().zip(y.iter()) {
            // Only one op of the two can overflow, since we added at max
            // Limb::MAX + Limb::MAX. Add the previous carry,
            // and store the current carry for the next.
            let mut tmp = scalar::iadd(xi, *yi);
            if carry {
                tmp |= scalar::iadd(xi, 1);
            }
            carry = tmp;
        }

        // Overflow from the previous bit.
        if carry {
            small::iadd_impl(x, 1, y.len() + xstart);
        }
    }

    /// AddAssign bigint to bigint.
    #[inline]
    pub fn iadd(x: &mut Digits, y: &[Limb]) {
        iadd_impl(x, y, 0)
    }

    /// Add bigint to bigint.
    #[inline]
    pub fn add(x: &[Limb], y: &[Limb]) -> Digits {
        let mut z = Digits::from(x);
        iadd(&mut z, y);
        z
    }

    // SUBTRACTION

    /// SubAssign a slice from an equally long or longer slice in place.
    ///
    /// Returns the borrow out of the most significant limb, which is only
    /// set if `y > x`.
    pub fn isub_slice(x: &mut [Limb], y: &[Limb]) -> bool {
        debug_assert!(x.len() >= y.len());
        let mut borrow = false;
        for (xi, &yi) in x.iter_mut().zip(y.iter()) {
            let mut tmp = scalar::isub(xi, yi);
            if borrow {
                tmp |= scalar::isub(xi, 1);
            }
            borrow = tmp;
        }
        for xi in x[y.len()..].iter_mut() {
            if !borrow {
                break;
            }
            borrow = scalar::isub(xi, 1);
        }
        borrow
    }

    /// SubAssign bigint to bigint.
    pub fn isub(x: &mut Digits, y: &[Limb]) {
        // Basic underflow checks.
        debug_assert!(greater_equal(x, y));
        let y = trim(y);
        if x.len() < y.len() {
            // Only leading zeros of x are missing, so pad them back.
            x.resize(y.len());
        }
        isub_slice(x.as_mut_slice(), y);
        small::normalize(x);
    }

    /// Sub bigint from bigint, `x >= y`.
    #[inline]
    pub fn sub(x: &[Limb], y: &[Limb]) -> Digits {
        let mut z = Digits::from(x);
        isub(&mut z, y);
        z
    }

    // MULTIPLICATION

    /// Number of limbs to bottom-out to asymptotically slow algorithms.
    ///
    /// Karatsuba tends to out-perform long-multiplication at ~320-640 bits,
    /// so we go halfway.
    pub const KARATSUBA_CUTOFF: usize = 32;

    /// Grade-school multiplication algorithm.
    ///
    /// Every pair of limbs is multiplied into a double limb and accumulated
    /// into a buffer of `x.len() + y.len() + 1` limbs, with the carry
    /// running along each row.
    pub fn long_mul(x: &[Limb], y: &[Limb]) -> Digits {
        let mut z = Digits::new();
        if x.is_empty() || y.is_empty() {
            return z;
        }
        z.resize(x.len() + y.len() + 1);

        {
            let zs = z.as_mut_slice();
            for (i, &xi) in x.iter().enumerate() {
                let mut carry: Limb = 0;
                for (j, &yj) in y.iter().enumerate() {
                    let (mut lo, mut hi) = scalar::mul_add(xi, yj, carry);
                    if scalar::iadd(&mut lo, zs[i + j]) {
                        hi += 1;
                    }
                    zs[i + j] = lo;
                    carry = hi;
                }
                zs[i + y.len()] = carry;
            }
        }

        small::normalize(&mut z);
        z
    }

    /// Split a buffer at `m` limbs, into (lo, hi).
    ///
    /// A buffer shorter than `m` is all low part.
    #[inline]
    pub fn karatsuba_split(z: &[Limb], m: usize) -> (&[Limb], &[Limb]) {
        z.split_at(cmp::min(m, z.len()))
    }

    /// Karatsuba multiplication algorithm with roughly equal input sizes.
    ///
    /// Assumes `y.len() >= x.len()`.
    fn karatsuba_mul(x: &[Limb], y: &[Limb]) -> Digits {
        if x.len() < KARATSUBA_CUTOFF {
            // Bottom-out to long multiplication for small cases.
            long_mul(x, y)
        } else if x.len() < y.len() / 2 {
            karatsuba_uneven_mul(x, y)
        } else {
            // Split at half the longer operand, which is `k = 32 * m` bits.
            let m = (y.len() + 1) / 2;
            trace!(x = x.len(), y = y.len(), m, "karatsuba split");
            let (xl, xh) = karatsuba_split(x, m);
            let (yl, yh) = karatsuba_split(y, m);
            let sumx = add(xl, xh);
            let sumy = add(yl, yh);

            // Do our 3 multiplications.
            let z0 = mul(xl, yl);
            let mut z1 = mul(&sumx, &sumy);
            let z2 = mul(xh, yh);

            // Properly scale z1, which is `z1 - z2 - z0`.
            isub(&mut z1, &z2);
            isub(&mut z1, &z0);

            // Create our result, which is equal to, in little-endian order:
            // [z0, z1 - z2 - z0, z2]
            //  z1 must be shifted m limbs (2^k) over.
            //  z2 must be shifted 2*m limbs (2^2k) over.
            let mut result = z0;
            iadd_impl(&mut result, &z1, m);
            iadd_impl(&mut result, &z2, 2 * m);
            small::normalize(&mut result);
            result
        }
    }

    /// Karatsuba multiplication algorithm where y is substantially larger than x.
    ///
    /// Assumes `y.len() >= x.len()`.
    fn karatsuba_uneven_mul(x: &[Limb], mut y: &[Limb]) -> Digits {
        let mut result = Digits::new();
        result.resize(x.len() + y.len());

        // This effectively is like grade-school multiplication between
        // two numbers, except we're using splits on `y`, and the intermediate
        // step is a Karatsuba multiplication.
        let mut start = 0;
        while !y.is_empty() {
            let m = cmp::min(x.len(), y.len());
            let (yl, yh) = karatsuba_split(y, m);
            let prod = mul(x, yl);
            iadd_impl(&mut result, &prod, start);
            y = yh;
            start += m;
        }
        small::normalize(&mut result);
        result
    }

    /// Mul bigint to bigint, forwarding to the proper algorithm.
    pub fn mul(x: &[Limb], y: &[Limb]) -> Digits {
        let (x, y) = (trim(x), trim(y));
        if x.len() <= y.len() {
            karatsuba_mul(x, y)
        } else {
            karatsuba_mul(y, x)
        }
    }

    /// MulAssign bigint to bigint.
    pub fn imul(x: &mut Digits, y: &[Limb]) {
        let y = trim(y);
        if y.len() == 1 {
            small::imul(x, y[0]);
            small::normalize(x);
        } else {
            *x = mul(x, y);
        }
    }

    // DIVISION

    /// Long division of magnitudes, returning the quotient.
    ///
    /// Both operands are first scaled by `B / (top + 1)`, where `top` is the
    /// divisor's most significant limb, so that the divisor's top limb is at
    /// least `B / 2`. Quotient limbs are then produced from the most
    /// significant down: the trial digit comes from the two top limbs of
    /// the remainder window over `top`, and is decremented until the
    /// candidate `y * qhat` no longer exceeds the window.
    ///
    /// `y` must be non-zero.
    pub fn div(x: &[Limb], y: &[Limb]) -> Digits {
        let (x, y) = (trim(x), trim(y));
        debug_assert!(!y.is_empty());
        if less(x, y) {
            return Digits::new();
        }
        if y.len() == 1 {
            let mut q = Digits::from(x);
            small::idiv(&mut q, y[0]);
            return q;
        }

        let top = Wide::from(y[y.len() - 1]);
        let factor = ((1 << BITS) / (top + 1)) as Limb;
        trace!(x = x.len(), y = y.len(), factor, "long division");

        let mut rem = small::mul(x, factor);
        let divisor = small::mul(y, factor);
        let n = rem.len();
        let m = divisor.len();
        let top = divisor[m - 1];
        // Room so that every window below is `m + 1` limbs.
        rem.push(0);

        let mut quotient = Digits::new();
        quotient.resize(n - m + 1);
        for j in (0..=n - m).rev() {
            let mut qhat = scalar::div_wide(rem[j + m], rem[j + m - 1], top);
            let mut candidate = small::mul(&divisor, qhat);
            while compare(trim(&candidate), trim(&rem[j..=j + m])) == cmp::Ordering::Greater {
                isub(&mut candidate, &divisor);
                qhat -= 1;
            }
            let borrow = isub_slice(&mut rem.as_mut_slice()[j..=j + m], trim(&candidate));
            debug_assert!(!borrow);
            quotient[j] = qhat;
        }

        small::normalize(&mut quotient);
        quotient
    }

    // TWO'S COMPLEMENT

    /// Replace a fixed-width magnitude by its two's complement in place.
    ///
    /// Complementing every limb of `m` gives `B^n - 1 - m`; stepping that
    /// one further from zero leaves `B^n - m`. The transform is its own
    /// inverse, so it maps in both directions.
    pub fn twos_complement(x: &mut [Limb]) {
        let mut carry = true;
        for xi in x.iter_mut() {
            *xi = !*xi;
            if carry {
                carry = scalar::iadd(xi, 1);
            }
        }
    }
}

pub use self::large::KARATSUBA_CUTOFF;

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn from_u32(x: &[u32]) -> Digits {
        Digits::from(x)
    }

    fn from_u64(x: u64) -> Digits {
        let mut v = from_u32(&[x as u32, (x >> 32) as u32]);
        small::normalize(&mut v);
        v
    }

    /// Deterministic pseudo-random limbs.
    fn limbs(seed: u64, len: usize) -> Vec<Limb> {
        let mut state = seed | 1;
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                state as Limb
            })
            .collect()
    }

    #[test]
    fn scalar_mul_test() {
        let cases: [(Limb, Limb); 6] = [
            (0, 0),
            (1, Limb::MAX),
            (Limb::MAX, Limb::MAX),
            (0x1234_5678, 0x9ABC_DEF0),
            (0xFFFF, 0x1_0000),
            (0x8000_0000, 2),
        ];
        for &(x, y) in &cases {
            let wide = u64::from(x) * u64::from(y);
            assert_eq!(scalar::mul(x, y), (wide as u32, (wide >> 32) as u32));
        }
        let wide = u64::from(Limb::MAX) * u64::from(Limb::MAX) + u64::from(Limb::MAX);
        assert_eq!(
            scalar::mul_add(Limb::MAX, Limb::MAX, Limb::MAX),
            (wide as u32, (wide >> 32) as u32)
        );
    }

    #[test]
    fn scalar_carry_test() {
        let mut x = Limb::MAX;
        assert!(scalar::iadd(&mut x, 1));
        assert_eq!(x, 0);
        assert!(!scalar::iadd(&mut x, 0));
        assert!(scalar::isub(&mut x, 1));
        assert_eq!(x, Limb::MAX);
        assert!(!scalar::isub(&mut x, Limb::MAX));
        assert_eq!(x, 0);
    }

    #[test]
    fn div_wide_saturates() {
        assert_eq!(scalar::div_wide(0, 10, 3), 3);
        assert_eq!(scalar::div_wide(1, 0, 2), 0x8000_0000);
        assert_eq!(scalar::div_wide(5, 0, 5), Limb::MAX);
    }

    #[test]
    fn compare_test() {
        use core::cmp::Ordering;

        // Simple
        assert_eq!(large::compare(&[1], &[2]), Ordering::Less);
        assert_eq!(large::compare(&[2], &[2]), Ordering::Equal);

        // Check asymmetric
        assert_eq!(large::compare(&[5, 1], &[2]), Ordering::Greater);

        // Check when we use reverse ordering properly.
        assert_eq!(large::compare(&[5, 1, 9], &[6, 2, 8]), Ordering::Greater);

        // Complex scenario, check it properly uses reverse ordering.
        assert_eq!(large::compare(&[0, 1, 9], &[4294967295, 0, 9]), Ordering::Greater);

        // Leading zeros only matter for the raw comparison.
        assert!(!large::less(&[3, 0, 0], &[3]));
    }

    #[test]
    fn bit_length_test() {
        assert_eq!(small::bit_length(&[0, 0, 0, 1]), 97);
        assert_eq!(small::bit_length(&[0, 0, 0, 3]), 98);
        assert_eq!(small::bit_length(&[1 << 31]), 32);
        assert_eq!(small::bit_length(&[5, 0]), 3);
        assert_eq!(small::bit_length(&[]), 0);
    }

    #[test]
    fn iadd_small_test() {
        // Overflow check (single)
        let mut x = from_u32(&[4294967295]);
        small::iadd(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 1]));

        // No overflow, single value
        let mut x = from_u32(&[5]);
        small::iadd(&mut x, 7);
        assert_eq!(x, from_u32(&[12]));

        // Single carry, internal overflow
        let mut x = from_u64(0x80000000FFFFFFFF);
        small::iadd(&mut x, 7);
        assert_eq!(x, from_u32(&[6, 0x80000001]));

        // Double carry, overflow
        let mut x = from_u64(0xFFFFFFFFFFFFFFFF);
        small::iadd(&mut x, 7);
        assert_eq!(x, from_u32(&[6, 0, 1]));
    }

    #[test]
    fn isub_small_test() {
        let mut x = from_u32(&[0, 0, 1]);
        small::isub(&mut x, 1);
        assert_eq!(x, from_u32(&[Limb::MAX, Limb::MAX]));

        let mut x = from_u32(&[7]);
        small::isub(&mut x, 7);
        assert!(x.is_empty());
    }

    #[test]
    fn imul_small_test() {
        // No overflow check, 1-int.
        let mut x = from_u32(&[5]);
        small::imul(&mut x, 7);
        assert_eq!(x, from_u32(&[35]));

        // No overflow check, 2-ints.
        let mut x = from_u64(0x4000000040000);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[0x00140000, 0x140000]));

        // Overflow, 1 carry.
        let mut x = from_u32(&[0x33333334]);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 1]));

        // Overflow, 1 carry, internal.
        let mut x = from_u64(0x133333334);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 6]));

        // Overflow, 2 carries.
        let mut x = from_u64(0x3333333333333334);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 0, 1]));
    }

    #[test]
    fn imul_test() {
        // Single limb, after trimming.
        let mut x = from_u32(&[0x33333334]);
        large::imul(&mut x, &[5, 0, 0]);
        assert_eq!(x, from_u32(&[4, 1]));

        // Multiple limbs.
        let mut x = from_u32(&[Limb::MAX, Limb::MAX]);
        large::imul(&mut x, &[Limb::MAX, Limb::MAX]);
        assert_eq!(x, from_u32(&[1, 0, Limb::MAX - 1, Limb::MAX]));

        // Zero on either side.
        let mut x = from_u32(&[7, 9]);
        large::imul(&mut x, &[0]);
        assert!(x.is_empty());
        let mut x = from_u32(&[0]);
        large::imul(&mut x, &[3, 4]);
        assert!(x.is_empty());
    }

    #[test]
    fn idiv_small_test() {
        let mut x = from_u64(0x1_0000_0005);
        assert_eq!(small::idiv(&mut x, 2), 1);
        assert_eq!(x, from_u64(0x8000_0002));

        let mut x = from_u32(&[9]);
        assert_eq!(small::idiv(&mut x, 10), 9);
        assert!(x.is_empty());
    }

    #[test]
    fn shl_test() {
        // Pattern generated via `''.join(["1" +"0"*i for i in range(20)])`
        let mut big = from_u32(&[0xD2210408]);
        small::ishl(&mut big, 5);
        assert_eq!(big, from_u32(&[0x44208100, 0x1A]));
        small::ishl(&mut big, 32);
        assert_eq!(big, from_u32(&[0, 0x44208100, 0x1A]));
        small::ishl(&mut big, 27);
        assert_eq!(big, from_u32(&[0, 0, 0xD2210408]));

        // 96-bits of previous pattern
        let mut big = from_u32(&[0x20020010, 0x8040100, 0xD2210408]);
        small::ishl(&mut big, 5);
        assert_eq!(big, from_u32(&[0x400200, 0x802004, 0x44208101, 0x1A]));
        small::ishl(&mut big, 32);
        assert_eq!(big, from_u32(&[0, 0x400200, 0x802004, 0x44208101, 0x1A]));
        small::ishl(&mut big, 27);
        assert_eq!(big, from_u32(&[0, 0, 0x20020010, 0x8040100, 0xD2210408]));
    }

    #[test]
    fn shr_test() {
        let mut big = from_u32(&[0, 0, 0xD2210408]);
        assert!(!small::ishr(&mut big, 27));
        assert_eq!(big, from_u32(&[0, 0x44208100, 0x1A]));
        assert!(!small::ishr(&mut big, 32));
        assert_eq!(big, from_u32(&[0x44208100, 0x1A]));
        assert!(!small::ishr(&mut big, 5));
        assert_eq!(big, from_u32(&[0xD2210408]));
        assert!(small::ishr(&mut big, 4));
        assert_eq!(big, from_u32(&[0x0D221040]));
        assert!(small::ishr(&mut big, 64));
        assert!(big.is_empty());
    }

    #[test]
    fn add_sub_test() {
        let x = from_u32(&[Limb::MAX, Limb::MAX]);
        let z = large::add(&x, &[1]);
        assert_eq!(z, from_u32(&[0, 0, 1]));
        assert_eq!(large::sub(&z, &[1]), x);
        assert_eq!(large::sub(&z, &z), Digits::new());

        let mut w = from_u32(&[1, 2, 3]);
        large::iadd_impl(&mut w, &[Limb::MAX], 1);
        assert_eq!(w, from_u32(&[1, 1, 4]));
    }

    #[test]
    fn long_mul_test() {
        let x = from_u32(&[Limb::MAX, Limb::MAX]);
        let z = large::long_mul(&x, &x);
        // (2^64 - 1)^2 = 2^128 - 2^65 + 1
        assert_eq!(z, from_u32(&[1, 0, Limb::MAX - 1, Limb::MAX]));
        assert!(large::long_mul(&x, &[]).is_empty());
    }

    #[test]
    fn karatsuba_mul_test() {
        // Operand sizes straddling the cutoff, including uneven splits.
        for &(xn, yn) in &[(40, 40), (33, 65), (64, 200), (31, 100), (97, 96)] {
            let x = limbs(xn as u64, xn);
            let y = limbs(yn as u64 * 7, yn);
            let fast = large::mul(&x, &y);
            let slow = large::long_mul(&x, &y);
            assert_eq!(fast, slow, "{} x {}", xn, yn);
        }
    }

    #[test]
    fn div_test() {
        // (x * y + r) / y == x for r < y.
        for &(xn, yn) in &[(3, 2), (10, 4), (50, 49), (70, 33), (5, 1)] {
            let x = limbs(xn as u64 + 11, xn);
            let y = limbs(yn as u64 + 3, yn);
            let mut z = large::mul(&x, &y);
            let r = large::sub(&y, &[1]);
            large::iadd(&mut z, &r);
            assert_eq!(large::div(&z, &y), from_u32(trim(&x)), "{} / {}", xn, yn);
        }

        // Divisor with a full top limb, and one that forces qhat clamping.
        let y = from_u32(&[0, Limb::MAX]);
        let z = large::mul(&y, &[3, 7]);
        assert_eq!(large::div(&z, &y), from_u32(&[3, 7]));

        let y = from_u32(&[Limb::MAX, 0x8000_0000]);
        let z = from_u32(&[0, Limb::MAX, 0x8000_0000]);
        let q = large::div(&z, &y);
        let mut back = large::mul(&q, &y);
        assert!(large::greater_equal(&z, &back));
        large::iadd(&mut back, &y);
        assert!(large::less(&z, &back));
    }

    #[test]
    fn div_smaller_dividend_is_zero() {
        assert!(large::div(&[5], &[0, 1]).is_empty());
    }

    #[test]
    fn twos_complement_test() {
        let mut x = [1, 0];
        large::twos_complement(&mut x);
        assert_eq!(x, [Limb::MAX, Limb::MAX]);
        large::twos_complement(&mut x);
        assert_eq!(x, [1, 0]);

        let mut x = [0, 1, 0];
        large::twos_complement(&mut x);
        assert_eq!(x, [0, Limb::MAX, Limb::MAX]);
    }
}

// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::{
    detect::{
        Verdict,
        matrix::{Combination, Width},
    },
    num::primitive::Primitive,
};

/// Returns `true` if `|left| * |right| > limit`. Both operands must be
/// non-zero.
///
/// Works on magnitudes in the unsigned twins of `L` and `R`, so `|MIN|` is
/// representable, and never forms the product: `|right|` is compared against
/// `limit / |left|` instead.
#[inline(always)]
fn magnitude_product_exceeds<L, R>(left: L, right: R, limit: L::Unsigned) -> bool
where
    L: Primitive,
    R: Primitive,
{
    let left = left.magnitude();
    let right = right.magnitude();
    // A right magnitude beyond the range of `L::Unsigned` exceeds any limit.
    if R::BITS > L::BITS
        && right > <L::Unsigned as Primitive>::MAX.cast_to::<R::Unsigned>()
    {
        return true;
    }
    right.cast_to::<L::Unsigned>() > limit / left
}

/// Returns `true` if two signed operands share a sign, via `(left ^ right) >= 0`
/// in the wider of the two types. Sign extension preserves the sign bit.
#[inline(always)]
fn same_sign<L, R>(left: L, right: R, width: Width) -> bool
where
    L: Primitive,
    R: Primitive,
{
    match width {
        Width::RightWider => (left.cast_to::<R>() ^ right) >= R::ZERO,
        _ => (left ^ right.cast_to::<L>()) >= L::ZERO,
    }
}

/// Detects whether `left * right`, computed exactly, falls outside the range
/// of `L`.
///
/// The product is never formed. If either operand is zero nothing can
/// overflow. Otherwise the sign of the exact product decides which bound
/// applies: a positive product is limited by `|MAX|`, a negative one by
/// `|MIN|`, and a negative product can never be stored in an unsigned `L`.
///
/// # Examples
///
/// ```rust
/// # use verint_core::detect::{Verdict, multiplication::detect_multiplication_overflow};
/// assert_eq!(detect_multiplication_overflow(16i8, 16i8), Verdict::PositiveOverflow);
/// assert_eq!(detect_multiplication_overflow(16i8, -16i8), Verdict::NegativeOverflow);
/// assert_eq!(detect_multiplication_overflow(-16i8, 8i8), Verdict::NoOverflow);
/// assert_eq!(detect_multiplication_overflow(i8::MIN, -1i8), Verdict::PositiveOverflow);
/// ```
#[inline]
pub fn detect_multiplication_overflow<L, R>(left: L, right: R) -> Verdict
where
    L: Primitive,
    R: Primitive,
{
    if left == L::ZERO || right == R::ZERO {
        return Verdict::NoOverflow;
    }

    match const { Combination::of::<L, R>() } {
        Combination::UnsignedUnsigned(_) => {
            Verdict::positive_if(magnitude_product_exceeds(left, right, L::MAX.magnitude()))
        }
        Combination::UnsignedSigned(_) => {
            if right < R::ZERO {
                Verdict::NegativeOverflow
            } else {
                Verdict::positive_if(magnitude_product_exceeds(left, right, L::MAX.magnitude()))
            }
        }
        Combination::SignedUnsigned(_) => {
            if left > L::ZERO {
                Verdict::positive_if(magnitude_product_exceeds(left, right, L::MAX.magnitude()))
            } else {
                Verdict::negative_if(magnitude_product_exceeds(left, right, L::MIN.magnitude()))
            }
        }
        Combination::SignedSigned(width) => {
            if same_sign(left, right, width) {
                Verdict::positive_if(magnitude_product_exceeds(left, right, L::MAX.magnitude()))
            } else {
                Verdict::negative_if(magnitude_product_exceeds(left, right, L::MIN.magnitude()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_overflows() {
        assert_eq!(detect_multiplication_overflow(0u8, u64::MAX), Verdict::NoOverflow);
        assert_eq!(detect_multiplication_overflow(i8::MIN, 0i64), Verdict::NoOverflow);
        assert_eq!(detect_multiplication_overflow(0u8, -1i8), Verdict::NoOverflow);
    }

    #[test]
    fn test_equal_operands_are_same_sign() {
        assert_eq!(detect_multiplication_overflow(16i8, 16i8), Verdict::PositiveOverflow);
        assert_eq!(detect_multiplication_overflow(-16i8, -16i8), Verdict::PositiveOverflow);
        assert_eq!(detect_multiplication_overflow(11i8, 11i8), Verdict::NoOverflow);
    }

    #[test]
    fn test_signed_limits() {
        assert_eq!(detect_multiplication_overflow(-64i8, 2i8), Verdict::NoOverflow);
        assert_eq!(detect_multiplication_overflow(-64i8, 3i8), Verdict::NegativeOverflow);
        assert_eq!(detect_multiplication_overflow(i8::MIN, 1i8), Verdict::NoOverflow);
        assert_eq!(detect_multiplication_overflow(-1i8, i8::MIN), Verdict::PositiveOverflow);
        assert_eq!(detect_multiplication_overflow(1i8, -128i64), Verdict::NoOverflow);
        assert_eq!(detect_multiplication_overflow(1i8, -129i64), Verdict::NegativeOverflow);
        assert_eq!(detect_multiplication_overflow(-1i8, -128i64), Verdict::PositiveOverflow);
        assert_eq!(
            detect_multiplication_overflow(i64::MIN, -1i8),
            Verdict::PositiveOverflow
        );
    }

    #[test]
    fn test_unsigned_result() {
        assert_eq!(detect_multiplication_overflow(15u8, 17u8), Verdict::NoOverflow);
        assert_eq!(detect_multiplication_overflow(16u8, 16u8), Verdict::PositiveOverflow);
        assert_eq!(detect_multiplication_overflow(1u8, 256u16), Verdict::PositiveOverflow);
        assert_eq!(detect_multiplication_overflow(1u8, -1i8), Verdict::NegativeOverflow);
        assert_eq!(detect_multiplication_overflow(2u64, i64::MAX), Verdict::NoOverflow);
    }

    #[test]
    fn test_signed_left_unsigned_right() {
        assert_eq!(detect_multiplication_overflow(-1i8, 128u8), Verdict::NoOverflow);
        assert_eq!(detect_multiplication_overflow(-1i8, 129u8), Verdict::NegativeOverflow);
        assert_eq!(detect_multiplication_overflow(1i8, 128u8), Verdict::PositiveOverflow);
        assert_eq!(detect_multiplication_overflow(-2i32, u64::MAX), Verdict::NegativeOverflow);
    }
}

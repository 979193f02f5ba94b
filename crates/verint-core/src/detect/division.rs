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

/// Detects whether the truncated quotient `left / right`, computed exactly,
/// falls outside the range of `L`.
///
/// The quotient's magnitude never exceeds `|left|`, so only its sign can
/// carry it out of range:
/// - For a signed `L`, `MIN / -1` is the one case: `|MIN| = MAX + 1`.
/// - For an unsigned `L` divided by a negative value, every non-zero quotient
///   is negative. That happens exactly when `left >= |right|`.
///
/// A zero divisor yields `Verdict::NoOverflow`; division by zero is not an
/// overflow and is left to the native division.
///
/// # Examples
///
/// ```rust
/// # use verint_core::detect::{Verdict, division::detect_division_overflow};
/// assert_eq!(detect_division_overflow(i8::MIN, -1i8), Verdict::PositiveOverflow);
/// assert_eq!(detect_division_overflow(i8::MAX, -1i8), Verdict::NoOverflow);
/// assert_eq!(detect_division_overflow(255u8, -1i8), Verdict::NegativeOverflow);
/// assert_eq!(detect_division_overflow(0u8, -1i8), Verdict::NoOverflow);
/// ```
#[inline]
pub fn detect_division_overflow<L, R>(left: L, right: R) -> Verdict
where
    L: Primitive,
    R: Primitive,
{
    match const { Combination::of::<L, R>() } {
        Combination::SignedSigned(_) => {
            Verdict::positive_if(left == L::MIN && right == R::ZERO - R::ONE)
        }
        Combination::UnsignedSigned(width) => {
            if right >= R::ZERO {
                return Verdict::NoOverflow;
            }
            let divisor = right.magnitude();
            let reaches = match width {
                Width::RightWider => left.cast_to::<R::Unsigned>() >= divisor,
                _ => left >= divisor.cast_to::<L>(),
            };
            Verdict::negative_if(reaches)
        }
        Combination::UnsignedUnsigned(_) | Combination::SignedUnsigned(_) => {
            Verdict::NoOverflow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_min_by_minus_one() {
        assert_eq!(detect_division_overflow(i8::MIN, -1i8), Verdict::PositiveOverflow);
        assert_eq!(detect_division_overflow(i8::MIN, -1i64), Verdict::PositiveOverflow);
        assert_eq!(detect_division_overflow(i64::MIN, -1i8), Verdict::PositiveOverflow);
        assert_eq!(detect_division_overflow(i8::MIN, -2i8), Verdict::NoOverflow);
        assert_eq!(detect_division_overflow(i8::MIN + 1, -1i8), Verdict::NoOverflow);
    }

    #[test]
    fn test_unsigned_by_negative() {
        assert_eq!(detect_division_overflow(255u8, -1i8), Verdict::NegativeOverflow);
        assert_eq!(detect_division_overflow(10u8, -2i8), Verdict::NegativeOverflow);
        assert_eq!(detect_division_overflow(1u8, -2i8), Verdict::NoOverflow);
        assert_eq!(detect_division_overflow(255u8, -256i16), Verdict::NoOverflow);
        assert_eq!(detect_division_overflow(255u8, -255i16), Verdict::NegativeOverflow);
        assert_eq!(detect_division_overflow(u64::MAX, i8::MIN), Verdict::NegativeOverflow);
    }

    #[test]
    fn test_never_overflows_otherwise() {
        assert_eq!(detect_division_overflow(u8::MAX, 1u64), Verdict::NoOverflow);
        assert_eq!(detect_division_overflow(i8::MIN, 1u8), Verdict::NoOverflow);
        assert_eq!(detect_division_overflow(i64::MIN, u64::MAX), Verdict::NoOverflow);
    }

    #[test]
    fn test_zero_divisor_is_not_an_overflow() {
        assert_eq!(detect_division_overflow(i8::MIN, 0i8), Verdict::NoOverflow);
        assert_eq!(detect_division_overflow(5u8, 0i8), Verdict::NoOverflow);
    }
}

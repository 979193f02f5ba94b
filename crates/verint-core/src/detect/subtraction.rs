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

/// Detects whether `left - right`, computed exactly, falls outside the range
/// of `L`.
///
/// Mirrors addition: narrower right operands are moved into `L`, wider ones
/// keep the comparison in `R` where `left - MAX` and `left - MIN` always fit.
/// Subtracting an unsigned value can only overflow downwards.
///
/// # Examples
///
/// ```rust
/// # use verint_core::detect::{Verdict, subtraction::detect_subtraction_overflow};
/// assert_eq!(detect_subtraction_overflow(0u8, 1u8), Verdict::NegativeOverflow);
/// assert_eq!(detect_subtraction_overflow(-128i8, 1i8), Verdict::NegativeOverflow);
/// assert_eq!(detect_subtraction_overflow(127i8, -1i8), Verdict::PositiveOverflow);
/// assert_eq!(detect_subtraction_overflow(0u32, -7i8), Verdict::NoOverflow);
/// ```
#[inline]
pub fn detect_subtraction_overflow<L, R>(left: L, right: R) -> Verdict
where
    L: Primitive,
    R: Primitive,
{
    match const { Combination::of::<L, R>() } {
        Combination::UnsignedUnsigned(Width::RightWider) => {
            Verdict::negative_if(right > left.cast_to::<R>())
        }
        Combination::UnsignedUnsigned(_) => Verdict::negative_if(right.cast_to::<L>() > left),
        Combination::SignedSigned(Width::RightWider) => {
            let left = left.cast_to::<R>();
            if right < left - L::MAX.cast_to::<R>() {
                Verdict::PositiveOverflow
            } else if right > left - L::MIN.cast_to::<R>() {
                Verdict::NegativeOverflow
            } else {
                Verdict::NoOverflow
            }
        }
        Combination::SignedSigned(Width::LeftWider) => {
            let right = right.cast_to::<L>();
            if left >= L::ZERO {
                // Negative overflow is impossible.
                Verdict::positive_if(right < L::ZERO && left > L::MAX + right)
            } else {
                // Positive overflow is impossible.
                Verdict::negative_if(right > L::ZERO && left < L::MIN + right)
            }
        }
        Combination::SignedSigned(Width::Same) => {
            let right = right.cast_to::<L>();
            if right > L::ZERO && left < L::MIN + right {
                Verdict::NegativeOverflow
            } else if right < L::ZERO && left > L::MAX + right {
                Verdict::PositiveOverflow
            } else {
                Verdict::NoOverflow
            }
        }
        Combination::UnsignedSigned(Width::RightWider) => {
            let left = left.cast_to::<R>();
            if right < left - L::MAX.cast_to::<R>() {
                Verdict::PositiveOverflow
            } else if right > left {
                Verdict::NegativeOverflow
            } else {
                Verdict::NoOverflow
            }
        }
        Combination::UnsignedSigned(_) => {
            if right >= R::ZERO {
                Verdict::negative_if(right.cast_to::<L>() > left)
            } else {
                Verdict::positive_if(right.magnitude().cast_to::<L>() > L::MAX - left)
            }
        }
        Combination::SignedUnsigned(Width::LeftWider) => {
            // `right` is exact in `L` and below `MAX`, so `MIN + right` fits.
            Verdict::negative_if(left < L::MIN + right.cast_to::<L>())
        }
        Combination::SignedUnsigned(_) => {
            // The distance `left - MIN` is below `2^BITS(L)` and fits in the unsigned `R`.
            let min_magnitude = L::MIN.magnitude().cast_to::<R>();
            let distance = if left >= L::ZERO {
                min_magnitude + left.cast_to::<R>()
            } else {
                min_magnitude - left.magnitude().cast_to::<R>()
            };
            Verdict::negative_if(right > distance)
        }
    }
}

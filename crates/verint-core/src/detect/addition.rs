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

/// Detects whether `left + right`, computed exactly, falls outside the range
/// of `L`.
///
/// Each combination of signedness and relative width compares against a
/// bound that is itself representable in the domain it is formed in:
/// - Narrower (or equal) right operands are moved into `L`, where they are
///   exact, and compared against the headroom `MAX - left` or the
///   footroom `MIN - left`.
/// - Wider right operands stay in `R`, and the headroom is formed there. A
///   wider type has at least twice the bits, so `MAX - left` and
///   `MIN - left` always fit.
/// - When a signed `L` is strictly wider than a signed `R`, the sign of
///   `left` rules out one direction before any comparison.
///
/// # Examples
///
/// ```rust
/// # use verint_core::detect::{Verdict, addition::detect_addition_overflow};
/// assert_eq!(detect_addition_overflow(250u8, 5u8), Verdict::NoOverflow);
/// assert_eq!(detect_addition_overflow(250u8, 6u8), Verdict::PositiveOverflow);
/// assert_eq!(detect_addition_overflow(-128i8, -1i8), Verdict::NegativeOverflow);
/// assert_eq!(detect_addition_overflow(5u8, -6i64), Verdict::NegativeOverflow);
/// ```
#[inline]
pub fn detect_addition_overflow<L, R>(left: L, right: R) -> Verdict
where
    L: Primitive,
    R: Primitive,
{
    match const { Combination::of::<L, R>() } {
        Combination::UnsignedUnsigned(Width::RightWider) => {
            Verdict::positive_if(right > (L::MAX - left).cast_to::<R>())
        }
        Combination::UnsignedUnsigned(_) => {
            Verdict::positive_if(right.cast_to::<L>() > L::MAX - left)
        }
        Combination::SignedSigned(Width::RightWider) => {
            let left = left.cast_to::<R>();
            if right > L::MAX.cast_to::<R>() - left {
                Verdict::PositiveOverflow
            } else if right < L::MIN.cast_to::<R>() - left {
                Verdict::NegativeOverflow
            } else {
                Verdict::NoOverflow
            }
        }
        Combination::SignedSigned(Width::LeftWider) => {
            let right = right.cast_to::<L>();
            if left >= L::ZERO {
                // Negative overflow is impossible.
                Verdict::positive_if(right > L::ZERO && left > L::MAX - right)
            } else {
                // Positive overflow is impossible.
                Verdict::negative_if(right < L::ZERO && left < L::MIN - right)
            }
        }
        Combination::SignedSigned(Width::Same) => {
            let right = right.cast_to::<L>();
            if right > L::ZERO && left > L::MAX - right {
                Verdict::PositiveOverflow
            } else if right < L::ZERO && left < L::MIN - right {
                Verdict::NegativeOverflow
            } else {
                Verdict::NoOverflow
            }
        }
        Combination::UnsignedSigned(Width::RightWider) => {
            let left = left.cast_to::<R>();
            if right > L::MAX.cast_to::<R>() - left {
                Verdict::PositiveOverflow
            } else if right < R::ZERO - left {
                Verdict::NegativeOverflow
            } else {
                Verdict::NoOverflow
            }
        }
        Combination::UnsignedSigned(_) => {
            if right >= R::ZERO {
                Verdict::positive_if(right.cast_to::<L>() > L::MAX - left)
            } else {
                Verdict::negative_if(right.magnitude().cast_to::<L>() > left)
            }
        }
        Combination::SignedUnsigned(Width::LeftWider) => {
            // `right` is exact in `L`. With `left <= 0` the sum cannot exceed `R::MAX`.
            Verdict::positive_if(left > L::ZERO && right.cast_to::<L>() > L::MAX - left)
        }
        Combination::SignedUnsigned(_) => {
            // `MAX + |left|` is below `2^BITS(L)` and fits in the unsigned `R`.
            let limit = if left >= L::ZERO {
                (L::MAX - left).cast_to::<R>()
            } else {
                L::MAX.cast_to::<R>() + left.magnitude().cast_to::<R>()
            };
            Verdict::positive_if(right > limit)
        }
    }
}

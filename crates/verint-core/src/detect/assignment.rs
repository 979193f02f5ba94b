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

/// Detects whether `value`, interpreted in `R`, lies outside the range of `L`.
///
/// This is the check behind construction, assignment and conversion from a
/// different native width. Bounds of `L` are only ever moved into `R` when `R`
/// is wide enough to hold them; when `L` covers all of `R` on a side, that
/// side is not compared at all.
///
/// # Examples
///
/// ```rust
/// # use verint_core::detect::{Verdict, assignment::detect_assignment_overflow};
/// assert_eq!(detect_assignment_overflow::<u8, u32>(0x100), Verdict::PositiveOverflow);
/// assert_eq!(detect_assignment_overflow::<u8, i8>(-1), Verdict::NegativeOverflow);
/// assert_eq!(detect_assignment_overflow::<i64, u32>(u32::MAX), Verdict::NoOverflow);
/// ```
#[inline]
pub fn detect_assignment_overflow<L, R>(value: R) -> Verdict
where
    L: Primitive,
    R: Primitive,
{
    match const { Combination::of::<L, R>() } {
        Combination::UnsignedUnsigned(Width::RightWider) => {
            Verdict::positive_if(value > L::MAX.cast_to::<R>())
        }
        Combination::UnsignedUnsigned(_) => Verdict::NoOverflow,
        Combination::SignedSigned(Width::RightWider) => {
            if value > L::MAX.cast_to::<R>() {
                Verdict::PositiveOverflow
            } else if value < L::MIN.cast_to::<R>() {
                Verdict::NegativeOverflow
            } else {
                Verdict::NoOverflow
            }
        }
        Combination::SignedSigned(_) => Verdict::NoOverflow,
        Combination::UnsignedSigned(width) => {
            if value < R::ZERO {
                Verdict::NegativeOverflow
            } else if width == Width::RightWider {
                Verdict::positive_if(value > L::MAX.cast_to::<R>())
            } else {
                // Non-negative values of a signed type fit any unsigned type
                // of at least the same width.
                Verdict::NoOverflow
            }
        }
        Combination::SignedUnsigned(Width::LeftWider) => Verdict::NoOverflow,
        Combination::SignedUnsigned(_) => Verdict::positive_if(value > L::MAX.cast_to::<R>()),
    }
}

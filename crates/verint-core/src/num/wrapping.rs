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

//! Native wraparound arithmetic across mixed operand types.
//!
//! These functions compute what a native operation storing into the left
//! operand's type produces: the exact result reduced modulo `2^BITS`. When the
//! detection engine reports `Verdict::NoOverflow` for the same operands, the
//! value returned here is the exact mathematical result.
//!
//! Addition, subtraction and multiplication are congruences, so casting the
//! right operand into the result type first preserves the wrapped result.
//! Division and remainder are not, and are computed on magnitudes instead.

use crate::num::primitive::Primitive;

/// Wrapping `left + right` in `L`.
///
/// # Examples
///
/// ```rust
/// # use verint_core::num::wrapping::wrapping_add;
/// assert_eq!(wrapping_add(250u8, 10u8), 4);
/// assert_eq!(wrapping_add(250u8, -5i64), 245);
/// assert_eq!(wrapping_add(1i8, 300u16), 45);
/// ```
#[inline(always)]
pub fn wrapping_add<L, R>(left: L, right: R) -> L
where
    L: Primitive,
    R: Primitive,
{
    left.wrapping_add(&right.cast_to::<L>())
}

/// Wrapping `left - right` in `L`.
///
/// # Examples
///
/// ```rust
/// # use verint_core::num::wrapping::wrapping_sub;
/// assert_eq!(wrapping_sub(0u8, 1u8), 255);
/// assert_eq!(wrapping_sub(-128i8, -1i32), -127);
/// ```
#[inline(always)]
pub fn wrapping_sub<L, R>(left: L, right: R) -> L
where
    L: Primitive,
    R: Primitive,
{
    left.wrapping_sub(&right.cast_to::<L>())
}

/// Wrapping `left * right` in `L`.
///
/// # Examples
///
/// ```rust
/// # use verint_core::num::wrapping::wrapping_mul;
/// assert_eq!(wrapping_mul(16i8, 16i8), 0);
/// assert_eq!(wrapping_mul(3u16, -2i8), 65530);
/// ```
#[inline(always)]
pub fn wrapping_mul<L, R>(left: L, right: R) -> L
where
    L: Primitive,
    R: Primitive,
{
    left.wrapping_mul(&right.cast_to::<L>())
}

/// Truncating `left / right` in `L`, computed on the exact quotient and then
/// wrapped into `L`.
///
/// # Panics
///
/// Panics if `right` is zero, like native integer division.
///
/// # Examples
///
/// ```rust
/// # use verint_core::num::wrapping::wrapping_div;
/// assert_eq!(wrapping_div(-7i8, 2u64), -3);
/// assert_eq!(wrapping_div(200u8, 300u16), 0);
/// assert_eq!(wrapping_div(i8::MIN, -1i8), i8::MIN);
/// ```
#[inline]
pub fn wrapping_div<L, R>(left: L, right: R) -> L
where
    L: Primitive,
    R: Primitive,
{
    let quotient = left.magnitude().to_raw() / right.magnitude().to_raw();
    if left.is_negative() != right.is_negative() {
        L::from_raw(quotient.wrapping_neg())
    } else {
        L::from_raw(quotient)
    }
}

/// Truncating `left % right` in `L`. The remainder takes the sign of `left`
/// and its magnitude is below both `|left| + 1` and `|right|`, so it always
/// fits in `L`. `MIN % -1` yields `0` rather than trapping.
///
/// # Panics
///
/// Panics if `right` is zero, like native integer remainder.
///
/// # Examples
///
/// ```rust
/// # use verint_core::num::wrapping::wrapping_rem;
/// assert_eq!(wrapping_rem(-65i8, 2u8), -1);
/// assert_eq!(wrapping_rem(10u8, -3i8), 1);
/// assert_eq!(wrapping_rem(200u8, 300u16), 200);
/// assert_eq!(wrapping_rem(i8::MIN, -1i8), 0);
/// ```
#[inline]
pub fn wrapping_rem<L, R>(left: L, right: R) -> L
where
    L: Primitive,
    R: Primitive,
{
    let remainder = left.magnitude().to_raw() % right.magnitude().to_raw();
    if left.is_negative() {
        L::from_raw(remainder.wrapping_neg())
    } else {
        L::from_raw(remainder)
    }
}

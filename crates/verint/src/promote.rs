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

//! Common type resolution for arithmetic between two differently typed
//! `Verified` values.
//!
//! Follows the usual arithmetic conversions of C with a 32-bit `int`: 8 and
//! 16-bit operands are first promoted to `i32`, then the higher rank wins,
//! and at equal rank the unsigned type wins. A signed type that can hold
//! every value of the unsigned one (`i64` against `u32`) stays signed.
//! Unlike C, two operands of the same type keep that type, so `u8 + u8`
//! stays `u8`.

use verint_core::num::primitive::Primitive;

/// The type a binary operation between `Self` and `R` is carried out in.
///
/// Symmetric: `<A as Promote<B>>::Output` and `<B as Promote<A>>::Output` are
/// the same type.
pub trait Promote<R>: Primitive
where
    R: Primitive,
{
    type Output: Primitive;
}

macro_rules! impl_promote {
    ($(($left:ty, $right:ty) => $output:ty),* $(,)?) => {
        $(
            impl Promote<$right> for $left {
                type Output = $output;
            }
        )*
    };
}

impl_promote!(
    (u8, u8) => u8, (u8, u16) => i32, (u8, u32) => u32, (u8, u64) => u64,
    (u8, i8) => i32, (u8, i16) => i32, (u8, i32) => i32, (u8, i64) => i64,
    (u16, u8) => i32, (u16, u16) => u16, (u16, u32) => u32, (u16, u64) => u64,
    (u16, i8) => i32, (u16, i16) => i32, (u16, i32) => i32, (u16, i64) => i64,
    (u32, u8) => u32, (u32, u16) => u32, (u32, u32) => u32, (u32, u64) => u64,
    (u32, i8) => u32, (u32, i16) => u32, (u32, i32) => u32, (u32, i64) => i64,
    (u64, u8) => u64, (u64, u16) => u64, (u64, u32) => u64, (u64, u64) => u64,
    (u64, i8) => u64, (u64, i16) => u64, (u64, i32) => u64, (u64, i64) => u64,
    (i8, u8) => i32, (i8, u16) => i32, (i8, u32) => u32, (i8, u64) => u64,
    (i8, i8) => i8, (i8, i16) => i32, (i8, i32) => i32, (i8, i64) => i64,
    (i16, u8) => i32, (i16, u16) => i32, (i16, u32) => u32, (i16, u64) => u64,
    (i16, i8) => i32, (i16, i16) => i16, (i16, i32) => i32, (i16, i64) => i64,
    (i32, u8) => i32, (i32, u16) => i32, (i32, u32) => u32, (i32, u64) => u64,
    (i32, i8) => i32, (i32, i16) => i32, (i32, i32) => i32, (i32, i64) => i64,
    (i64, u8) => i64, (i64, u16) => i64, (i64, u32) => i64, (i64, u64) => u64,
    (i64, i8) => i64, (i64, i16) => i64, (i64, i32) => i64, (i64, i64) => i64,
);

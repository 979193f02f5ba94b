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
    detect::{Verdict, subtraction::detect_subtraction_overflow},
    num::primitive::Primitive,
};

/// Detects whether `-value` falls outside the range of `L`, treating
/// negation as `0 - value`.
///
/// For a signed `L` only `MIN` overflows (positively). For an unsigned `L`
/// every non-zero value overflows negatively.
///
/// # Examples
///
/// ```rust
/// # use verint_core::detect::{Verdict, negation::detect_negation_overflow};
/// assert_eq!(detect_negation_overflow(i8::MIN), Verdict::PositiveOverflow);
/// assert_eq!(detect_negation_overflow(i8::MAX), Verdict::NoOverflow);
/// assert_eq!(detect_negation_overflow(1u32), Verdict::NegativeOverflow);
/// assert_eq!(detect_negation_overflow(0u32), Verdict::NoOverflow);
/// ```
#[inline]
pub fn detect_negation_overflow<L>(value: L) -> Verdict
where
    L: Primitive,
{
    detect_subtraction_overflow::<L, L>(L::ZERO, value)
}

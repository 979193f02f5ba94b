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

//! Runtime entry point for operands whose types are only known from tags.
//!
//! `DynInt` carries one of the eight supported natives together with its
//! type. `detect` expands to the generic engine for all 64 type pairs and
//! picks the matching instantiation at runtime, so it agrees with the
//! generic entry points value for value.

use crate::{
    detect::{
        Operation, Verdict, detect_addition_overflow, detect_assignment_overflow,
        detect_division_overflow, detect_multiplication_overflow, detect_negation_overflow,
        detect_subtraction_overflow,
    },
    num::primitive::{Primitive, TypeDescriptor},
};

/// A native integer tagged with its type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DynInt {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
}

/// Expands `$body` once per variant of `$value`, binding the payload to `$v`.
macro_rules! with_native {
    ($value:expr, |$v:ident| $body:expr) => {
        match $value {
            DynInt::U8($v) => $body,
            DynInt::U16($v) => $body,
            DynInt::U32($v) => $body,
            DynInt::U64($v) => $body,
            DynInt::I8($v) => $body,
            DynInt::I16($v) => $body,
            DynInt::I32($v) => $body,
            DynInt::I64($v) => $body,
        }
    };
}

impl DynInt {
    /// Returns the descriptor of the carried type.
    #[inline]
    pub fn descriptor(self) -> TypeDescriptor {
        with_native!(self, |v| descriptor_of(v))
    }

    /// Returns `true` if the carried value is below zero.
    #[inline]
    pub fn is_negative(self) -> bool {
        with_native!(self, |v| v.is_negative())
    }
}

#[inline(always)]
fn descriptor_of<T: Primitive>(_: T) -> TypeDescriptor {
    T::DESCRIPTOR
}

macro_rules! impl_from_native {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for DynInt {
                #[inline]
                fn from(value: $t) -> Self {
                    DynInt::$variant(value)
                }
            }
        )*
    };
}

impl_from_native!(
    u8 => U8, u16 => U16, u32 => U32, u64 => U64,
    i8 => I8, i16 => I16, i32 => I32, i64 => I64,
);

impl std::fmt::Display for DynInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        with_native!(*self, |v| write!(f, "{}{}", v, self.descriptor()))
    }
}

#[inline(always)]
fn apply<L, R>(operation: Operation, left: L, right: R) -> Verdict
where
    L: Primitive,
    R: Primitive,
{
    match operation {
        Operation::Assign => detect_assignment_overflow::<L, R>(right),
        Operation::Add => detect_addition_overflow(left, right),
        Operation::Subtract => detect_subtraction_overflow(left, right),
        Operation::Multiply => detect_multiplication_overflow(left, right),
        Operation::Divide => detect_division_overflow(left, right),
        Operation::Remainder => Verdict::NoOverflow,
        Operation::Negate => detect_negation_overflow(left),
    }
}

/// Detects overflow of `operation` applied to `left` and `right`, with the
/// type of `left` as the result type.
///
/// For `Operation::Assign` the value of `left` is ignored and `right` is
/// checked against the type of `left`. For `Operation::Negate` the value of
/// `right` is ignored. `Operation::Remainder` never overflows.
///
/// # Examples
///
/// ```rust
/// # use verint_core::detect::{Operation, Verdict, dynamic::{DynInt, detect}};
/// let verdict = detect(Operation::Add, DynInt::U8(250), DynInt::I32(6));
/// assert_eq!(verdict, Verdict::PositiveOverflow);
/// ```
pub fn detect(operation: Operation, left: DynInt, right: DynInt) -> Verdict {
    with_native!(left, |l| with_native!(right, |r| apply(operation, l, r)))
}

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

//! Operator implementations for `Verified`.
//!
//! Compound assignment is the primitive form; every binary operator copies
//! its left operand and applies the compound form to the copy.

use crate::{
    policy::{OverflowPolicy, raise},
    promote::Promote,
    verified::{Operand, Verified},
};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use verint_core::{detect::Operation, num::primitive::Primitive};

macro_rules! impl_operator {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $operation:expr) => {
        impl<T, P, O> $OpAssign<O> for Verified<T, P>
        where
            T: Primitive,
            P: OverflowPolicy,
            O: Operand<P>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: O) {
                match self.settle($operation, rhs) {
                    Ok(value) => self.value = value,
                    Err(error) => raise(error),
                }
            }
        }

        impl<T, P, R> $Op<R> for Verified<T, P>
        where
            T: Primitive,
            P: OverflowPolicy,
            R: Primitive,
        {
            type Output = Self;

            #[inline]
            fn $op(mut self, rhs: R) -> Self {
                self.$op_assign(rhs);
                self
            }
        }

        impl<L, R, P> $Op<Verified<R, P>> for Verified<L, P>
        where
            L: Promote<R>,
            R: Primitive,
            P: OverflowPolicy,
        {
            type Output = Verified<<L as Promote<R>>::Output, P>;

            /// Converts both operands into their common type, then applies
            /// the operation there.
            #[inline]
            fn $op(self, rhs: Verified<R, P>) -> Self::Output {
                let mut left = Verified::<<L as Promote<R>>::Output, P>::new(self);
                left.$op_assign(Verified::<<L as Promote<R>>::Output, P>::new(rhs));
                left
            }
        }

        impl_operator!(@native $Op, $op; u8, u16, u32, u64, i8, i16, i32, i64);
    };
    (@native $Op:ident, $op:ident; $($t:ty),*) => {
        $(
            impl<R, P> $Op<Verified<R, P>> for $t
            where
                $t: Promote<R>,
                R: Primitive,
                P: OverflowPolicy,
            {
                type Output = Verified<<$t as Promote<R>>::Output, P>;

                #[inline]
                fn $op(self, rhs: Verified<R, P>) -> Self::Output {
                    Verified::<$t, P>::from_native(self).$op(rhs)
                }
            }
        )*
    };
}

impl_operator!(Add, add, AddAssign, add_assign, Operation::Add);
impl_operator!(Sub, sub, SubAssign, sub_assign, Operation::Subtract);
impl_operator!(Mul, mul, MulAssign, mul_assign, Operation::Multiply);
impl_operator!(Div, div, DivAssign, div_assign, Operation::Divide);
impl_operator!(Rem, rem, RemAssign, rem_assign, Operation::Remainder);

impl<T, P> Neg for Verified<T, P>
where
    T: Primitive,
    P: OverflowPolicy,
{
    type Output = Self;

    /// Checked `0 - self`: `-MIN` overflows positively, and negating a
    /// non-zero unsigned value overflows negatively.
    #[inline]
    fn neg(self) -> Self {
        match self.settle(Operation::Negate, T::ZERO) {
            Ok(value) => Self::from_native(value),
            Err(error) => raise(error),
        }
    }
}

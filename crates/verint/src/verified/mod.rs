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

//! # Verified Integers
//!
//! `Verified<T, P>` stores exactly one native integer `T` and routes every
//! mutation through the detection engine and then the overflow policy `P`.
//! It is `Copy`, has the size and alignment of `T`, and converts back to `T`
//! without loss.
//!
//! Right operands may be any of the eight native integers or another
//! `Verified` value under the same policy, independent of their type. The
//! result of compound assignment always keeps the left type. Binary operators
//! between two `Verified` values of different types first convert both into
//! their common type (see `promote`), through the same checked assignment
//! path.

mod ops;

use crate::{
    error::OverflowError,
    policy::{DefaultPolicy, Outcome, OverflowPolicy, raise},
};
use num_traits::Bounded;
use std::{cmp::Ordering, hash::Hash, marker::PhantomData};
use verint_core::{
    detect::{
        Operation, Verdict, detect_addition_overflow, detect_assignment_overflow,
        detect_division_overflow, detect_multiplication_overflow, detect_negation_overflow,
        detect_subtraction_overflow,
    },
    num::{
        primitive::Primitive,
        wrapping::{wrapping_add, wrapping_div, wrapping_mul, wrapping_rem, wrapping_sub},
    },
};

/// A value usable as the right operand of a `Verified<_, P>` operation.
///
/// Implemented for every `Primitive` and for `Verified<_, P>` itself.
pub trait Operand<P>: Copy
where
    P: OverflowPolicy,
{
    type Native: Primitive;

    /// The native value taking part in the operation.
    fn native(self) -> Self::Native;

    /// Whether the operand carries the poison value of `P`. Native integers
    /// never do.
    #[inline(always)]
    fn poisoned(self) -> bool {
        false
    }
}

impl<T, P> Operand<P> for T
where
    T: Primitive,
    P: OverflowPolicy,
{
    type Native = T;

    #[inline(always)]
    fn native(self) -> T {
        self
    }
}

impl<T, P> Operand<P> for Verified<T, P>
where
    T: Primitive,
    P: OverflowPolicy,
{
    type Native = T;

    #[inline(always)]
    fn native(self) -> T {
        self.value
    }

    #[inline(always)]
    fn poisoned(self) -> bool {
        P::is_poisoned(self.value)
    }
}

/// An integer of type `T` whose arithmetic is checked for overflow, with
/// overflows handled by the policy `P`.
///
/// # Conversions
///
/// `new`, `assign` and `From<native>` run the value through the policy like
/// any other operation. Under `Throw` an out-of-range value therefore panics,
/// even through `From`/`Into`. `try_new` and `try_assign` return the
/// `OverflowError` instead.
///
/// # Examples
///
/// ```rust
/// use verint::{Saturate, Verified};
///
/// let mut level = Verified::<u8, Saturate>::new(250);
/// level += 2;
/// assert_eq!(level, 252);
/// level += 10;
/// assert_eq!(level, u8::MAX);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Default)]
pub struct Verified<T, P = DefaultPolicy> {
    value: T,
    policy: PhantomData<P>,
}

impl<T, P> Verified<T, P>
where
    T: Primitive,
    P: OverflowPolicy,
{
    /// The smallest value of `T`.
    pub const MIN: Self = Self::from_native(T::MIN);

    /// The largest value of `T`.
    pub const MAX: Self = Self::from_native(T::MAX);

    /// Wraps `value` directly. Never overflows, since `value` already is a `T`.
    #[inline(always)]
    pub const fn from_native(value: T) -> Self {
        Self {
            value,
            policy: PhantomData,
        }
    }

    /// Creates a value from any native integer or `Verified<_, P>`, checking
    /// that it fits `T`.
    ///
    /// # Panics
    ///
    /// Panics if the value does not fit and `P` reports an error, with the
    /// `OverflowError` as payload. Use `try_new` to get the error instead.
    #[inline]
    pub fn new<V>(value: V) -> Self
    where
        V: Operand<P>,
    {
        Self::from_native(settled(Self::default().settle(Operation::Assign, value)))
    }

    /// Creates a value from any native integer or `Verified<_, P>`, returning
    /// the error if `P` rejects it.
    #[inline]
    pub fn try_new<V>(value: V) -> Result<Self, OverflowError>
    where
        V: Operand<P>,
    {
        Self::default()
            .settle(Operation::Assign, value)
            .map(Self::from_native)
    }

    /// Returns the native value.
    #[inline(always)]
    pub const fn get(self) -> T {
        self.value
    }

    /// Replaces the value with `value`, converted and checked like `new`.
    #[inline]
    pub fn assign<V>(&mut self, value: V)
    where
        V: Operand<P>,
    {
        self.value = settled(self.settle(Operation::Assign, value));
    }

    /// Like `assign`, but returns the error and leaves `self` unchanged on
    /// failure.
    #[inline]
    pub fn try_assign<V>(&mut self, value: V) -> Result<(), OverflowError>
    where
        V: Operand<P>,
    {
        self.value = self.settle(Operation::Assign, value)?;
        Ok(())
    }

    /// Prefix increment: adds one and returns the new value.
    #[inline]
    pub fn inc(&mut self) -> Self {
        *self += T::ONE;
        *self
    }

    /// Prefix decrement: subtracts one and returns the new value.
    #[inline]
    pub fn dec(&mut self) -> Self {
        *self -= T::ONE;
        *self
    }

    /// Postfix increment: adds one and returns the previous value.
    #[inline]
    pub fn post_inc(&mut self) -> Self {
        let previous = *self;
        *self += T::ONE;
        previous
    }

    /// Postfix decrement: subtracts one and returns the previous value.
    #[inline]
    pub fn post_dec(&mut self) -> Self {
        let previous = *self;
        *self -= T::ONE;
        previous
    }

    /// `self + rhs`, or the overflow as an error.
    #[inline]
    pub fn try_add<O>(self, rhs: O) -> Result<Self, OverflowError>
    where
        O: Operand<P>,
    {
        self.settle(Operation::Add, rhs).map(Self::from_native)
    }

    /// `self - rhs`, or the overflow as an error.
    #[inline]
    pub fn try_sub<O>(self, rhs: O) -> Result<Self, OverflowError>
    where
        O: Operand<P>,
    {
        self.settle(Operation::Subtract, rhs).map(Self::from_native)
    }

    /// `self * rhs`, or the overflow as an error.
    #[inline]
    pub fn try_mul<O>(self, rhs: O) -> Result<Self, OverflowError>
    where
        O: Operand<P>,
    {
        self.settle(Operation::Multiply, rhs).map(Self::from_native)
    }

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    pub fn try_div<O>(self, rhs: O) -> Result<Self, OverflowError>
    where
        O: Operand<P>,
    {
        self.settle(Operation::Divide, rhs).map(Self::from_native)
    }

    /// The remainder is never out of range, so this only fails for policies
    /// that reject poisoned operands.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    pub fn try_rem<O>(self, rhs: O) -> Result<Self, OverflowError>
    where
        O: Operand<P>,
    {
        self.settle(Operation::Remainder, rhs).map(Self::from_native)
    }

    /// Checked `0 - self`.
    #[inline]
    pub fn try_neg(self) -> Result<Self, OverflowError> {
        self.settle(Operation::Negate, T::ZERO)
            .map(Self::from_native)
    }

    /// Runs the engine for `self <operation> rhs` and lets `P` decide the
    /// result. `Assign` checks `rhs` against `T` and ignores `self`; `Negate`
    /// ignores `rhs`.
    fn settle<O>(self, operation: Operation, rhs: O) -> Result<T, OverflowError>
    where
        O: Operand<P>,
    {
        let left = self.value;
        let right = rhs.native();

        let verdict = if P::DETECTS {
            match operation {
                Operation::Assign => detect_assignment_overflow::<T, O::Native>(right),
                Operation::Add => detect_addition_overflow(left, right),
                Operation::Subtract => detect_subtraction_overflow(left, right),
                Operation::Multiply => detect_multiplication_overflow(left, right),
                Operation::Divide => detect_division_overflow(left, right),
                Operation::Remainder => Verdict::NoOverflow,
                Operation::Negate => detect_negation_overflow(left),
            }
        } else {
            Verdict::NoOverflow
        };

        let attempted = match operation {
            Operation::Assign => right.cast_to::<T>(),
            Operation::Add => wrapping_add(left, right),
            Operation::Subtract => wrapping_sub(left, right),
            Operation::Multiply => wrapping_mul(left, right),
            Operation::Divide => wrapping_div(left, right),
            Operation::Remainder => wrapping_rem(left, right),
            Operation::Negate => wrapping_sub(T::ZERO, left),
        };

        let poisoned = match operation {
            Operation::Assign => rhs.poisoned(),
            Operation::Negate => P::is_poisoned(left),
            _ => P::is_poisoned(left) || rhs.poisoned(),
        };

        P::resolve(Outcome::new(operation, verdict, attempted).with_poison(poisoned))
    }
}

/// Unwraps a policy decision, raising the error as a panic payload.
#[inline(always)]
fn settled<T>(result: Result<T, OverflowError>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => raise(error),
    }
}

impl<T, P> PartialEq for Verified<T, P>
where
    T: Primitive,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T, P> Eq for Verified<T, P> where T: Primitive {}

impl<T, P> PartialOrd for Verified<T, P>
where
    T: Primitive,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P> Ord for Verified<T, P>
where
    T: Primitive,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T, P> Hash for Verified<T, P>
where
    T: Primitive,
{
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, P> Bounded for Verified<T, P>
where
    T: Primitive,
    P: OverflowPolicy,
{
    #[inline(always)]
    fn min_value() -> Self {
        Self::MIN
    }

    #[inline(always)]
    fn max_value() -> Self {
        Self::MAX
    }
}

impl<T, P> std::fmt::Debug for Verified<T, P>
where
    T: Primitive,
    P: OverflowPolicy,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Verified<{}, {}>({:?})", T::DESCRIPTOR, P::NAME, self.value)
    }
}

impl<T, P> std::fmt::Display for Verified<T, P>
where
    T: Primitive,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.value, f)
    }
}

macro_rules! impl_native_interop {
    ($($t:ty),*) => {
        $(
            impl<T, P> From<$t> for Verified<T, P>
            where
                T: Primitive,
                P: OverflowPolicy,
            {
                /// Checked conversion, see `Verified::new`.
                ///
                /// # Panics
                ///
                /// Unlike most `From` impls this is not infallible: a value
                /// outside the range of `T` panics under `Throw` (and under
                /// `Assert` in debug builds). Use `Verified::try_new` to get
                /// the `OverflowError` instead.
                #[inline]
                fn from(value: $t) -> Self {
                    Self::new(value)
                }
            }

            impl<P> From<Verified<$t, P>> for $t {
                #[inline(always)]
                fn from(value: Verified<$t, P>) -> Self {
                    value.value
                }
            }

            impl<P> PartialEq<$t> for Verified<$t, P> {
                #[inline]
                fn eq(&self, other: &$t) -> bool {
                    self.value == *other
                }
            }

            impl<P> PartialEq<Verified<$t, P>> for $t {
                #[inline]
                fn eq(&self, other: &Verified<$t, P>) -> bool {
                    *self == other.value
                }
            }

            impl<P> PartialOrd<$t> for Verified<$t, P> {
                #[inline]
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    self.value.partial_cmp(other)
                }
            }

            impl<P> PartialOrd<Verified<$t, P>> for $t {
                #[inline]
                fn partial_cmp(&self, other: &Verified<$t, P>) -> Option<Ordering> {
                    self.partial_cmp(&other.value)
                }
            }
        )*
    };
}

impl_native_interop!(u8, u16, u32, u64, i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{Ignore, Saturate, Sentinel, Throw, caught};

    #[test]
    fn test_layout_matches_native() {
        assert_eq!(std::mem::size_of::<Verified<u8, Throw>>(), 1);
        assert_eq!(std::mem::size_of::<Verified<i64, Sentinel>>(), 8);
        assert_eq!(std::mem::align_of::<Verified<u32, Saturate>>(), 4);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Verified::<i32, Throw>::default().get(), 0);
        assert_eq!(Verified::<u64, Saturate>::default(), 0u64);
    }

    #[test]
    fn test_new_checks_range() {
        assert_eq!(Verified::<u8, Throw>::new(255u32).get(), 255);
        assert_eq!(Verified::<i8, Throw>::new(-128i64).get(), -128);
        assert_eq!(
            Verified::<u8, Throw>::try_new(256u32),
            Err(OverflowError::Positive {
                operation: Operation::Assign,
                target: u8::DESCRIPTOR
            })
        );
        assert_eq!(
            Verified::<u8, Throw>::try_new(-1i8).unwrap_err().direction(),
            Verdict::NegativeOverflow
        );
    }

    #[test]
    fn test_new_raises_overflow_error() {
        let error = caught(|| Verified::<u16, Throw>::new(-1i32));
        assert_eq!(error.direction(), Verdict::NegativeOverflow);
        assert_eq!(error.target(), u16::DESCRIPTOR);
    }

    #[test]
    fn test_saturating_conversion() {
        assert_eq!(Verified::<u8, Saturate>::new(-1i16), 0u8);
        assert_eq!(Verified::<u8, Saturate>::new(256i16), 255u8);
        assert_eq!(Verified::<i8, Saturate>::new(u64::MAX), i8::MAX);
        assert_eq!(Verified::<i8, Saturate>::new(i64::MIN), i8::MIN);
    }

    #[test]
    fn test_from_native() {
        let value: Verified<i16, Throw> = 300u16.into();
        assert_eq!(value, 300i16);
        let native: i16 = value.into();
        assert_eq!(native, 300);
        assert_eq!(Verified::<u32, Throw>::from_native(7).get(), 7);
    }

    #[test]
    fn test_from_runs_the_policy() {
        let error = caught(|| Verified::<u8, Throw>::from(300u16));
        assert_eq!(
            error,
            OverflowError::Positive {
                operation: Operation::Assign,
                target: u8::DESCRIPTOR
            }
        );
        let error = caught(|| -> Verified<u32, Throw> { (-1i8).into() });
        assert_eq!(error.direction(), Verdict::NegativeOverflow);

        assert_eq!(Verified::<u8, Saturate>::from(300u16), u8::MAX);
        assert_eq!(Verified::<u8, Throw>::from(200u16), 200u8);
        assert!(Verified::<u8, Throw>::try_new(300u16).is_err());
    }

    #[test]
    fn test_assign() {
        let mut value = Verified::<u8, Throw>::new(1u8);
        value.assign(200i64);
        assert_eq!(value, 200u8);
        assert!(value.try_assign(300i32).is_err());
        assert_eq!(value, 200u8);
        value.assign(Verified::<i64, Throw>::new(17i64));
        assert_eq!(value, 17u8);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut value = Verified::<i8, Throw>::new(126i8);
        assert_eq!(value.inc(), 127i8);
        assert_eq!(value.post_dec(), 127i8);
        assert_eq!(value, 126i8);
        assert_eq!(value.post_inc(), 126i8);
        assert_eq!(value.dec(), 126i8);

        let mut max = Verified::<i8, Throw>::MAX;
        let error = caught(move || max.inc());
        assert_eq!(error.direction(), Verdict::PositiveOverflow);

        let mut zero = Verified::<u32, Saturate>::default();
        assert_eq!(zero.dec(), 0u32);
    }

    #[test]
    fn test_try_operations() {
        let value = Verified::<u8, Throw>::new(250u8);
        assert_eq!(value.try_add(5u8).unwrap(), 255u8);
        assert_eq!(
            value.try_add(6u8).unwrap_err().direction(),
            Verdict::PositiveOverflow
        );
        assert_eq!(
            value.try_sub(251u16).unwrap_err().direction(),
            Verdict::NegativeOverflow
        );
        assert_eq!(value.try_mul(2i8).unwrap_err().operation(), Operation::Multiply);
        assert_eq!(value.try_div(-1i8).unwrap_err().operation(), Operation::Divide);
        assert_eq!(value.try_rem(7i8).unwrap(), 5u8);
        assert_eq!(
            value.try_neg().unwrap_err().direction(),
            Verdict::NegativeOverflow
        );
        assert_eq!(Verified::<u8, Throw>::default().try_neg().unwrap(), 0u8);
    }

    #[test]
    fn test_negation_asymmetry() {
        assert_eq!(
            Verified::<i8, Throw>::MIN.try_neg().unwrap_err().direction(),
            Verdict::PositiveOverflow
        );
        assert_eq!(Verified::<i8, Throw>::MAX.try_neg().unwrap(), -127i8);
        assert_eq!(Verified::<i64, Saturate>::MIN.try_neg().unwrap(), i64::MAX);
    }

    #[test]
    fn test_ignore_wraps() {
        let value = Verified::<u8, Ignore>::new(300u16);
        assert_eq!(value, 44u8);
        assert_eq!(value.try_add(250u8).unwrap(), 38u8);
        assert_eq!(Verified::<i8, Ignore>::MIN.try_neg().unwrap(), i8::MIN);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "negative overflow in assignment")]
    fn test_assert_panics_on_conversion() {
        let _ = Verified::<u8, crate::policy::Assert>::new(-3i32);
    }

    #[test]
    fn test_sentinel_conversion_propagates_poison() {
        let poisoned = Verified::<u8, Sentinel>::new(1000u16);
        assert_eq!(poisoned, u8::MAX);
        // A poisoned u8 becomes a poisoned i64, not 255.
        assert_eq!(Verified::<i64, Sentinel>::new(poisoned), i64::MAX);
        // A native MAX is an ordinary number.
        assert_eq!(Verified::<i64, Sentinel>::new(u8::MAX), 255i64);
    }

    #[test]
    fn test_comparisons() {
        let small = Verified::<i32, Throw>::new(-5i32);
        let large = Verified::<i32, Throw>::new(5i32);
        assert!(small < large);
        assert!(small < 0i32);
        assert!(10i32 > large);
        assert_eq!(5i32, large);
        assert_eq!(small.max(large), large);
    }

    #[test]
    fn test_formatting() {
        let value = Verified::<i16, Saturate>::new(-42i16);
        assert_eq!(value.to_string(), "-42");
        assert_eq!(format!("{:>5}", value), "  -42");
        assert_eq!(format!("{:?}", value), "Verified<i16, saturate>(-42)");
    }

    #[test]
    fn test_bounded() {
        fn bounds<B: Bounded>() -> (B, B) {
            (B::min_value(), B::max_value())
        }
        let (min, max) = bounds::<Verified<i16, Throw>>();
        assert_eq!(min, i16::MIN);
        assert_eq!(max, i16::MAX);
        assert_eq!(bounds::<Verified<u64, Ignore>>().1, u64::MAX);
    }

    #[test]
    fn test_hash_matches_native() {
        use std::collections::HashSet;
        let set: HashSet<Verified<u16, Throw>> =
            [1u16, 2, 2, 3].into_iter().map(Verified::from_native).collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&Verified::from_native(2)));
    }
}

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

//! Integer primitives understood by the detection engine.
//!
//! The engine reasons about exactly eight native types: the 8, 16, 32 and
//! 64-bit integers in both signed and unsigned flavors. `Primitive` exposes
//! everything the engine needs to know about such a type as associated
//! constants, so strategy selection folds away at compile time, and provides
//! a bit-exact cast between any two of them that behaves like Rust's `as`.

use num_traits::{PrimInt, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Runtime description of an operand type: its width in bits and whether it
/// is signed.
///
/// # Examples
///
/// ```rust
/// # use verint_core::num::primitive::{Primitive, TypeDescriptor};
/// let d = TypeDescriptor::new(16, true);
/// assert_eq!(d, i16::DESCRIPTOR);
/// assert_eq!(d.to_string(), "i16");
/// assert!(d.is_wider_than(u8::DESCRIPTOR));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TypeDescriptor {
    bits: u32,
    signed: bool,
}

impl TypeDescriptor {
    /// Creates a new `TypeDescriptor`.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is not one of 8, 16, 32 or 64.
    #[inline]
    pub const fn new(bits: u32, signed: bool) -> Self {
        assert!(
            matches!(bits, 8 | 16 | 32 | 64),
            "TypeDescriptor: width must be 8, 16, 32 or 64 bits"
        );
        Self { bits, signed }
    }

    /// Creates a new `TypeDescriptor`, returning `None` for unsupported widths.
    #[inline]
    pub const fn try_new(bits: u32, signed: bool) -> Option<Self> {
        match bits {
            8 | 16 | 32 | 64 => Some(Self { bits, signed }),
            _ => None,
        }
    }

    /// Returns the width of the described type in bits.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Returns `true` if the described type is signed.
    #[inline(always)]
    pub const fn is_signed(self) -> bool {
        self.signed
    }

    /// Returns `true` if this type has strictly more bits than `other`.
    #[inline(always)]
    pub const fn is_wider_than(self, other: TypeDescriptor) -> bool {
        self.bits > other.bits
    }

    /// Returns the Rust name of the described type, e.g. `"u32"`.
    pub const fn name(self) -> &'static str {
        match (self.signed, self.bits) {
            (false, 8) => "u8",
            (false, 16) => "u16",
            (false, 32) => "u32",
            (false, _) => "u64",
            (true, 8) => "i8",
            (true, 16) => "i16",
            (true, 32) => "i32",
            (true, _) => "i64",
        }
    }
}

impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A native integer type the detection engine can reason about.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32` and `i64`.
/// The associated constants let generic code branch on signedness and width
/// in `const` context, which is how the engine selects its per-combination
/// strategy without any runtime cost.
pub trait Primitive:
    PrimInt
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + WrappingNeg
    + Debug
    + Display
    + Hash
    + Default
    + Send
    + Sync
    + 'static
{
    /// The unsigned type of the same width. Holds `|x|` for every `x: Self`.
    type Unsigned: Primitive;

    /// `true` for the signed primitives.
    const SIGNED: bool;
    /// Width in bits.
    const BITS: u32;
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;
    /// The value 0.
    const ZERO: Self;
    /// The value 1.
    const ONE: Self;
    /// Signedness and width as a runtime value.
    const DESCRIPTOR: TypeDescriptor = TypeDescriptor::new(Self::BITS, Self::SIGNED);

    /// Sign- or zero-extends `self` to 64 bits, following its own signedness.
    fn to_raw(self) -> u64;

    /// Truncates a 64-bit pattern to `Self`.
    fn from_raw(raw: u64) -> Self;

    /// Returns `true` if `self` is below zero. Always `false` for unsigned types.
    fn is_negative(self) -> bool;

    /// Returns `|self|` in the unsigned type of the same width. Exact for every
    /// value, including `MIN` of a signed type.
    fn magnitude(self) -> Self::Unsigned;

    /// Converts `self` to `T` with the semantics of an `as` cast: truncation
    /// when narrowing, sign or zero extension (by the source's signedness)
    /// when widening, reinterpretation at equal width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use verint_core::num::primitive::Primitive;
    /// assert_eq!((-1i8).cast_to::<u16>(), 0xFFFF);
    /// assert_eq!(0x1FFu16.cast_to::<u8>(), 0xFF);
    /// assert_eq!(200u8.cast_to::<i8>(), -56);
    /// ```
    #[inline(always)]
    fn cast_to<T>(self) -> T
    where
        T: Primitive,
    {
        T::from_raw(self.to_raw())
    }
}

macro_rules! impl_primitive_unsigned {
    ($t:ty) => {
        impl Primitive for $t {
            type Unsigned = $t;

            const SIGNED: bool = false;
            const BITS: u32 = <$t>::BITS;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline(always)]
            fn to_raw(self) -> u64 {
                self as u64
            }

            #[inline(always)]
            fn from_raw(raw: u64) -> Self {
                raw as $t
            }

            #[inline(always)]
            fn is_negative(self) -> bool {
                false
            }

            #[inline(always)]
            fn magnitude(self) -> $t {
                self
            }
        }
    };
}

macro_rules! impl_primitive_signed {
    ($t:ty, $u:ty) => {
        impl Primitive for $t {
            type Unsigned = $u;

            const SIGNED: bool = true;
            const BITS: u32 = <$t>::BITS;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline(always)]
            fn to_raw(self) -> u64 {
                self as i64 as u64
            }

            #[inline(always)]
            fn from_raw(raw: u64) -> Self {
                raw as $t
            }

            #[inline(always)]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[inline(always)]
            fn magnitude(self) -> $u {
                self.unsigned_abs()
            }
        }
    };
}

impl_primitive_unsigned!(u8);
impl_primitive_unsigned!(u16);
impl_primitive_unsigned!(u32);
impl_primitive_unsigned!(u64);

impl_primitive_signed!(i8, u8);
impl_primitive_signed!(i16, u16);
impl_primitive_signed!(i32, u32);
impl_primitive_signed!(i64, u64);

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor_of<T: Primitive>() -> TypeDescriptor {
        T::DESCRIPTOR
    }

    #[test]
    fn test_descriptors() {
        assert_eq!(descriptor_of::<u8>(), TypeDescriptor::new(8, false));
        assert_eq!(descriptor_of::<u64>(), TypeDescriptor::new(64, false));
        assert_eq!(descriptor_of::<i16>(), TypeDescriptor::new(16, true));
        assert_eq!(descriptor_of::<i32>().name(), "i32");
        assert!(i64::DESCRIPTOR.is_wider_than(u32::DESCRIPTOR));
        assert!(!u32::DESCRIPTOR.is_wider_than(i32::DESCRIPTOR));
    }

    #[test]
    fn test_try_new_rejects_unsupported_widths() {
        assert_eq!(TypeDescriptor::try_new(128, false), None);
        assert_eq!(TypeDescriptor::try_new(12, true), None);
        assert_eq!(TypeDescriptor::try_new(32, true), Some(i32::DESCRIPTOR));
    }

    #[test]
    #[should_panic(expected = "width must be 8, 16, 32 or 64 bits")]
    fn test_new_panics_on_unsupported_width() {
        let _ = TypeDescriptor::new(24, false);
    }

    #[test]
    fn test_cast_matches_as() {
        assert_eq!((-1i8).cast_to::<u64>(), -1i8 as u64);
        assert_eq!((-128i8).cast_to::<i64>(), -128);
        assert_eq!(u64::MAX.cast_to::<i8>(), -1);
        assert_eq!(0x8000u16.cast_to::<i16>(), i16::MIN);
        assert_eq!(i32::MIN.cast_to::<u16>(), 0);
        assert_eq!(300u32.cast_to::<u8>(), 44);
        assert_eq!(255u8.cast_to::<i32>(), 255);
    }

    #[test]
    fn test_magnitude_is_exact_at_min() {
        assert_eq!(i8::MIN.magnitude(), 128u8);
        assert_eq!(i64::MIN.magnitude(), 1u64 << 63);
        assert_eq!((-5i16).magnitude(), 5u16);
        assert_eq!(7u32.magnitude(), 7u32);
    }

    #[test]
    fn test_is_negative() {
        assert!(Primitive::is_negative(-1i32));
        assert!(!Primitive::is_negative(0i32));
        assert!(!Primitive::is_negative(u8::MAX));
    }
}

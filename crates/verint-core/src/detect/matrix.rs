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

//! Strategy selection for the detection engine.
//!
//! Every check depends on two facts about the operand types: their
//! signedness pair and which of them is wider. `Combination` captures both.
//! It is computed from associated constants in `const` context, so matching
//! on it inside a generic function leaves only the selected strategy in the
//! compiled code.

use crate::num::primitive::{Primitive, TypeDescriptor};

/// Relative width of the left (result) type and the right operand type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Width {
    /// The left type has strictly more bits.
    LeftWider,
    /// Both types have the same number of bits.
    Same,
    /// The right type has strictly more bits.
    RightWider,
}

impl Width {
    /// Compares the widths of two operand types.
    #[inline(always)]
    pub const fn between(left: TypeDescriptor, right: TypeDescriptor) -> Self {
        if left.is_wider_than(right) {
            Self::LeftWider
        } else if right.is_wider_than(left) {
            Self::RightWider
        } else {
            Self::Same
        }
    }
}

impl std::fmt::Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeftWider => write!(f, "LeftWider"),
            Self::Same => write!(f, "Same"),
            Self::RightWider => write!(f, "RightWider"),
        }
    }
}

/// One cell of the signedness x width matrix. The first word names the
/// signedness of the left (result) type, the second that of the right operand.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Combination {
    /// Both operands unsigned.
    UnsignedUnsigned(Width),
    /// Unsigned left operand, signed right operand.
    UnsignedSigned(Width),
    /// Signed left operand, unsigned right operand.
    SignedUnsigned(Width),
    /// Both operands signed.
    SignedSigned(Width),
}

impl Combination {
    /// Selects the cell for a pair of runtime type descriptors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use verint_core::detect::matrix::{Combination, Width};
    /// # use verint_core::num::primitive::Primitive;
    /// let c = Combination::select(u8::DESCRIPTOR, i32::DESCRIPTOR);
    /// assert_eq!(c, Combination::UnsignedSigned(Width::RightWider));
    /// ```
    #[inline(always)]
    pub const fn select(left: TypeDescriptor, right: TypeDescriptor) -> Self {
        let width = Width::between(left, right);
        match (left.is_signed(), right.is_signed()) {
            (false, false) => Self::UnsignedUnsigned(width),
            (false, true) => Self::UnsignedSigned(width),
            (true, false) => Self::SignedUnsigned(width),
            (true, true) => Self::SignedSigned(width),
        }
    }

    /// Selects the cell for a pair of primitive types.
    #[inline(always)]
    pub const fn of<L, R>() -> Self
    where
        L: Primitive,
        R: Primitive,
    {
        Self::select(L::DESCRIPTOR, R::DESCRIPTOR)
    }

    /// Returns the relative width component of this cell.
    #[inline(always)]
    pub const fn width(self) -> Width {
        match self {
            Self::UnsignedUnsigned(w)
            | Self::UnsignedSigned(w)
            | Self::SignedUnsigned(w)
            | Self::SignedSigned(w) => w,
        }
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsignedUnsigned(w) => write!(f, "UnsignedUnsigned({})", w),
            Self::UnsignedSigned(w) => write!(f, "UnsignedSigned({})", w),
            Self::SignedUnsigned(w) => write!(f, "SignedUnsigned({})", w),
            Self::SignedSigned(w) => write!(f, "SignedSigned({})", w),
        }
    }
}

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

//! Errors raised when an overflow policy refuses an out-of-range result.

use thiserror::Error;
use verint_core::{
    detect::{Operation, Verdict},
    num::primitive::TypeDescriptor,
};

/// An arithmetic operation whose exact result did not fit its target type.
///
/// Both directions share one type, so callers that only care whether an
/// overflow happened can match on `OverflowError` as a whole, and callers
/// that care about the direction can match on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum OverflowError {
    /// The exact result was greater than the maximum of `target`.
    #[error("positive overflow in {operation}: result exceeds the range of {target}")]
    Positive {
        operation: Operation,
        target: TypeDescriptor,
    },
    /// The exact result was less than the minimum of `target`.
    #[error("negative overflow in {operation}: result is below the range of {target}")]
    Negative {
        operation: Operation,
        target: TypeDescriptor,
    },
}

impl OverflowError {
    /// Builds the error matching `verdict`, or `None` for `Verdict::NoOverflow`.
    #[inline]
    pub const fn from_verdict(
        verdict: Verdict,
        operation: Operation,
        target: TypeDescriptor,
    ) -> Option<Self> {
        match verdict {
            Verdict::NoOverflow => None,
            Verdict::PositiveOverflow => Some(Self::Positive { operation, target }),
            Verdict::NegativeOverflow => Some(Self::Negative { operation, target }),
        }
    }

    /// The direction of the overflow, never `Verdict::NoOverflow`.
    #[inline]
    pub const fn direction(&self) -> Verdict {
        match self {
            Self::Positive { .. } => Verdict::PositiveOverflow,
            Self::Negative { .. } => Verdict::NegativeOverflow,
        }
    }

    /// The operation that overflowed.
    #[inline]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::Positive { operation, .. } | Self::Negative { operation, .. } => *operation,
        }
    }

    /// The type the result had to fit.
    #[inline]
    pub const fn target(&self) -> TypeDescriptor {
        match self {
            Self::Positive { target, .. } | Self::Negative { target, .. } => *target,
        }
    }
}

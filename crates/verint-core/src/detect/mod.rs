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

//! # Overflow Detection Engine
//!
//! Pure functions deciding whether an integer operation would leave the
//! range of its result type. Each entry point is generic over the result
//! type `L` and the right operand type `R`, which may differ in signedness
//! and width. None of them evaluate the operation itself, and none of them
//! widen beyond the larger of `L` and `R`, so they work unchanged at 64 bits.
//!
//! ## Submodules
//!
//! - `matrix`: `Combination` and `Width`, the strategy selector shared by all
//!   operations.
//! - `assignment`, `addition`, `subtraction`, `multiplication`, `division`,
//!   `negation`: One entry point per operation.
//! - `dynamic`: `DynInt` and `detect`, a runtime entry point for callers that
//!   only know operand types from tags.
//!
//! ## Verdicts
//!
//! Every call returns exactly one `Verdict`. The engine never fails, and it
//! never decides what happens next: that is the job of an overflow policy.
//!
//! Remainder is deliberately not checked. Its result always fits the
//! dividend's type, so no entry point exists for it.

pub mod addition;
pub mod assignment;
pub mod division;
pub mod dynamic;
pub mod matrix;
pub mod multiplication;
pub mod negation;
pub mod subtraction;

#[cfg(test)]
mod exhaustive;

pub use addition::detect_addition_overflow;
pub use assignment::detect_assignment_overflow;
pub use division::detect_division_overflow;
pub use multiplication::detect_multiplication_overflow;
pub use negation::detect_negation_overflow;
pub use subtraction::detect_subtraction_overflow;

/// The outcome of overflow detection for a single operation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Verdict {
    /// The exact result is representable in the result type.
    #[default]
    NoOverflow,
    /// The exact result exceeds the maximum of the result type.
    PositiveOverflow,
    /// The exact result is below the minimum of the result type.
    NegativeOverflow,
}

impl Verdict {
    /// `PositiveOverflow` if `overflows`, otherwise `NoOverflow`.
    #[inline(always)]
    pub const fn positive_if(overflows: bool) -> Self {
        if overflows {
            Self::PositiveOverflow
        } else {
            Self::NoOverflow
        }
    }

    /// `NegativeOverflow` if `overflows`, otherwise `NoOverflow`.
    #[inline(always)]
    pub const fn negative_if(overflows: bool) -> Self {
        if overflows {
            Self::NegativeOverflow
        } else {
            Self::NoOverflow
        }
    }

    /// Returns `true` for either overflow direction.
    #[inline(always)]
    pub const fn is_overflow(self) -> bool {
        !matches!(self, Self::NoOverflow)
    }

    /// The result exceeded the target's maximum.
    #[inline(always)]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::PositiveOverflow)
    }

    /// The result fell below the target's minimum.
    #[inline(always)]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::NegativeOverflow)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoOverflow => write!(f, "no overflow"),
            Self::PositiveOverflow => write!(f, "positive overflow"),
            Self::NegativeOverflow => write!(f, "negative overflow"),
        }
    }
}

/// The operation an overflow check or policy decision refers to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Operation {
    /// Construction, assignment or conversion from another native type.
    Assign,
    /// `+` and `+=`.
    Add,
    /// `-` and `-=`.
    Subtract,
    /// `*` and `*=`.
    Multiply,
    /// `/` and `/=`.
    Divide,
    /// Never overflow-checked.
    Remainder,
    /// Checked as `0 - value`.
    Negate,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assign => write!(f, "assignment"),
            Self::Add => write!(f, "addition"),
            Self::Subtract => write!(f, "subtraction"),
            Self::Multiply => write!(f, "multiplication"),
            Self::Divide => write!(f, "division"),
            Self::Remainder => write!(f, "remainder"),
            Self::Negate => write!(f, "negation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_predicates() {
        assert!(!Verdict::NoOverflow.is_overflow());
        assert!(Verdict::PositiveOverflow.is_overflow());
        assert!(Verdict::PositiveOverflow.is_positive());
        assert!(Verdict::NegativeOverflow.is_negative());
        assert!(!Verdict::NegativeOverflow.is_positive());
        assert_eq!(Verdict::default(), Verdict::NoOverflow);
    }

    #[test]
    fn test_verdict_constructors() {
        assert_eq!(Verdict::positive_if(true), Verdict::PositiveOverflow);
        assert_eq!(Verdict::negative_if(true), Verdict::NegativeOverflow);
        assert_eq!(Verdict::positive_if(false), Verdict::NoOverflow);
        assert_eq!(Verdict::negative_if(false), Verdict::NoOverflow);
    }

    #[test]
    fn test_display() {
        assert_eq!(Verdict::PositiveOverflow.to_string(), "positive overflow");
        assert_eq!(Operation::Multiply.to_string(), "multiplication");
        assert_eq!(Operation::Assign.to_string(), "assignment");
    }

    #[test]
    fn test_concrete_scenarios() {
        // unsigned 8-bit around 255
        assert_eq!(detect_addition_overflow(250u8, 5u8), Verdict::NoOverflow);
        assert_eq!(detect_addition_overflow(250u8, 6u8), Verdict::PositiveOverflow);

        // signed 8-bit at both ends
        assert_eq!(detect_addition_overflow(127i8, 1i8), Verdict::PositiveOverflow);
        assert_eq!(detect_addition_overflow(-128i8, -1i8), Verdict::NegativeOverflow);
        assert_eq!(detect_subtraction_overflow(-128i8, 1i8), Verdict::NegativeOverflow);

        assert_eq!(detect_division_overflow(-128i8, -1i8), Verdict::PositiveOverflow);
        assert_eq!(detect_subtraction_overflow(0u8, 1u8), Verdict::NegativeOverflow);

        assert_eq!(detect_multiplication_overflow(0x10i8, 16i8), Verdict::PositiveOverflow);
        assert_eq!(detect_multiplication_overflow(0x10i8, -16i8), Verdict::NegativeOverflow);

        assert_eq!(
            detect_assignment_overflow::<u8, u32>(0x100),
            Verdict::PositiveOverflow
        );
        assert_eq!(
            detect_assignment_overflow::<u8, i8>(-1),
            Verdict::NegativeOverflow
        );
    }

    #[test]
    fn test_twos_complement_asymmetry() {
        assert_eq!(detect_multiplication_overflow(i8::MIN, -1i8), Verdict::PositiveOverflow);
        assert_eq!(detect_division_overflow(i8::MIN, -1i8), Verdict::PositiveOverflow);
        assert_eq!(detect_negation_overflow(i8::MIN), Verdict::PositiveOverflow);
        assert_eq!(detect_negation_overflow(i8::MAX), Verdict::NoOverflow);
    }
}

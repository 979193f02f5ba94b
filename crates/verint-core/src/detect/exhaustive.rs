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

//! Checks every entry point against an exact `i128` oracle: exhaustively for
//! 8-bit operands, and over boundary and seeded random values for all 64
//! type pairs. Wherever the engine reports no overflow, the wrapped native
//! result must equal the exact one.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    detect::{
        Verdict, detect_addition_overflow, detect_assignment_overflow, detect_division_overflow,
        detect_multiplication_overflow, detect_negation_overflow, detect_subtraction_overflow,
    },
    num::{
        primitive::Primitive,
        wrapping::{wrapping_add, wrapping_div, wrapping_mul, wrapping_rem, wrapping_sub},
    },
};

const RANDOM_VALUES: usize = 48;

/// Bit patterns around every width's bounds. Truncated to each type by
/// `from_raw`, and negated, they hit `MIN`, `MAX`, `0`, `±1` and the bounds of
/// every narrower type.
const BOUNDARY_PATTERNS: [u64; 20] = [
    0,
    1,
    2,
    3,
    0x7F,
    0x80,
    0xFF,
    0x100,
    0x7FFF,
    0x8000,
    0xFFFF,
    0x1_0000,
    0x7FFF_FFFF,
    0x8000_0000,
    0xFFFF_FFFF,
    0x1_0000_0000,
    0x7FFF_FFFF_FFFF_FFFF,
    0x8000_0000_0000_0000,
    0xFFFF_FFFF_FFFF_FFFE,
    0xFFFF_FFFF_FFFF_FFFF,
];

fn exact<T: Primitive>(value: T) -> i128 {
    if T::SIGNED {
        value.to_raw() as i64 as i128
    } else {
        value.to_raw() as i128
    }
}

/// Formats the operands of a failing check. Only rendered on failure.
struct Case<L, R>(L, R);

impl<L: Primitive, R: Primitive> std::fmt::Display for Case<L, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}, {}{}", self.0, L::DESCRIPTOR, self.1, R::DESCRIPTOR)
    }
}

fn classify<L: Primitive>(exact_result: i128) -> Verdict {
    if exact_result > exact(L::MAX) {
        Verdict::PositiveOverflow
    } else if exact_result < exact(L::MIN) {
        Verdict::NegativeOverflow
    } else {
        Verdict::NoOverflow
    }
}

fn check_values<L, R>(left: L, right: R)
where
    L: Primitive,
    R: Primitive,
{
    let (l, r) = (exact(left), exact(right));
    let context = Case(left, right);

    let verdict = detect_assignment_overflow::<L, R>(right);
    assert_eq!(verdict, classify::<L>(r), "assign {}", context);
    if verdict == Verdict::NoOverflow {
        assert_eq!(exact(right.cast_to::<L>()), r, "assign sound {}", context);
    }

    let verdict = detect_addition_overflow(left, right);
    assert_eq!(verdict, classify::<L>(l + r), "add {}", context);
    if verdict == Verdict::NoOverflow {
        assert_eq!(exact(wrapping_add(left, right)), l + r, "add sound {}", context);
    }

    let verdict = detect_subtraction_overflow(left, right);
    assert_eq!(verdict, classify::<L>(l - r), "sub {}", context);
    if verdict == Verdict::NoOverflow {
        assert_eq!(exact(wrapping_sub(left, right)), l - r, "sub sound {}", context);
    }

    // Only u64 * u64 can leave the i128 range, and only upwards.
    let product = l.checked_mul(r);
    let verdict = detect_multiplication_overflow(left, right);
    match product {
        Some(product) => {
            assert_eq!(verdict, classify::<L>(product), "mul {}", context);
            if verdict == Verdict::NoOverflow {
                assert_eq!(exact(wrapping_mul(left, right)), product, "mul sound {}", context);
            }
        }
        None => assert_eq!(verdict, Verdict::PositiveOverflow, "mul {}", context),
    }

    if r != 0 {
        let verdict = detect_division_overflow(left, right);
        assert_eq!(verdict, classify::<L>(l / r), "div {}", context);
        if verdict == Verdict::NoOverflow {
            assert_eq!(exact(wrapping_div(left, right)), l / r, "div sound {}", context);
        }
        assert_eq!(exact(wrapping_rem(left, right)), l % r, "rem {}", context);
    }

    let verdict = detect_negation_overflow(left);
    assert_eq!(verdict, classify::<L>(-l), "neg {}", context);
    if verdict == Verdict::NoOverflow {
        assert_eq!(exact(wrapping_sub(L::ZERO, left)), -l, "neg sound {}", context);
    }
}

fn check_symmetry<T: Primitive>(a: T, b: T) {
    assert_eq!(
        detect_addition_overflow(a, b),
        detect_addition_overflow(b, a),
        "add symmetry {} {}",
        a,
        b
    );
    assert_eq!(
        detect_multiplication_overflow(a, b),
        detect_multiplication_overflow(b, a),
        "mul symmetry {} {}",
        a,
        b
    );
}

fn sample_values<T: Primitive>(rng: &mut ChaCha8Rng) -> Vec<T> {
    let mut values: Vec<T> = BOUNDARY_PATTERNS
        .iter()
        .flat_map(|&pattern| [T::from_raw(pattern), T::from_raw(pattern.wrapping_neg())])
        .collect();
    values.extend((0..RANDOM_VALUES).map(|_| T::from_raw(rng.random::<u64>())));
    // Small magnitudes make non-overflowing products and quotients likely.
    values.extend((0..RANDOM_VALUES).map(|_| T::from_raw(rng.random_range(0..=0x1FFu64))));
    values
}

fn check_all_bytes<L, R>()
where
    L: Primitive,
    R: Primitive,
{
    for a in 0..=u8::MAX {
        for b in 0..=u8::MAX {
            check_values(L::from_raw(a as u64), R::from_raw(b as u64));
        }
    }
}

fn check_sampled<L, R>()
where
    L: Primitive,
    R: Primitive,
{
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let lefts = sample_values::<L>(&mut rng);
    let rights = sample_values::<R>(&mut rng);
    for &left in &lefts {
        for &right in &rights {
            check_values(left, right);
        }
    }
}

fn check_sampled_symmetry<T: Primitive>() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let values = sample_values::<T>(&mut rng);
    for &a in &values {
        for &b in &values {
            check_symmetry(a, b);
        }
    }
}

macro_rules! for_each_pair {
    ($check:ident) => {
        for_each_pair!(@left $check; u8 u16 u32 u64 i8 i16 i32 i64);
    };
    (@left $check:ident; $($left:ident)*) => {
        $(for_each_pair!(@right $check, $left; u8 u16 u32 u64 i8 i16 i32 i64);)*
    };
    (@right $check:ident, $left:ident; $($right:ident)*) => {
        $($check::<$left, $right>();)*
    };
}

#[test]
fn test_exhaustive_8bit_pairs() {
    check_all_bytes::<u8, u8>();
    check_all_bytes::<u8, i8>();
    check_all_bytes::<i8, u8>();
    check_all_bytes::<i8, i8>();
}

#[test]
fn test_exhaustive_8bit_symmetry() {
    for a in 0..=u8::MAX {
        for b in 0..=u8::MAX {
            check_symmetry(a, b);
            check_symmetry(a as i8, b as i8);
        }
    }
}

#[test]
fn test_sampled_all_pairs() {
    for_each_pair!(check_sampled);
}

#[test]
fn test_sampled_symmetry() {
    check_sampled_symmetry::<u16>();
    check_sampled_symmetry::<u32>();
    check_sampled_symmetry::<u64>();
    check_sampled_symmetry::<i16>();
    check_sampled_symmetry::<i32>();
    check_sampled_symmetry::<i64>();
}

#[test]
fn test_assignment_boundaries() {
    fn check<L: Primitive>() {
        let max = exact(L::MAX);
        let min = exact(L::MIN);
        let assign_at = |value: i128| {
            if value >= 0 {
                detect_assignment_overflow::<L, u64>(value as u64)
            } else {
                detect_assignment_overflow::<L, i64>(value as i64)
            }
        };
        assert_eq!(assign_at(max), Verdict::NoOverflow);
        assert_eq!(assign_at(min), Verdict::NoOverflow);
        if max < u64::MAX as i128 {
            assert_eq!(assign_at(max + 1), Verdict::PositiveOverflow);
        }
        if min > i64::MIN as i128 {
            assert_eq!(assign_at(min - 1), Verdict::NegativeOverflow);
        }
    }
    check::<u8>();
    check::<u16>();
    check::<u32>();
    check::<u64>();
    check::<i8>();
    check::<i16>();
    check::<i32>();
    check::<i64>();
}

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
    error::OverflowError,
    policy::{Outcome, OverflowPolicy},
};
use log::debug;
use verint_core::{detect::Verdict, num::primitive::Primitive};

/// Clamps an overflowing result to the bound it crossed: `T::MAX` for
/// positive overflow, `T::MIN` for negative overflow.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Saturate;

impl OverflowPolicy for Saturate {
    const NAME: &'static str = "saturate";

    #[inline]
    fn resolve<T>(outcome: Outcome<T>) -> Result<T, OverflowError>
    where
        T: Primitive,
    {
        let value = match outcome.verdict {
            Verdict::NoOverflow => return Ok(outcome.attempted),
            Verdict::PositiveOverflow => T::MAX,
            Verdict::NegativeOverflow => T::MIN,
        };
        debug!(
            "{} overflow in {} saturated to {}{}",
            if outcome.verdict.is_positive() { "positive" } else { "negative" },
            outcome.operation,
            value,
            T::DESCRIPTOR
        );
        Ok(value)
    }
}

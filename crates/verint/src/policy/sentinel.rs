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
use log::{debug, trace};
use verint_core::num::primitive::Primitive;

/// Replaces an overflowing result with the sentinel `T::MAX`.
///
/// The sentinel is sticky: once a value holds `T::MAX`, every later result
/// computed from it is `T::MAX` as well, including division and remainder.
/// A right operand only propagates the sentinel when it is itself a
/// `Verified` value under this policy; native operands never do, since a
/// native `MAX` is an ordinary number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Sentinel;

impl OverflowPolicy for Sentinel {
    const NAME: &'static str = "sentinel";

    #[inline(always)]
    fn is_poisoned<T>(value: T) -> bool
    where
        T: Primitive,
    {
        value == T::MAX
    }

    #[inline]
    fn resolve<T>(outcome: Outcome<T>) -> Result<T, OverflowError>
    where
        T: Primitive,
    {
        if outcome.poisoned {
            trace!("sentinel propagated through {}", outcome.operation);
            return Ok(T::MAX);
        }
        if let Some(error) = outcome.error() {
            debug!("{}, storing sentinel {}", error, T::MAX);
            return Ok(T::MAX);
        }
        Ok(outcome.attempted)
    }
}

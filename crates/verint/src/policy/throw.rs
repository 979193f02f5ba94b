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
use verint_core::num::primitive::Primitive;

/// Reports every overflow as an `OverflowError`.
///
/// Fallible methods such as `Verified::try_add` return the error. Operators
/// cannot, so they raise it as a panic carrying the `OverflowError` as its
/// payload (see `policy::raise`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Throw;

impl OverflowPolicy for Throw {
    const NAME: &'static str = "throw";

    #[inline]
    fn resolve<T>(outcome: Outcome<T>) -> Result<T, OverflowError>
    where
        T: Primitive,
    {
        match outcome.error() {
            None => Ok(outcome.attempted),
            Some(error) => {
                debug!("{} ({} policy)", error, Self::NAME);
                Err(error)
            }
        }
    }
}

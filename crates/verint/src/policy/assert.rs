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

/// Treats an overflow as a bug.
///
/// With `debug_assertions` enabled an overflow panics with the error message.
/// Release builds keep the wrapped native result, exactly like plain integer
/// arithmetic. `resolve` never returns `Err`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Assert;

impl OverflowPolicy for Assert {
    const NAME: &'static str = "assert";

    #[inline]
    fn resolve<T>(outcome: Outcome<T>) -> Result<T, OverflowError>
    where
        T: Primitive,
    {
        if let Some(error) = outcome.error() {
            if cfg!(debug_assertions) {
                panic!("{}", error);
            }
            debug!("{}, keeping wrapped value {}", error, outcome.attempted);
        }
        Ok(outcome.attempted)
    }
}

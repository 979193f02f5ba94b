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

//! # Overflow Policies
//!
//! A policy decides what happens once the detection engine has judged an
//! operation. It receives an `Outcome`, holding the verdict together with the
//! wrapped native result, and turns it into the value to store or an
//! `OverflowError`. Policies are zero-sized markers used as the second type
//! parameter of `Verified`, so the decision is resolved at compile time.
//!
//! | Policy     | On overflow                                              |
//! |------------|----------------------------------------------------------|
//! | `Throw`    | `Err(OverflowError)`; operators raise it as a panic      |
//! | `Assert`   | panics with `debug_assertions`, wraps otherwise          |
//! | `Saturate` | clamps to the bound in the direction of the overflow     |
//! | `Sentinel` | collapses to `T::MAX`, which then poisons later results  |
//! | `Ignore`   | keeps the wrapped result; detection is skipped entirely  |

pub mod assert;
pub mod ignore;
pub mod saturate;
pub mod sentinel;
pub mod throw;

pub use assert::Assert;
pub use ignore::Ignore;
pub use saturate::Saturate;
pub use sentinel::Sentinel;
pub use throw::Throw;

use crate::error::OverflowError;
use std::fmt::Debug;
use std::hash::Hash;
use verint_core::{
    detect::{Operation, Verdict},
    num::primitive::Primitive,
};

/// The policy `Verified` uses when none is named.
#[cfg(not(feature = "unchecked"))]
pub type DefaultPolicy = Throw;

/// The policy `Verified` uses when none is named.
#[cfg(feature = "unchecked")]
pub type DefaultPolicy = Ignore;

/// Everything a policy needs to settle one operation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Outcome<T> {
    /// The operation that produced `attempted`.
    pub operation: Operation,
    /// The engine's judgement. Always `NoOverflow` for policies that do not
    /// detect.
    pub verdict: Verdict,
    /// The native result with two's complement wraparound.
    pub attempted: T,
    /// Whether an operand already carried the policy's poison value.
    pub poisoned: bool,
}

impl<T> Outcome<T>
where
    T: Primitive,
{
    /// An outcome with no poisoned operand.
    #[inline(always)]
    pub const fn new(operation: Operation, verdict: Verdict, attempted: T) -> Self {
        Self {
            operation,
            verdict,
            attempted,
            poisoned: false,
        }
    }

    /// Sets the poison flag.
    #[inline(always)]
    pub const fn with_poison(mut self, poisoned: bool) -> Self {
        self.poisoned = poisoned;
        self
    }

    /// The error describing this outcome, if the verdict is an overflow.
    #[inline]
    pub fn error(&self) -> Option<OverflowError> {
        OverflowError::from_verdict(self.verdict, self.operation, T::DESCRIPTOR)
    }
}

/// Decides the result of an operation from the engine's verdict.
pub trait OverflowPolicy:
    Clone + Copy + Default + Debug + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Human readable name, used in diagnostics.
    const NAME: &'static str;

    /// Whether the detection engine runs at all. When `false`, every outcome
    /// handed to `resolve` carries `Verdict::NoOverflow`.
    const DETECTS: bool = true;

    /// Returns `true` if `value` marks an earlier overflow that must
    /// propagate through further arithmetic.
    #[inline(always)]
    fn is_poisoned<T>(_value: T) -> bool
    where
        T: Primitive,
    {
        false
    }

    /// Produces the value to store, or the error to report.
    fn resolve<T>(outcome: Outcome<T>) -> Result<T, OverflowError>
    where
        T: Primitive;
}

/// Raises `error` as a panic whose payload is the `OverflowError` itself, so
/// callers of `std::panic::catch_unwind` can downcast it.
#[cold]
#[inline(never)]
pub fn raise(error: OverflowError) -> ! {
    std::panic::panic_any(error)
}

/// Runs `f`, expecting it to raise an `OverflowError` through `raise`.
#[cfg(test)]
pub(crate) fn caught<R>(f: impl FnOnce() -> R + std::panic::UnwindSafe) -> OverflowError {
    let payload = std::panic::catch_unwind(f)
        .err()
        .expect("operation did not panic");
    *payload
        .downcast::<OverflowError>()
        .expect("panic payload is not an OverflowError")
}

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

//! # Verint
//!
//! Fixed-width integers that detect arithmetic overflow and react to it
//! according to a policy chosen at the type level.
//!
//! ```rust
//! use verint::{OverflowError, Throw, Verified};
//!
//! let total = Verified::<u8, Throw>::new(250u8);
//! assert_eq!(total.try_add(5u8).unwrap(), 255u8);
//!
//! let error: OverflowError = total.try_add(6u8).unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "positive overflow in addition: result exceeds the range of u8"
//! );
//! ```
//!
//! ## Modules
//!
//! - `verified`: The `Verified<T, P>` wrapper and its operators.
//! - `policy`: `OverflowPolicy` and the `Throw`, `Assert`, `Saturate`,
//!   `Sentinel` and `Ignore` policies.
//! - `promote`: Common type resolution for mixed-type binary operators.
//! - `error`: `OverflowError`.
//! - `aliases`: Shorthands such as `SaturateInt<T>` and `VerifiedU8`.
//!
//! Detection itself lives in `verint_core`, re-exported here.
//!
//! ## Features
//!
//! - `unchecked`: Makes `DefaultPolicy` `Ignore`, so `Verified<T>` and the
//!   `VerifiedXX` aliases compile down to plain wrapping arithmetic.
//!
//! ## Logging
//!
//! Policies report overflows they absorb through the `log` facade at `debug`
//! level, and sentinel propagation at `trace` level. No logger is installed.

pub mod aliases;
pub mod error;
pub mod policy;
pub mod promote;
pub mod verified;

pub use verint_core;

pub use aliases::*;
pub use error::OverflowError;
pub use policy::{
    Assert, DefaultPolicy, Ignore, Outcome, OverflowPolicy, Saturate, Sentinel, Throw,
};
pub use promote::Promote;
pub use verified::{Operand, Verified};

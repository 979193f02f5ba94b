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

//! Shorthands for the common policy and type combinations.
//!
//! Conversions into these types through `From`/`Into` are checked like
//! `Verified::new`: under `ThrowInt` (and the `VerifiedXX` aliases without the
//! `unchecked` feature) an out-of-range value panics with an `OverflowError`
//! payload. Use `try_new` for a fallible conversion.

use crate::{
    policy::{Assert, Ignore, Saturate, Sentinel, Throw},
    verified::Verified,
};

/// Overflow is an `OverflowError`; `From` and operators panic with it.
pub type ThrowInt<T> = Verified<T, Throw>;
/// Overflow panics in debug builds and wraps in release builds.
pub type AssertInt<T> = Verified<T, Assert>;
/// Overflow clamps to the crossed bound.
pub type SaturateInt<T> = Verified<T, Saturate>;
/// Overflow collapses to the sticky sentinel `T::MAX`.
pub type SentinelInt<T> = Verified<T, Sentinel>;
/// Overflow wraps; detection is compiled away.
pub type IgnoreInt<T> = Verified<T, Ignore>;

/// `u8` under `DefaultPolicy`, which is `Ignore` when the `unchecked` feature
/// is enabled and `Throw` otherwise. Out-of-range `From` conversions panic
/// under `Throw`.
pub type VerifiedU8 = Verified<u8>;
/// `u16` under `DefaultPolicy`.
pub type VerifiedU16 = Verified<u16>;
/// `u32` under `DefaultPolicy`.
pub type VerifiedU32 = Verified<u32>;
/// `u64` under `DefaultPolicy`.
pub type VerifiedU64 = Verified<u64>;
/// `i8` under `DefaultPolicy`.
pub type VerifiedI8 = Verified<i8>;
/// `i16` under `DefaultPolicy`.
pub type VerifiedI16 = Verified<i16>;
/// `i32` under `DefaultPolicy`.
pub type VerifiedI32 = Verified<i32>;
/// `i64` under `DefaultPolicy`.
pub type VerifiedI64 = Verified<i64>;

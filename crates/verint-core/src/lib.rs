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

//! # Verint Core
//!
//! Overflow detection for fixed-width integer arithmetic. This crate answers a
//! single question: given an operation and two typed operands, would the exact
//! mathematical result fall outside the range of the result type, and if so,
//! in which direction? It never computes the overflowing result itself and
//! never relies on an integer type wider than the operands.
//!
//! ## Modules
//!
//! - `num`: The `Primitive` trait implemented for the eight supported native
//!   integers (`u8`..`u64`, `i8`..`i64`), their `TypeDescriptor`, and the
//!   wraparound arithmetic used to produce native results for mixed operands.
//! - `detect`: The detection engine. One entry point per operation
//!   (assignment, addition, subtraction, multiplication, division, negation),
//!   each dispatching over the signedness and relative width of its operand
//!   types, plus a runtime entry point over tagged values (`DynInt`).
//!
//! ## Guarantees
//!
//! Every entry point is total: for all operand values it returns exactly one
//! `Verdict`, and it never panics. A `Verdict::NoOverflow` means the wrapped
//! native result equals the exact result; any other verdict means the exact
//! result lies outside the result type in the reported direction.

pub mod detect;
pub mod num;

// Copyright 2015-2023 Swim Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Railway Oriented Programming
//!
//! This crate provides [`Outcome`], a value that is either a success or a failure, and a set of
//! combinators to chain computations over outcomes without unwinding on the first failure.
//! Failures are ordinary data: they flow through [`Outcome::map`] and [`Outcome::bind`]
//! untouched until they are explicitly consumed by [`Outcome::either`], [`Outcome::handle`] or
//! one of the matching combinators.
//!
//! When a failure type is a sequence of elementary failures (`Outcome<S, Vec<F>>`), outcomes can
//! be accumulated with [`Outcome::merge`] and [`aggregate`]. Accumulation never stops at the
//! first failure: every input is visited and every failure is retained, in input order.
//!
//! Values that may be absent (for instance, those crossing an API boundary as [`Option`]s) are
//! checked with [`require`] or the `try_*` factories, which report an [`ArgumentError`].

mod accumulate;
mod guard;
mod outcome;

pub use accumulate::aggregate;
pub use guard::{require, ArgumentError};
pub use outcome::Outcome;

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

//! # Asynchronous Outcome Combinators
//!
//! Combinators over [`Outcome`](maya_rop::Outcome) values where either the callbacks, or the
//! outcome itself, are produced asynchronously.
//!
//! * [`OutcomeAsyncExt`] applies asynchronous callbacks to an outcome that is already available.
//! * [`OutcomeFutureExt`] applies the same combinators to a future producing an outcome. Each of
//!   these awaits the outcome and then delegates to the corresponding [`OutcomeAsyncExt`]
//!   combinator.
//! * [`merge_async`] and [`aggregate_async`] accumulate failures across deferred outcomes.
//!
//! Every await point inside a combinator is governed by a [`ContextAffinity`], passed explicitly
//! to the `_with` forms of the combinators and defaulting to [`ContextAffinity::Any`]. A future
//! that may be absent should be checked with [`maya_rop::require`] before any combinator is
//! applied to it.

mod accumulate;
mod affinity;
mod deferred;
mod outcome;

pub use accumulate::{aggregate_async, aggregate_async_with, merge_async, merge_async_with};
pub use affinity::{ContextAffinity, ResumeExt, ResumeOn};
pub use deferred::OutcomeFutureExt;
pub use outcome::OutcomeAsyncExt;

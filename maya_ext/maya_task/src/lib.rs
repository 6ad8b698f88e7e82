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

//! # Concurrent Task Aggregation
//!
//! Utilities to run a collection of independent asynchronous operations concurrently, waiting for
//! every one of them to settle and reporting the failure of each operation that failed, rather
//! than only the first.

mod error;
mod join;
mod settled;

pub use error::{AggregateError, ConcurrencyError, TaskFailure};
pub use join::{run_all_concurrently, spawn_all_concurrently};
pub use settled::Settled;

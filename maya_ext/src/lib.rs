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

#[cfg(feature = "rop")]
pub use maya_rop as rop;

#[cfg(feature = "future")]
pub use maya_rop_future as future;

#[cfg(feature = "task")]
pub use maya_task as task;

/// Commonly used items, for glob import.
pub mod prelude {
    #[cfg(feature = "rop")]
    pub use maya_rop::{aggregate, require, ArgumentError, Outcome};

    #[cfg(feature = "future")]
    pub use maya_rop_future::{
        aggregate_async, merge_async, ContextAffinity, OutcomeAsyncExt, OutcomeFutureExt,
        ResumeExt,
    };

    #[cfg(feature = "task")]
    pub use maya_task::{
        run_all_concurrently, spawn_all_concurrently, AggregateError, ConcurrencyError,
        TaskFailure,
    };
}

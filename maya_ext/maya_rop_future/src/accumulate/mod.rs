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


use std::future::Future;

use futures::future::{join, join_all};
use maya_rop::{aggregate, Outcome};

use crate::{ContextAffinity, ResumeExt};

/// Merge a deferred accumulated outcome with another deferred outcome. Both are awaited
/// concurrently and then combined with [`Outcome::merge`].
pub async fn merge_async_with<S, F, Acc, Next>(
    accumulator: Acc,
    next: Next,
    affinity: ContextAffinity,
) -> Outcome<Vec<S>, Vec<F>>
where
    Acc: Future<Output = Outcome<Vec<S>, Vec<F>>>,
    Next: Future<Output = Outcome<S, Vec<F>>>,
{
    let (accumulator, next) = join(accumulator, next).resume_on(affinity).await;
    accumulator.merge(next)
}

pub async fn merge_async<S, F, Acc, Next>(accumulator: Acc, next: Next) -> Outcome<Vec<S>, Vec<F>>
where
    Acc: Future<Output = Outcome<Vec<S>, Vec<F>>>,
    Next: Future<Output = Outcome<S, Vec<F>>>,
{
    merge_async_with(accumulator, next, ContextAffinity::default()).await
}

/// Aggregate a collection of deferred outcomes. Every outcome is awaited, concurrently, and the
/// results are then combined, in the order of the collection, as by [`aggregate`].
pub async fn aggregate_async_with<S, F, I>(
    outcomes: I,
    affinity: ContextAffinity,
) -> Outcome<Vec<S>, Vec<F>>
where
    I: IntoIterator,
    I::Item: Future<Output = Outcome<S, Vec<F>>>,
{
    aggregate(join_all(outcomes).resume_on(affinity).await)
}

pub async fn aggregate_async<S, F, I>(outcomes: I) -> Outcome<Vec<S>, Vec<F>>
where
    I: IntoIterator,
    I::Item: Future<Output = Outcome<S, Vec<F>>>,
{
    aggregate_async_with(outcomes, ContextAffinity::default()).await
}

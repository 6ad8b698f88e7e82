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

use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use tracing::{debug, trace};

use crate::error::{AggregateError, ConcurrencyError, TaskFailure};
use crate::settled::Settled;

/// Run a collection of independent operations concurrently, on the current task, and wait for
/// all of them to settle.
///
/// No operation is cancelled or skipped because another has failed. If every operation succeeds,
/// their values are returned in the order of the collection, regardless of the order in which
/// they completed. Otherwise, the returned error holds the failure of every operation that
/// failed, in the order in which they settled.
///
/// # Arguments
/// * `operations` - The operations to run. Each may produce a [`Result`] or an
///   [`Outcome`](maya_rop::Outcome).
pub async fn run_all_concurrently<I, T, E>(operations: I) -> Result<Vec<T>, ConcurrencyError<E>>
where
    I: IntoIterator,
    I::Item: Future,
    <I::Item as Future>::Output: Settled<Value = T, Error = E>,
{
    join_settled(
        operations
            .into_iter()
            .map(|op| op.map(Settled::into_result)),
    )
    .await
}

/// Spawn each of a collection of independent operations as a task on the current tokio runtime
/// and wait for all of them to settle.
///
/// This behaves as [`run_all_concurrently`] except that the operations may run in parallel. If an
/// operation panics or its task is cancelled, this is recorded as a failure for that operation
/// alongside the errors of the others.
///
/// # Panics
/// If called outside of a tokio runtime.
pub async fn spawn_all_concurrently<I, T, E>(
    operations: I,
) -> Result<Vec<T>, ConcurrencyError<TaskFailure<E>>>
where
    I: IntoIterator,
    I::Item: Future + Send + 'static,
    <I::Item as Future>::Output: Settled<Value = T, Error = E> + Send + 'static,
{
    let handles = operations
        .into_iter()
        .map(tokio::spawn)
        .collect::<Vec<_>>();
    join_settled(handles.into_iter().map(|handle| {
        handle.map(|joined| match joined {
            Ok(output) => output.into_result().map_err(TaskFailure::Failed),
            Err(err) => {
                debug!(error = %err, "A spawned operation did not complete.");
                Err(TaskFailure::from(err))
            }
        })
    }))
    .await
}

async fn join_settled<I, Fut, T, E>(operations: I) -> Result<Vec<T>, ConcurrencyError<E>>
where
    I: Iterator<Item = Fut>,
    Fut: Future<Output = Result<T, E>>,
{
    let mut pending = operations
        .enumerate()
        .map(|(index, op)| op.map(move |result| (index, result)))
        .collect::<FuturesUnordered<_>>();

    let num_operations = pending.len();
    debug!(num_operations, "Waiting for concurrent operations to settle.");

    let mut values = (0..num_operations).map(|_| None).collect::<Vec<_>>();
    let mut errors = vec![];
    while let Some((index, result)) = pending.next().await {
        match result {
            Ok(value) => {
                if let Some(slot) = values.get_mut(index) {
                    *slot = Some(value);
                }
            }
            Err(err) => {
                trace!(index, "Concurrent operation failed.");
                errors.push(err);
            }
        }
    }

    collate(values, errors)
}

fn collate<T, E>(values: Vec<Option<T>>, errors: Vec<E>) -> Result<Vec<T>, ConcurrencyError<E>> {
    if errors.is_empty() {
        values
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or(ConcurrencyError::Unreachable)
    } else {
        debug!(
            num_failures = errors.len(),
            "Concurrent operations completed with failures."
        );
        Err(ConcurrencyError::Aggregate(AggregateError::new(errors)))
    }
}

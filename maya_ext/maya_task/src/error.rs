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

use std::any::Any;
use std::error::Error;
use std::fmt::{Display, Formatter};

use thiserror::Error;
use tokio::task::JoinError;

/// A single error wrapping every failure produced by a collection of concurrently executed
/// operations. The failures are held in the order in which the operations settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateError<E> {
    errors: Vec<E>,
}

impl<E> AggregateError<E> {
    pub fn new(errors: Vec<E>) -> Self {
        AggregateError { errors }
    }

    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<E> {
        self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.errors.iter()
    }
}

impl<E> IntoIterator for AggregateError<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<E: Display> Display for AggregateError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} concurrent operation(s) failed:", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, " [{}] {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl<E> Error for AggregateError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.errors.first().map(|e| e as &(dyn Error + 'static))
    }
}

/// Error type for the concurrent aggregation functions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConcurrencyError<E> {
    /// At least one operation failed.
    #[error("{0}")]
    Aggregate(AggregateError<E>),
    /// The operations finished without every result being recorded but no failure was captured.
    #[error("Concurrent operations finished in an inconsistent state: a result was lost without a recorded failure.")]
    Unreachable,
}

impl<E> ConcurrencyError<E> {
    /// The failures of the operations, in the order they settled. This is empty for
    /// [`ConcurrencyError::Unreachable`].
    pub fn errors(&self) -> &[E] {
        match self {
            ConcurrencyError::Aggregate(agg) => agg.errors(),
            ConcurrencyError::Unreachable => &[],
        }
    }
}

impl<E> From<AggregateError<E>> for ConcurrencyError<E> {
    fn from(err: AggregateError<E>) -> Self {
        ConcurrencyError::Aggregate(err)
    }
}

/// The failure of a single spawned operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskFailure<E> {
    /// The operation completed with an error.
    #[error("{0}")]
    Failed(E),
    /// The operation panicked.
    #[error("The operation panicked: {0}")]
    Panicked(String),
    /// The operation was cancelled before it completed.
    #[error("The operation was cancelled.")]
    Cancelled,
}

impl<E> From<JoinError> for TaskFailure<E> {
    fn from(err: JoinError) -> Self {
        match err.try_into_panic() {
            Ok(payload) => TaskFailure::Panicked(panic_message(payload)),
            Err(_) => TaskFailure::Cancelled,
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send + 'static>) -> String {
    match payload.downcast::<String>() {
        Ok(msg) => *msg,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(msg) => msg.to_string(),
            Err(_) => "<unknown panic payload>".to_string(),
        },
    }
}

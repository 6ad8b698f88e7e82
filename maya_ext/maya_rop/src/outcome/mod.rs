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

#[cfg(test)]
mod tests;

use crate::guard::{require, ArgumentError};

/// The result of a computation that may fail, where the failure is a value rather than a panic.
/// Exactly one of the success or failure payloads is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome<S, F> {
    /// The computation succeeded.
    Success(S),
    /// The computation failed.
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    /// Create a successful outcome.
    pub fn succeeded(success: S) -> Self {
        Outcome::Success(success)
    }

    /// Create a failed outcome.
    pub fn failed(failure: F) -> Self {
        Outcome::Failure(failure)
    }

    /// Create a successful outcome from a value that may be absent.
    pub fn try_succeeded(success: Option<S>) -> Result<Self, ArgumentError> {
        require(success, "success").map(Outcome::Success)
    }

    /// Create a failed outcome from a value that may be absent.
    pub fn try_failed(failure: Option<F>) -> Result<Self, ArgumentError> {
        require(failure, "failure").map(Outcome::Failure)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// The success payload, if this is a success.
    pub fn success(&self) -> Option<&S> {
        match self {
            Outcome::Success(s) => Some(s),
            Outcome::Failure(_) => None,
        }
    }

    /// The failure payload, if this is a failure.
    pub fn failure(&self) -> Option<&F> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(f) => Some(f),
        }
    }

    pub fn into_success(self) -> Option<S> {
        match self {
            Outcome::Success(s) => Some(s),
            Outcome::Failure(_) => None,
        }
    }

    pub fn into_failure(self) -> Option<F> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(f) => Some(f),
        }
    }

    pub fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Outcome::Success(s) => Outcome::Success(s),
            Outcome::Failure(f) => Outcome::Failure(f),
        }
    }

    pub fn into_result(self) -> Result<S, F> {
        self.into()
    }

    /// Transform the success payload. A failure is passed through unchanged.
    pub fn map<S2, Fun>(self, f: Fun) -> Outcome<S2, F>
    where
        Fun: FnOnce(S) -> S2,
    {
        match self {
            Outcome::Success(s) => Outcome::Success(f(s)),
            Outcome::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Transform the failure payload. A success is passed through unchanged.
    pub fn map_failure<F2, Fun>(self, f: Fun) -> Outcome<S, F2>
    where
        Fun: FnOnce(F) -> F2,
    {
        match self {
            Outcome::Success(s) => Outcome::Success(s),
            Outcome::Failure(e) => Outcome::Failure(f(e)),
        }
    }

    /// Chain a computation that may itself fail onto a success. A failure is passed through
    /// unchanged and the computation is not run.
    pub fn bind<S2, Fun>(self, f: Fun) -> Outcome<S2, F>
    where
        Fun: FnOnce(S) -> Outcome<S2, F>,
    {
        match self {
            Outcome::Success(s) => f(s),
            Outcome::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Select a continuation by variant. Exactly one of the branches is invoked.
    pub fn either<S2, F2, OnS, OnF>(self, on_success: OnS, on_failure: OnF) -> Outcome<S2, F2>
    where
        OnS: FnOnce(S) -> Outcome<S2, F2>,
        OnF: FnOnce(F) -> Outcome<S2, F2>,
    {
        match self {
            Outcome::Success(s) => on_success(s),
            Outcome::Failure(e) => on_failure(e),
        }
    }

    /// Run a side effect on a success and then return the outcome unchanged. Failures are not
    /// visited.
    pub fn tee<Fun>(self, f: Fun) -> Self
    where
        Fun: FnOnce(&S),
    {
        if let Outcome::Success(s) = &self {
            f(s);
        }
        self
    }

    /// Run a side effect on a failure and then return the outcome unchanged.
    pub fn tee_failure<Fun>(self, f: Fun) -> Self
    where
        Fun: FnOnce(&F),
    {
        if let Outcome::Failure(e) = &self {
            f(e);
        }
        self
    }

    /// Consume the outcome, running exactly one of the branches for its effect. Whatever the
    /// branches return is discarded.
    pub fn handle<A, B, OnS, OnF>(self, on_success: OnS, on_failure: OnF)
    where
        OnS: FnOnce(S) -> A,
        OnF: FnOnce(F) -> B,
    {
        match self {
            Outcome::Success(s) => {
                on_success(s);
            }
            Outcome::Failure(e) => {
                on_failure(e);
            }
        }
    }

    /// Consume the outcome, running `f` only if it is a success.
    pub fn match_success<A, Fun>(self, f: Fun)
    where
        Fun: FnOnce(S) -> A,
    {
        if let Outcome::Success(s) = self {
            f(s);
        }
    }

    /// Consume the outcome, running `f` only if it is a failure.
    pub fn match_failure<A, Fun>(self, f: Fun)
    where
        Fun: FnOnce(F) -> A,
    {
        if let Outcome::Failure(e) = self {
            f(e);
        }
    }

    /// The success payload or, for a failure, the provided alternative.
    pub fn value_or(self, alternative: S) -> S {
        match self {
            Outcome::Success(s) => s,
            Outcome::Failure(_) => alternative,
        }
    }
}

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(s) => Outcome::Success(s),
            Err(e) => Outcome::Failure(e),
        }
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    fn from(outcome: Outcome<S, F>) -> Self {
        match outcome {
            Outcome::Success(s) => Ok(s),
            Outcome::Failure(e) => Err(e),
        }
    }
}

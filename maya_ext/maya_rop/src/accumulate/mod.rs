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

use crate::Outcome;

impl<S, F> Outcome<S, F> {
    /// Lift the failure payload into a single element sequence so that the outcome can take
    /// part in accumulation.
    pub fn accumulating(self) -> Outcome<S, Vec<F>> {
        self.map_failure(|e| vec![e])
    }
}

impl<S, F> Outcome<S, Vec<F>> {
    /// Coerce the outcome into a failure. A success becomes a failure with no elements; a failure
    /// is returned as it is. This is only meaningful as an intermediate step of accumulation.
    pub fn to_failure(self) -> Self {
        match self {
            Outcome::Success(_) => Outcome::Failure(vec![]),
            failure => failure,
        }
    }
}

impl<S, F> Outcome<Vec<S>, Vec<F>> {
    /// Combine an accumulated outcome with another outcome.
    ///
    /// If both are successes, the success of `next` is appended to the accumulated successes.
    /// Otherwise the result is a failure consisting of the accumulated failures followed by the
    /// failures of `next`. Any success payloads are discarded in that case.
    pub fn merge(self, next: Outcome<S, Vec<F>>) -> Self {
        match (self, next) {
            (Outcome::Success(mut successes), Outcome::Success(s)) => {
                successes.push(s);
                Outcome::Success(successes)
            }
            (acc, next) => {
                let mut failures = acc.to_failure().into_failure().unwrap_or_default();
                failures.extend(next.to_failure().into_failure().unwrap_or_default());
                Outcome::Failure(failures)
            }
        }
    }
}

/// Aggregate a sequence of outcomes. The result will be a success, containing every success in
/// order, only if every outcome is a success. Otherwise, it will be a failure containing the
/// failures of every outcome, in order. Every element of the sequence is visited.
pub fn aggregate<S, F, I>(outcomes: I) -> Outcome<Vec<S>, Vec<F>>
where
    I: IntoIterator<Item = Outcome<S, Vec<F>>>,
{
    outcomes
        .into_iter()
        .fold(Outcome::Success(vec![]), Outcome::merge)
}

impl<S, F> FromIterator<Outcome<S, Vec<F>>> for Outcome<Vec<S>, Vec<F>> {
    fn from_iter<I: IntoIterator<Item = Outcome<S, Vec<F>>>>(iter: I) -> Self {
        aggregate(iter)
    }
}

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

use maya_rop::Outcome;

use crate::{ContextAffinity, ResumeExt};

/// Asynchronous combinators for an [`Outcome`] that is already available, where the callbacks
/// produce futures. Each combinator has a form taking an explicit [`ContextAffinity`] (suffixed
/// `_with`) and a form using the default affinity.
pub trait OutcomeAsyncExt<S, F>: Sized {
    /// Transform the success payload with an asynchronous function. A failure is passed through
    /// and `f` is not called.
    fn map_async_with<S2, Fun, Fut>(
        self,
        f: Fun,
        affinity: ContextAffinity,
    ) -> impl Future<Output = Outcome<S2, F>>
    where
        Fun: FnOnce(S) -> Fut,
        Fut: Future<Output = S2>;

    fn map_async<S2, Fun, Fut>(self, f: Fun) -> impl Future<Output = Outcome<S2, F>>
    where
        Fun: FnOnce(S) -> Fut,
        Fut: Future<Output = S2>,
    {
        self.map_async_with(f, ContextAffinity::default())
    }

    /// Chain an asynchronous computation that may fail onto a success. A failure is passed
    /// through and `f` is not called.
    fn bind_async_with<S2, Fun, Fut>(
        self,
        f: Fun,
        affinity: ContextAffinity,
    ) -> impl Future<Output = Outcome<S2, F>>
    where
        Fun: FnOnce(S) -> Fut,
        Fut: Future<Output = Outcome<S2, F>>;

    fn bind_async<S2, Fun, Fut>(self, f: Fun) -> impl Future<Output = Outcome<S2, F>>
    where
        Fun: FnOnce(S) -> Fut,
        Fut: Future<Output = Outcome<S2, F>>,
    {
        self.bind_async_with(f, ContextAffinity::default())
    }

    /// Select an asynchronous continuation by variant. Exactly one branch is invoked.
    fn either_async_with<S2, F2, OnS, OnF, FutS, FutF>(
        self,
        on_success: OnS,
        on_failure: OnF,
        affinity: ContextAffinity,
    ) -> impl Future<Output = Outcome<S2, F2>>
    where
        OnS: FnOnce(S) -> FutS,
        OnF: FnOnce(F) -> FutF,
        FutS: Future<Output = Outcome<S2, F2>>,
        FutF: Future<Output = Outcome<S2, F2>>;

    fn either_async<S2, F2, OnS, OnF, FutS, FutF>(
        self,
        on_success: OnS,
        on_failure: OnF,
    ) -> impl Future<Output = Outcome<S2, F2>>
    where
        OnS: FnOnce(S) -> FutS,
        OnF: FnOnce(F) -> FutF,
        FutS: Future<Output = Outcome<S2, F2>>,
        FutF: Future<Output = Outcome<S2, F2>>,
    {
        self.either_async_with(on_success, on_failure, ContextAffinity::default())
    }

    /// Run an asynchronous side effect on a success, then return the outcome unchanged.
    fn tee_async_with<Fun, Fut>(
        self,
        f: Fun,
        affinity: ContextAffinity,
    ) -> impl Future<Output = Outcome<S, F>>
    where
        Fun: FnOnce(&S) -> Fut,
        Fut: Future;

    fn tee_async<Fun, Fut>(self, f: Fun) -> impl Future<Output = Outcome<S, F>>
    where
        Fun: FnOnce(&S) -> Fut,
        Fut: Future,
    {
        self.tee_async_with(f, ContextAffinity::default())
    }

    /// Run an asynchronous side effect on a failure, then return the outcome unchanged.
    fn tee_failure_async_with<Fun, Fut>(
        self,
        f: Fun,
        affinity: ContextAffinity,
    ) -> impl Future<Output = Outcome<S, F>>
    where
        Fun: FnOnce(&F) -> Fut,
        Fut: Future;

    fn tee_failure_async<Fun, Fut>(self, f: Fun) -> impl Future<Output = Outcome<S, F>>
    where
        Fun: FnOnce(&F) -> Fut,
        Fut: Future,
    {
        self.tee_failure_async_with(f, ContextAffinity::default())
    }

    /// Consume the outcome, awaiting `on_success` for a success or calling `on_failure` for a
    /// failure. The results of the branches are discarded.
    fn handle_async_with<A, OnS, OnF, Fut>(
        self,
        on_success: OnS,
        on_failure: OnF,
        affinity: ContextAffinity,
    ) -> impl Future<Output = ()>
    where
        OnS: FnOnce(S) -> Fut,
        OnF: FnOnce(F) -> A,
        Fut: Future;

    fn handle_async<A, OnS, OnF, Fut>(
        self,
        on_success: OnS,
        on_failure: OnF,
    ) -> impl Future<Output = ()>
    where
        OnS: FnOnce(S) -> Fut,
        OnF: FnOnce(F) -> A,
        Fut: Future,
    {
        self.handle_async_with(on_success, on_failure, ContextAffinity::default())
    }

    /// Consume the outcome, awaiting `f` only for a success.
    fn match_success_async_with<Fun, Fut>(
        self,
        f: Fun,
        affinity: ContextAffinity,
    ) -> impl Future<Output = ()>
    where
        Fun: FnOnce(S) -> Fut,
        Fut: Future;

    fn match_success_async<Fun, Fut>(self, f: Fun) -> impl Future<Output = ()>
    where
        Fun: FnOnce(S) -> Fut,
        Fut: Future,
    {
        self.match_success_async_with(f, ContextAffinity::default())
    }

    /// Consume the outcome, awaiting `f` only for a failure.
    fn match_failure_async_with<Fun, Fut>(
        self,
        f: Fun,
        affinity: ContextAffinity,
    ) -> impl Future<Output = ()>
    where
        Fun: FnOnce(F) -> Fut,
        Fut: Future;

    fn match_failure_async<Fun, Fut>(self, f: Fun) -> impl Future<Output = ()>
    where
        Fun: FnOnce(F) -> Fut,
        Fut: Future,
    {
        self.match_failure_async_with(f, ContextAffinity::default())
    }
}

impl<S, F> OutcomeAsyncExt<S, F> for Outcome<S, F> {
    fn map_async_with<S2, Fun, Fut>(
        self,
        f: Fun,
        affinity: ContextAffinity,
    ) -> impl Future<Output = Outcome<S2, F>>
    where
        Fun: FnOnce(S) -> Fut,
        Fut: Future<Output = S2>,
    {
        async move {
            match self {
                Outcome::Success(s) => Outcome::Success(f(s).resume_on(affinity).await),
                Outcome::Failure(e) => Outcome::Failure(e),
            }
        }
    }

    fn bind_async_with<S2, Fun, Fut>(
        self,
        f: Fun,
        affinity: ContextAffinity,
    ) -> impl Future<Output = Outcome<S2, F>>
    where
        Fun: FnOnce(S) -> Fut,
        Fut: Future<Output = Outcome<S2, F>>,
    {
        async move {
            match self {
                Outcome::Success(s) => f(s).resume_on(affinity).await,
                Outcome::Failure(e) => Outcome::Failure(e),
            }
        }
    }

    fn either_async_with<S2, F2, OnS, OnF, FutS, FutF>(
        self,
        on_success: OnS,
        on_failure: OnF,
        affinity: ContextAffinity,
    ) -> impl Future<Output = Outcome<S2, F2>>
    where
        OnS: FnOnce(S) -> FutS,
        OnF: FnOnce(F) -> FutF,
        FutS: Future<Output = Outcome<S2, F2>>,
        FutF: Future<Output = Outcome<S2, F2>>,
    {
        async move {
            match self {
                Outcome::Success(s) => on_success(s).resume_on(affinity).await,
                Outcome::Failure(e) => on_failure(e).resume_on(affinity).await,
            }
        }
    }

    fn tee_async_with<Fun, Fut>(
        self,
        f: Fun,
        affinity: ContextAffinity,
    ) -> impl Future<Output = Outcome<S, F>>
    where
        Fun: FnOnce(&S) -> Fut,
        Fut: Future,
    {
        async move {
            if let Outcome::Success(s) = &self {
                f(s).resume_on(affinity).await;
            }
            self
        }
    }

    fn tee_failure_async_with<Fun, Fut>(
        self,
        f: Fun,
        affinity: ContextAffinity,
    ) -> impl Future<Output = Outcome<S, F>>
    where
        Fun: FnOnce(&F) -> Fut,
        Fut: Future,
    {
        async move {
            if let Outcome::Failure(e) = &self {
                f(e).resume_on(affinity).await;
            }
            self
        }
    }

    fn handle_async_with<A, OnS, OnF, Fut>(
        self,
        on_success: OnS,
        on_failure: OnF,
        affinity: ContextAffinity,
    ) -> impl Future<Output = ()>
    where
        OnS: FnOnce(S) -> Fut,
        OnF: FnOnce(F) -> A,
        Fut: Future,
    {
        async move {
            match self {
                Outcome::Success(s) => {
                    on_success(s).resume_on(affinity).await;
                }
                Outcome::Failure(e) => {
                    on_failure(e);
                }
            }
        }
    }

    fn match_success_async_with<Fun, Fut>(
        self,
        f: Fun,
        affinity: ContextAffinity,
    ) -> impl Future<Output = ()>
    where
        Fun: FnOnce(S) -> Fut,
        Fut: Future,
    {
        async move {
            if let Outcome::Success(s) = self {
                f(s).resume_on(affinity).await;
            }
        }
    }

    fn match_failure_async_with<Fun, Fut>(
        self,
        f: Fun,
        affinity: ContextAffinity,
    ) -> impl Future<Output = ()>
    where
        Fun: FnOnce(F) -> Fut,
        Fut: Future,
    {
        async move {
            if let Outcome::Failure(e) = self {
                f(e).resume_on(affinity).await;
            }
        }
    }
}

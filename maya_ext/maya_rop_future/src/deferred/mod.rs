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

use crate::{ContextAffinity, OutcomeAsyncExt, ResumeExt};

/// Combinators for a future that produces an [`Outcome`]. Each combinator first awaits the
/// outcome and then delegates to the [`OutcomeAsyncExt`] (or, for immediate callbacks, the
/// [`Outcome`]) combinator of the same name, so no callback is invoked before the outcome is
/// fully resolved.
///
/// Each combinator has a form taking an explicit [`ContextAffinity`] (suffixed `_with`), which is
/// applied to the initial await and to every await of the delegated combinator, and a form using
/// the default affinity.
pub trait OutcomeFutureExt<S, F>: Future<Output = Outcome<S, F>> + Sized {
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
            self.resume_on(affinity)
                .await
                .map_async_with(f, affinity)
                .resume_on(affinity)
                .await
        }
    }

    fn map_async<S2, Fun, Fut>(self, f: Fun) -> impl Future<Output = Outcome<S2, F>>
    where
        Fun: FnOnce(S) -> Fut,
        Fut: Future<Output = S2>,
    {
        OutcomeFutureExt::map_async_with(self, f, ContextAffinity::default())
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
            self.resume_on(affinity)
                .await
                .bind_async_with(f, affinity)
                .resume_on(affinity)
                .await
        }
    }

    fn bind_async<S2, Fun, Fut>(self, f: Fun) -> impl Future<Output = Outcome<S2, F>>
    where
        Fun: FnOnce(S) -> Fut,
        Fut: Future<Output = Outcome<S2, F>>,
    {
        OutcomeFutureExt::bind_async_with(self, f, ContextAffinity::default())
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
            self.resume_on(affinity)
                .await
                .either_async_with(on_success, on_failure, affinity)
                .resume_on(affinity)
                .await
        }
    }

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
        OutcomeFutureExt::either_async_with(
            self,
            on_success,
            on_failure,
            ContextAffinity::default(),
        )
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
            self.resume_on(affinity)
                .await
                .handle_async_with(on_success, on_failure, affinity)
                .resume_on(affinity)
                .await
        }
    }

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
        OutcomeFutureExt::handle_async_with(
            self,
            on_success,
            on_failure,
            ContextAffinity::default(),
        )
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
            self.resume_on(affinity)
                .await
                .match_success_async_with(f, affinity)
                .resume_on(affinity)
                .await
        }
    }

    fn match_success_async<Fun, Fut>(self, f: Fun) -> impl Future<Output = ()>
    where
        Fun: FnOnce(S) -> Fut,
        Fut: Future,
    {
        OutcomeFutureExt::match_success_async_with(self, f, ContextAffinity::default())
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
            self.resume_on(affinity)
                .await
                .match_failure_async_with(f, affinity)
                .resume_on(affinity)
                .await
        }
    }

    fn match_failure_async<Fun, Fut>(self, f: Fun) -> impl Future<Output = ()>
    where
        Fun: FnOnce(F) -> Fut,
        Fut: Future,
    {
        OutcomeFutureExt::match_failure_async_with(self, f, ContextAffinity::default())
    }

    /// The success payload or, for a failure, the provided alternative.
    fn value_or_async_with(
        self,
        alternative: S,
        affinity: ContextAffinity,
    ) -> impl Future<Output = S> {
        async move { self.resume_on(affinity).await.value_or(alternative) }
    }

    fn value_or_async(self, alternative: S) -> impl Future<Output = S> {
        self.value_or_async_with(alternative, ContextAffinity::default())
    }

    /// Await `f` if the outcome is a success and then return the outcome unchanged.
    fn run_when_success_async_with<Fun, Fut>(
        self,
        f: Fun,
        affinity: ContextAffinity,
    ) -> impl Future<Output = Outcome<S, F>>
    where
        Fun: FnOnce(&S) -> Fut,
        Fut: Future,
    {
        async move {
            self.resume_on(affinity)
                .await
                .tee_async_with(f, affinity)
                .resume_on(affinity)
                .await
        }
    }

    fn run_when_success_async<Fun, Fut>(self, f: Fun) -> impl Future<Output = Outcome<S, F>>
    where
        Fun: FnOnce(&S) -> Fut,
        Fut: Future,
    {
        self.run_when_success_async_with(f, ContextAffinity::default())
    }

    /// Call `f` if the outcome is a success and then return the outcome unchanged.
    fn run_when_success_with<Fun>(
        self,
        f: Fun,
        affinity: ContextAffinity,
    ) -> impl Future<Output = Outcome<S, F>>
    where
        Fun: FnOnce(&S),
    {
        async move { self.resume_on(affinity).await.tee(f) }
    }

    fn run_when_success<Fun>(self, f: Fun) -> impl Future<Output = Outcome<S, F>>
    where
        Fun: FnOnce(&S),
    {
        self.run_when_success_with(f, ContextAffinity::default())
    }

    /// Await `f` if the outcome is a failure and then return the outcome unchanged.
    fn run_when_failure_async_with<Fun, Fut>(
        self,
        f: Fun,
        affinity: ContextAffinity,
    ) -> impl Future<Output = Outcome<S, F>>
    where
        Fun: FnOnce(&F) -> Fut,
        Fut: Future,
    {
        async move {
            self.resume_on(affinity)
                .await
                .tee_failure_async_with(f, affinity)
                .resume_on(affinity)
                .await
        }
    }

    fn run_when_failure_async<Fun, Fut>(self, f: Fun) -> impl Future<Output = Outcome<S, F>>
    where
        Fun: FnOnce(&F) -> Fut,
        Fut: Future,
    {
        self.run_when_failure_async_with(f, ContextAffinity::default())
    }

    /// Call `f` if the outcome is a failure and then return the outcome unchanged.
    fn run_when_failure_with<Fun>(
        self,
        f: Fun,
        affinity: ContextAffinity,
    ) -> impl Future<Output = Outcome<S, F>>
    where
        Fun: FnOnce(&F),
    {
        async move { self.resume_on(affinity).await.tee_failure(f) }
    }

    fn run_when_failure<Fun>(self, f: Fun) -> impl Future<Output = Outcome<S, F>>
    where
        Fun: FnOnce(&F),
    {
        self.run_when_failure_with(f, ContextAffinity::default())
    }
}

impl<S, F, D> OutcomeFutureExt<S, F> for D where D: Future<Output = Outcome<S, F>> {}

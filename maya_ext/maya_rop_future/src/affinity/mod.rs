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
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::ready;
use pin_project::pin_project;

/// Determines where the continuation after an await point is resumed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextAffinity {
    /// The continuation runs inline, in whichever poll completed the awaited value.
    #[default]
    Any,
    /// When the awaited value completes, the continuation is posted back to the awaiting task
    /// (its waker is woken and it yields once) and only resumes when that task is next polled.
    Captured,
}

impl ContextAffinity {
    pub fn is_captured(&self) -> bool {
        matches!(self, ContextAffinity::Captured)
    }
}

impl From<bool> for ContextAffinity {
    fn from(continue_on_captured_context: bool) -> Self {
        if continue_on_captured_context {
            ContextAffinity::Captured
        } else {
            ContextAffinity::Any
        }
    }
}

/// The type returned by [`ResumeExt::resume_on`].
#[pin_project]
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct ResumeOn<Fut: Future> {
    #[pin]
    inner: Fut,
    affinity: ContextAffinity,
    output: Option<Fut::Output>,
}

impl<Fut: Future> ResumeOn<Fut> {
    pub fn new(inner: Fut, affinity: ContextAffinity) -> Self {
        ResumeOn {
            inner,
            affinity,
            output: None,
        }
    }
}

impl<Fut: Future> Future for ResumeOn<Fut> {
    type Output = Fut::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let projected = self.project();
        if let Some(output) = projected.output.take() {
            return Poll::Ready(output);
        }
        let output = ready!(projected.inner.poll(cx));
        match projected.affinity {
            ContextAffinity::Any => Poll::Ready(output),
            ContextAffinity::Captured => {
                *projected.output = Some(output);
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }
}

/// Extension trait to attach a [`ContextAffinity`] to any future.
pub trait ResumeExt: Future + Sized {
    /// Await this future, resuming according to `affinity` once it completes.
    fn resume_on(self, affinity: ContextAffinity) -> ResumeOn<Self> {
        ResumeOn::new(self, affinity)
    }
}

impl<Fut: Future> ResumeExt for Fut {}

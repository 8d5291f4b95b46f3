//! Asynchronous counterparts of the outcome combinators.
//!
//! Semantics are identical to the synchronous forms; the only suspension
//! points are the awaits on caller-supplied futures. The library introduces
//! no executor, no spawning, and no synchronization of its own, so these
//! combinators are safe to await from single-threaded hosts.
//!
//! The inspection variants take owned views (a cloned payload, cause, or
//! outcome) because a borrowed async callback cannot be expressed without
//! boxing the future.

use super::{Outcome, OutcomeState};
use crate::fault::Fault;
use futures::FutureExt;
use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};

impl<T> Outcome<T> {
    /// Asynchronous [`Outcome::then`]: on success, await `next`; on failure,
    /// pass the failure through re-typed without invoking it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Outcome;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let outcome = Outcome::succeed_with(5)
    ///     .then_async(|n| async move { Outcome::succeed_with(n * 2) })
    ///     .await;
    /// assert_eq!(outcome.value(), Some(&10));
    /// # });
    /// ```
    pub async fn then_async<U, F, Fut>(self, next: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self.state {
            OutcomeState::Succeeded(value) => next(value).await,
            OutcomeState::Failed(cause) => Outcome::from_failure_parts(self.message, cause),
        }
    }

    /// Asynchronous [`Outcome::when`].
    pub async fn when_async<F, Fut>(self, condition: bool, next: F) -> Outcome<T>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        if !condition {
            return self;
        }
        self.then_async(next).await
    }

    /// Asynchronous [`Outcome::on_success`]; the side effect receives a
    /// clone of the payload. Panics are not caught.
    pub async fn on_success_async<F, Fut>(self, side_effect: F) -> Self
    where
        T: Clone,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let OutcomeState::Succeeded(value) = &self.state {
            side_effect(value.clone()).await;
        }
        self
    }

    /// Asynchronous [`Outcome::on_failure`]; the side effect receives a
    /// clone of the optional cause. Panics are not caught.
    pub async fn on_failure_async<F, Fut>(self, side_effect: F) -> Self
    where
        F: FnOnce(Option<Fault>) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let OutcomeState::Failed(cause) = &self.state {
            side_effect(cause.clone()).await;
        }
        self
    }

    /// Asynchronous [`Outcome::on_both`]; the side effect receives a clone
    /// of the whole outcome. Panics are not caught.
    pub async fn on_both_async<F, Fut>(self, side_effect: F) -> Self
    where
        T: Clone,
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = ()>,
    {
        side_effect(self.clone()).await;
        self
    }

    /// Asynchronous [`Outcome::fold`]: awaits whichever branch is selected.
    pub async fn fold_async<R, S, FutS, F, FutF>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> FutS,
        FutS: Future<Output = R>,
        F: FnOnce(Option<Fault>) -> FutF,
        FutF: Future<Output = R>,
    {
        match self.state {
            OutcomeState::Succeeded(value) => on_success(value).await,
            OutcomeState::Failed(cause) => on_failure(cause).await,
        }
    }

    /// Asynchronous [`Outcome::map`]: a panic while building or awaiting
    /// the mapper's future is captured into a failing outcome.
    pub async fn map_async<U, F, Fut>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.state {
            OutcomeState::Succeeded(value) => {
                let future = match catch_unwind(AssertUnwindSafe(move || mapper(value))) {
                    Ok(future) => future,
                    Err(payload) => return Outcome::from_fault(Fault::from_panic(payload)),
                };
                match AssertUnwindSafe(future).catch_unwind().await {
                    Ok(mapped) => Outcome {
                        message: self.message,
                        state: OutcomeState::Succeeded(mapped),
                    },
                    Err(payload) => Outcome::from_fault(Fault::from_panic(payload)),
                }
            }
            OutcomeState::Failed(cause) => Outcome::from_failure_parts(self.message, cause),
        }
    }

    /// Asynchronous [`Outcome::flat_map`], with the same capture policy as
    /// [`Outcome::map_async`].
    pub async fn flat_map_async<U, F, Fut>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self.state {
            OutcomeState::Succeeded(value) => {
                let future = match catch_unwind(AssertUnwindSafe(move || mapper(value))) {
                    Ok(future) => future,
                    Err(payload) => return Outcome::from_fault(Fault::from_panic(payload)),
                };
                match AssertUnwindSafe(future).catch_unwind().await {
                    Ok(outcome) => outcome,
                    Err(payload) => Outcome::from_fault(Fault::from_panic(payload)),
                }
            }
            OutcomeState::Failed(cause) => Outcome::from_failure_parts(self.message, cause),
        }
    }

    /// Asynchronous [`Outcome::map_error`]; mapper panics propagate.
    pub async fn map_error_async<F, Fut>(self, mapper: F) -> Self
    where
        F: FnOnce(Option<Fault>) -> Fut,
        Fut: Future<Output = Fault>,
    {
        match self.state {
            OutcomeState::Succeeded(value) => Self {
                message: self.message,
                state: OutcomeState::Succeeded(value),
            },
            OutcomeState::Failed(cause) => {
                let fault = mapper(cause).await;
                Self {
                    message: self.message,
                    state: OutcomeState::Failed(Some(fault)),
                }
            }
        }
    }

    /// Asynchronous [`Outcome::catch`]: runs `operation` and absorbs any
    /// panic, whether raised while building or while awaiting its future.
    ///
    /// A cancellation signal surfacing as a panic is captured like any
    /// other fault, with no distinguishing status.
    pub async fn catch_async<F, Fut>(operation: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let future = match catch_unwind(AssertUnwindSafe(operation)) {
            Ok(future) => future,
            Err(payload) => return Self::from_fault(Fault::from_panic(payload)),
        };
        match AssertUnwindSafe(future).catch_unwind().await {
            Ok(value) => Self::succeed_with(value),
            Err(payload) => Self::from_fault(Fault::from_panic(payload)),
        }
    }

    /// Asynchronous [`Outcome::catch_with_messages`].
    pub async fn catch_async_with_messages<F, Fut>(
        operation: F,
        success_message: &str,
        failure_template: &str,
    ) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        Self::catch_async(operation)
            .await
            .apply_catch_messages(success_message, failure_template)
    }
}

//! Pure combinators over outcomes: sequencing, conditional execution,
//! inspection, total-case reduction, and transformation.
//!
//! Fault policy is deliberately asymmetric. Sequencing ([`Outcome::then`],
//! [`Outcome::when`]), inspection ([`Outcome::on_success`] and friends), and
//! reduction ([`Outcome::fold`]) never intercept a panic raised by
//! caller-supplied logic; it unwinds exactly as it would without this
//! library, signalling a programming defect. Transformation
//! ([`Outcome::map`], [`Outcome::flat_map`]) captures a panicking mapper and
//! turns it into a failing outcome: transformation failures become data,
//! side-effect failures remain real faults.

use super::{Outcome, OutcomeState};
use crate::fault::Fault;
use std::panic::{catch_unwind, AssertUnwindSafe};

impl<T> Outcome<T> {
    /// Sequence another outcome-producing step after this one.
    ///
    /// On success, `next` receives the payload and its result is returned.
    /// On failure, `next` is never invoked and the failure passes through
    /// with its message and cause intact, re-typed to the step's payload.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Outcome;
    ///
    /// let outcome = Outcome::succeed_with(2)
    ///     .then(|n| Outcome::succeed_with(n * 10))
    ///     .then(|n| Outcome::succeed_with(n.to_string()));
    /// assert_eq!(outcome.value(), Some(&"20".to_string()));
    ///
    /// let skipped = Outcome::<i32>::fail("stop here")
    ///     .then(|n| Outcome::succeed_with(n * 10));
    /// assert_eq!(skipped.message(), "stop here");
    /// ```
    pub fn then<U, F>(self, next: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.state {
            OutcomeState::Succeeded(value) => next(value),
            OutcomeState::Failed(cause) => Outcome::from_failure_parts(self.message, cause),
        }
    }

    /// Sequence `next` only when this outcome succeeded and `condition`
    /// holds; otherwise the outcome passes through unchanged.
    pub fn when<F>(self, condition: bool, next: F) -> Outcome<T>
    where
        F: FnOnce(T) -> Outcome<T>,
    {
        if !condition {
            return self;
        }
        self.then(next)
    }

    /// Run `side_effect` on the payload when this outcome succeeded, then
    /// return the outcome unchanged.
    ///
    /// Panics inside `side_effect` are not caught.
    pub fn on_success<F>(self, side_effect: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let OutcomeState::Succeeded(value) = &self.state {
            side_effect(value);
        }
        self
    }

    /// Run `side_effect` on the (optional) cause when this outcome failed,
    /// then return the outcome unchanged.
    ///
    /// Panics inside `side_effect` are not caught.
    pub fn on_failure<F>(self, side_effect: F) -> Self
    where
        F: FnOnce(Option<&Fault>),
    {
        if let OutcomeState::Failed(cause) = &self.state {
            side_effect(cause.as_ref());
        }
        self
    }

    /// Run `side_effect` on either branch, then return the outcome
    /// unchanged.
    ///
    /// Panics inside `side_effect` are not caught.
    pub fn on_both<F>(self, side_effect: F) -> Self
    where
        F: FnOnce(&Self),
    {
        side_effect(&self);
        self
    }

    /// Reduce both branches to a single value.
    ///
    /// This is the canonical total operation: `on_success` consumes the
    /// payload, `on_failure` consumes the optional cause. Handler panics
    /// are not caught.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Outcome;
    ///
    /// let status = Outcome::succeed_with(12).fold(
    ///     |n| format!("ok: {n}"),
    ///     |cause| format!("failed: {}", cause.map_or_else(String::new, |c| c.message().to_string())),
    /// );
    /// assert_eq!(status, "ok: 12");
    /// ```
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Option<Fault>) -> R,
    {
        match self.state {
            OutcomeState::Succeeded(value) => on_success(value),
            OutcomeState::Failed(cause) => on_failure(cause),
        }
    }

    /// Transform the payload, keeping the original message.
    ///
    /// On failure the outcome passes through re-typed, mapper untouched. A
    /// panic inside `mapper` is captured and becomes a failing outcome whose
    /// cause is the panic fault.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Outcome;
    ///
    /// let doubled = Outcome::succeed_with(4).map(|n| n * 2);
    /// assert_eq!(doubled.value(), Some(&8));
    ///
    /// let captured = Outcome::succeed_with(4).map(|_| -> i32 { panic!("mapper bug") });
    /// assert!(captured.failed());
    /// assert_eq!(captured.cause().unwrap().message(), "mapper bug");
    /// ```
    pub fn map<U, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            OutcomeState::Succeeded(value) => {
                match catch_unwind(AssertUnwindSafe(move || mapper(value))) {
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

    /// Transform the payload with a mapper that itself returns an outcome,
    /// flattening the result.
    ///
    /// Same capture policy as [`Outcome::map`]: a panicking mapper becomes a
    /// failing outcome; an already-failed outcome passes through untouched.
    pub fn flat_map<U, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.state {
            OutcomeState::Succeeded(value) => {
                match catch_unwind(AssertUnwindSafe(move || mapper(value))) {
                    Ok(outcome) => outcome,
                    Err(payload) => Outcome::from_fault(Fault::from_panic(payload)),
                }
            }
            OutcomeState::Failed(cause) => Outcome::from_failure_parts(self.message, cause),
        }
    }

    /// Replace the cause of a failing outcome, leaving the message and
    /// success flag alone; successes pass through unchanged.
    ///
    /// The mapper may receive `None` when the failure carried no cause.
    /// Mapper panics are not caught.
    pub fn map_error<F>(self, mapper: F) -> Self
    where
        F: FnOnce(Option<Fault>) -> Fault,
    {
        match self.state {
            OutcomeState::Succeeded(_) => self,
            OutcomeState::Failed(cause) => Self {
                message: self.message,
                state: OutcomeState::Failed(Some(mapper(cause))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn then_runs_the_next_step_on_success() {
        let outcome = Outcome::succeed_with(3).then(|n| Outcome::succeed_with(n + 1));
        assert_eq!(outcome.value(), Some(&4));
    }

    #[test]
    fn then_short_circuits_on_failure() {
        let invoked = Cell::new(false);
        let cause = Fault::new("root");
        let outcome: Outcome<String> = Outcome::<i32>::fail_with("stop", cause.clone()).then(|n| {
            invoked.set(true);
            Outcome::succeed_with(n.to_string())
        });

        assert!(!invoked.get());
        assert!(outcome.failed());
        assert_eq!(outcome.message(), "stop");
        assert_eq!(outcome.cause(), Some(&cause));
    }

    #[test]
    fn then_recasts_the_payload_type_across_steps() {
        let unit: Outcome = Outcome::succeed_with(10).then(|_| Outcome::succeed());
        assert!(unit.succeeded());
    }

    #[test]
    fn when_runs_only_if_condition_holds() {
        let run = Outcome::succeed_with(1).when(true, |n| Outcome::succeed_with(n + 1));
        assert_eq!(run.value(), Some(&2));

        let skipped = Outcome::succeed_with(1).when(false, |n| Outcome::succeed_with(n + 1));
        assert_eq!(skipped.value(), Some(&1));
    }

    #[test]
    fn when_short_circuits_on_failure_regardless_of_condition() {
        let invoked = Cell::new(false);
        let outcome = Outcome::<i32>::fail("no").when(true, |n| {
            invoked.set(true);
            Outcome::succeed_with(n)
        });
        assert!(!invoked.get());
        assert_eq!(outcome.message(), "no");
    }

    #[test]
    fn taps_return_the_outcome_unchanged() {
        let success = Outcome::succeed_with(5).with_message("five");
        let seen = Cell::new(0);
        let returned = success
            .clone()
            .on_success(|n| seen.set(*n))
            .on_failure(|_| seen.set(-1))
            .on_both(|outcome| assert!(outcome.succeeded()));
        assert_eq!(seen.get(), 5);
        assert_eq!(returned, success);

        let failure = Outcome::<i32>::fail_with("bad", Fault::new("why"));
        let cause_seen = Cell::new(false);
        let returned = failure
            .clone()
            .on_success(|_| seen.set(-1))
            .on_failure(|cause| cause_seen.set(cause.is_some()))
            .on_both(|outcome| assert!(outcome.failed()));
        assert!(cause_seen.get());
        assert_eq!(returned, failure);
    }

    #[test]
    fn tap_panics_propagate_to_the_caller() {
        let result = std::panic::catch_unwind(|| {
            Outcome::succeed_with(1).on_success(|_| panic!("inspection defect"));
        });
        assert!(result.is_err());
    }

    #[test]
    fn fold_selects_the_matching_handler() {
        let ok = Outcome::succeed_with(2).fold(|n| n * 100, |_| -1);
        assert_eq!(ok, 200);

        let err = Outcome::<i32>::fail("nope").fold(|_| -1, |cause| {
            assert!(cause.is_none());
            7
        });
        assert_eq!(err, 7);
    }

    #[test]
    fn fold_hands_the_cause_to_the_failure_handler() {
        let cause = Fault::new("root");
        let seen = Outcome::<i32>::fail_with("bad", cause.clone())
            .fold(|_| None, |fault| fault);
        assert_eq!(seen, Some(cause));
    }

    #[test]
    fn map_keeps_the_original_message() {
        let outcome = Outcome::succeed_with(3)
            .with_message("counted")
            .map(|n| n + 1);
        assert_eq!(outcome.value(), Some(&4));
        assert_eq!(outcome.message(), "counted");
    }

    #[test]
    fn map_preserves_failure_identity_without_calling_the_mapper() {
        let invoked = Cell::new(false);
        let cause = Fault::new("root");
        let outcome: Outcome<String> =
            Outcome::<i32>::fail_with("bad", cause.clone()).map(|n| {
                invoked.set(true);
                n.to_string()
            });
        assert!(!invoked.get());
        assert_eq!(outcome.message(), "bad");
        assert_eq!(outcome.cause(), Some(&cause));
    }

    #[test]
    fn map_captures_a_panicking_mapper() {
        let outcome = Outcome::succeed_with(1).map(|_| -> i32 { panic!("mapper blew up") });
        assert!(outcome.failed());
        let cause = outcome.cause().unwrap();
        assert_eq!(cause.kind(), "panic");
        assert_eq!(cause.message(), "mapper blew up");
    }

    #[test]
    fn flat_map_flattens_and_preserves_failures() {
        let flattened = Outcome::succeed_with(2).flat_map(|n| Outcome::succeed_with(n * 3));
        assert_eq!(flattened.value(), Some(&6));

        let inner_failure = Outcome::succeed_with(2).flat_map(|_| Outcome::<i32>::fail("inner"));
        assert_eq!(inner_failure.message(), "inner");

        let invoked = Cell::new(false);
        let outer: Outcome<i32> = Outcome::<i32>::fail("outer").flat_map(|n| {
            invoked.set(true);
            Outcome::succeed_with(n)
        });
        assert!(!invoked.get());
        assert_eq!(outer.message(), "outer");
    }

    #[test]
    fn flat_map_captures_a_panicking_mapper() {
        let outcome =
            Outcome::succeed_with(1).flat_map(|_| -> Outcome<i32> { panic!("flat mapper bug") });
        assert_eq!(outcome.cause().unwrap().message(), "flat mapper bug");
    }

    #[test]
    fn map_error_replaces_only_the_cause() {
        let outcome = Outcome::<i32>::fail("bad").map_error(|cause| {
            assert!(cause.is_none());
            Fault::with_kind("classified", "bucketed")
        });
        assert!(outcome.failed());
        assert_eq!(outcome.message(), "bad");
        assert_eq!(outcome.cause().unwrap().kind(), "classified");
    }

    #[test]
    fn map_error_passes_successes_through() {
        let invoked = Cell::new(false);
        let outcome = Outcome::succeed_with(1).map_error(|_| {
            invoked.set(true);
            Fault::new("never")
        });
        assert!(!invoked.get());
        assert_eq!(outcome.value(), Some(&1));
    }

    #[test]
    fn shared_outcome_reads_are_consistent_across_threads() {
        let outcome = Outcome::succeed_with(99).with_message("shared");

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..1_000 {
                        assert!(outcome.succeeded());
                        assert_eq!(outcome.message(), "shared");
                        assert_eq!(outcome.value(), Some(&99));
                        let folded = outcome.clone().fold(|n| n, |_| -1);
                        assert_eq!(folded, 99);
                    }
                });
            }
        });
    }
}

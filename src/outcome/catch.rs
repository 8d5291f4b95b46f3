//! The sanctioned boundary where uncontrolled faults become outcomes.
//!
//! [`Outcome::catch`] runs an operation and absorbs any panic it raises
//! into a failing outcome. This is the one place (besides the transforming
//! mappers) where the library converts an unwinding fault into data;
//! everywhere else panics propagate untouched.

use super::{Outcome, OutcomeState};
use crate::fault::Fault;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Placeholder replaced with the captured fault's message when rendering a
/// custom failure template.
pub(crate) const FAULT_PLACEHOLDER: &str = "{fault}";

impl<T> Outcome<T> {
    /// Execute `operation`, absorbing any panic into a failing outcome.
    ///
    /// A normal return becomes a successful outcome carrying the returned
    /// value. A panic becomes a failing outcome whose cause is the panic
    /// fault and whose message is that fault's message. A cancellation-like
    /// signal is indistinguishable from any other fault here.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Outcome;
    ///
    /// let ok = Outcome::catch(|| 21 * 2);
    /// assert_eq!(ok.value(), Some(&42));
    ///
    /// let caught = Outcome::catch(|| -> u32 { panic!("subsystem offline") });
    /// assert!(caught.failed());
    /// assert_eq!(caught.message(), "subsystem offline");
    /// ```
    pub fn catch<F>(operation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match catch_unwind(AssertUnwindSafe(operation)) {
            Ok(value) => Self::succeed_with(value),
            Err(payload) => Self::from_fault(Fault::from_panic(payload)),
        }
    }

    /// As [`Outcome::catch`], with custom messages for both branches.
    ///
    /// On success the outcome carries `success_message`. On failure the
    /// outcome's message is `failure_template` with every `{fault}`
    /// occurrence replaced by the captured fault's message; the fault itself
    /// stays attached as the cause.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Outcome;
    ///
    /// let caught = Outcome::catch_with_messages(
    ///     || -> u32 { panic!("timeout") },
    ///     "lookup finished",
    ///     "lookup failed: {fault}",
    /// );
    /// assert_eq!(caught.message(), "lookup failed: timeout");
    /// ```
    pub fn catch_with_messages<F>(
        operation: F,
        success_message: &str,
        failure_template: &str,
    ) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::catch(operation).apply_catch_messages(success_message, failure_template)
    }

    /// Apply the custom catch messages to an already-captured outcome.
    pub(crate) fn apply_catch_messages(
        self,
        success_message: &str,
        failure_template: &str,
    ) -> Self {
        match self.state {
            OutcomeState::Succeeded(value) => Self {
                message: success_message.to_string(),
                state: OutcomeState::Succeeded(value),
            },
            OutcomeState::Failed(cause) => {
                let fault_message = cause
                    .as_ref()
                    .map(|fault| fault.message().to_string())
                    .unwrap_or_default();
                Self {
                    message: failure_template.replace(FAULT_PLACEHOLDER, &fault_message),
                    state: OutcomeState::Failed(cause),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::DEFAULT_SUCCESS_MESSAGE;

    #[test]
    fn normal_return_becomes_a_success() {
        let outcome = Outcome::catch(|| "payload".to_string());
        assert!(outcome.succeeded());
        assert_eq!(outcome.value(), Some(&"payload".to_string()));
        assert_eq!(outcome.message(), DEFAULT_SUCCESS_MESSAGE);
    }

    #[test]
    fn panic_becomes_a_failure_with_the_panic_as_cause() {
        let outcome = Outcome::catch(|| -> i32 { panic!("device lost") });
        assert!(outcome.failed());
        assert_eq!(outcome.message(), "device lost");
        let cause = outcome.cause().unwrap();
        assert_eq!(cause.kind(), "panic");
        assert_eq!(cause.message(), "device lost");
    }

    #[test]
    fn success_message_overrides_the_default() {
        let outcome = Outcome::catch_with_messages(|| 1, "ran fine", "failed: {fault}");
        assert_eq!(outcome.message(), "ran fine");
        assert_eq!(outcome.value(), Some(&1));
    }

    #[test]
    fn failure_template_substitutes_the_fault_message() {
        let outcome = Outcome::catch_with_messages(
            || -> i32 { panic!("no route") },
            "ran fine",
            "dial-out failed: {fault}",
        );
        assert_eq!(outcome.message(), "dial-out failed: no route");
        assert_eq!(outcome.cause().unwrap().message(), "no route");
    }

    #[test]
    fn failure_template_without_placeholder_is_used_verbatim() {
        let outcome =
            Outcome::catch_with_messages(|| -> i32 { panic!("x") }, "ok", "it failed");
        assert_eq!(outcome.message(), "it failed");
    }
}

//! The success/failure outcome value type.
//!
//! An [`Outcome`] is an immutable record of whether an operation succeeded
//! or failed, with a human-readable message and, on failure, an optional
//! [`Fault`] cause. `Outcome` (no payload) and `Outcome<T>` (payload on
//! success) share one generic type through the default type parameter.
//!
//! Outcomes are only constructible through the factory operations, so a
//! reported success can never carry a cause and a reported failure can
//! never expose a payload.

mod async_ext;
mod catch;
mod combinators;
mod combine;

pub use combine::{combine, combine_values};

use crate::fault::Fault;
use serde::{Deserialize, Serialize};

/// Message substituted when a success is constructed without one.
pub(crate) const DEFAULT_SUCCESS_MESSAGE: &str = "operation completed successfully";

/// The explicit result of an operation: success or failure as a value.
///
/// Expected failures (validation errors, business-rule rejections,
/// recoverable I/O problems) flow through calling code as failing outcomes
/// instead of unwinding; combinators short-circuit on them automatically.
///
/// # Example
///
/// ```rust
/// use verdict::Outcome;
///
/// fn parse_quantity(raw: &str) -> Outcome<u32> {
///     match raw.parse::<u32>() {
///         Ok(quantity) if quantity > 0 => Outcome::succeed_with(quantity),
///         Ok(_) => Outcome::fail("quantity must be positive"),
///         Err(error) => Outcome::from_fault(verdict::Fault::captured(error)),
///     }
/// }
///
/// let outcome = parse_quantity("3").map(|quantity| quantity * 2);
/// assert!(outcome.succeeded());
/// assert_eq!(outcome.value(), Some(&6));
///
/// let rejected = parse_quantity("0").map(|quantity| quantity * 2);
/// assert!(rejected.failed());
/// assert_eq!(rejected.message(), "quantity must be positive");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome<T = ()> {
    message: String,
    state: OutcomeState<T>,
}

/// Success and failure are structurally distinct, so a failing outcome
/// cannot hold a payload and a succeeding one cannot hold a cause.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub(crate) enum OutcomeState<T> {
    Succeeded(T),
    Failed(Option<Fault>),
}

impl Outcome {
    /// Produce a successful outcome with the default message.
    pub fn succeed() -> Self {
        Self::succeed_with(())
    }

    /// Produce a successful outcome with an explicit message.
    pub fn succeed_with_message(message: impl Into<String>) -> Self {
        Self::succeed_with(()).with_message(message)
    }
}

impl<T> Outcome<T> {
    /// Produce a successful outcome carrying `value`.
    ///
    /// This is also the lift from a bare value into the outcome model; pair
    /// it with [`Outcome::into_result`] for the opposite direction.
    pub fn succeed_with(value: T) -> Self {
        Self {
            message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            state: OutcomeState::Succeeded(value),
        }
    }

    /// Produce a failing outcome with a message and no cause.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            state: OutcomeState::Failed(None),
        }
    }

    /// Produce a failing outcome with a message and a cause.
    pub fn fail_with(message: impl Into<String>, cause: Fault) -> Self {
        Self {
            message: message.into(),
            state: OutcomeState::Failed(Some(cause)),
        }
    }

    /// Produce a failing outcome whose message is the cause's own message.
    pub fn from_fault(cause: Fault) -> Self {
        Self {
            message: cause.message().to_string(),
            state: OutcomeState::Failed(Some(cause)),
        }
    }

    /// Replace the message, keeping the success flag, payload, and cause.
    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            state: self.state,
        }
    }

    /// Whether the operation succeeded.
    pub fn succeeded(&self) -> bool {
        matches!(self.state, OutcomeState::Succeeded(_))
    }

    /// Whether the operation failed.
    pub fn failed(&self) -> bool {
        !self.succeeded()
    }

    /// The outcome's message. Never absent; successes constructed without
    /// one carry a default.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The failure cause, when the outcome failed with one.
    pub fn cause(&self) -> Option<&Fault> {
        match &self.state {
            OutcomeState::Succeeded(_) => None,
            OutcomeState::Failed(cause) => cause.as_ref(),
        }
    }

    /// The success payload, when the outcome succeeded.
    pub fn value(&self) -> Option<&T> {
        match &self.state {
            OutcomeState::Succeeded(value) => Some(value),
            OutcomeState::Failed(_) => None,
        }
    }

    /// Down-cast to the no-payload form, discarding the payload while
    /// preserving the success flag, message, and cause.
    pub fn into_unit(self) -> Outcome {
        match self.state {
            OutcomeState::Succeeded(_) => Outcome {
                message: self.message,
                state: OutcomeState::Succeeded(()),
            },
            OutcomeState::Failed(cause) => Outcome {
                message: self.message,
                state: OutcomeState::Failed(cause),
            },
        }
    }

    /// Extract the payload, or the failure as an error value.
    ///
    /// A failure yields its cause when it has one, otherwise a fault built
    /// from its message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Outcome;
    ///
    /// let value = Outcome::succeed_with(7).into_result().unwrap();
    /// assert_eq!(value, 7);
    ///
    /// let fault = Outcome::<i32>::fail("rejected").into_result().unwrap_err();
    /// assert_eq!(fault.message(), "rejected");
    /// ```
    pub fn into_result(self) -> Result<T, Fault> {
        match self.state {
            OutcomeState::Succeeded(value) => Ok(value),
            OutcomeState::Failed(cause) => {
                Err(cause.unwrap_or_else(|| Fault::new(self.message)))
            }
        }
    }

    /// Absorb a `Result` into the outcome model, capturing the error as the
    /// failing outcome's cause.
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match result {
            Ok(value) => Self::succeed_with(value),
            Err(error) => Self::from_fault(Fault::captured(error)),
        }
    }

    /// Rebuild a failure of a different payload type from its parts.
    pub(crate) fn from_failure_parts(message: String, cause: Option<Fault>) -> Self {
        Self {
            message,
            state: OutcomeState::Failed(cause),
        }
    }
}

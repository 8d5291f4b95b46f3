//! Aggregate failure that bundles several contributing failures into one.
//!
//! A `CompositeFailure` is produced when independent outcomes are combined
//! and more than zero of them failed. It keeps every contributing message
//! and every contributing cause, in the order they were encountered.

use super::Fault;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A fault that is also an ordered list of faults.
///
/// Carries one message per contributing failure and, separately, the causes
/// of the contributors that had one. The two lists share their relative
/// ordering, but `inner_faults` may be shorter than `error_messages` because
/// an outcome can fail with a message and no underlying fault.
///
/// A composite failure is never empty: construction panics unless at least
/// one message or fault is supplied.
///
/// # Example
///
/// ```rust
/// use verdict::{CompositeFailure, Fault};
///
/// let composite = CompositeFailure::new(
///     vec!["a".to_string(), "b".to_string()],
///     vec![Fault::new("b went wrong")],
/// );
///
/// assert_eq!(composite.error_messages(), ["a", "b"]);
/// assert_eq!(composite.inner_faults().len(), 1);
/// assert_eq!(composite.message(), "a; b");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct CompositeFailure {
    error_messages: Vec<String>,
    inner_faults: Vec<Fault>,
    message: String,
}

impl CompositeFailure {
    /// Create a composite failure from contributing messages and causes.
    ///
    /// `error_messages` holds one entry per contributing failure, in
    /// encounter order. `inner_faults` holds only the causes of contributors
    /// that had one, also in encounter order; it is allowed to be shorter
    /// than `error_messages`. The derived `message` joins the contributing
    /// messages with `"; "` and is fixed at construction.
    ///
    /// # Panics
    ///
    /// Panics if `error_messages` and `inner_faults` are both empty; a
    /// composite failure must wrap at least one message or fault.
    pub fn new(error_messages: Vec<String>, inner_faults: Vec<Fault>) -> Self {
        assert!(
            !error_messages.is_empty() || !inner_faults.is_empty(),
            "`error_messages` must contain at least one message (or `inner_faults` at least one fault)"
        );
        let message = error_messages.join("; ");
        Self {
            error_messages,
            inner_faults,
            message,
        }
    }

    /// One message per contributing failure, in encounter order.
    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    /// The causes of the contributors that had one, in encounter order.
    pub fn inner_faults(&self) -> &[Fault] {
        &self.inner_faults
    }

    /// The derived human-readable message (contributing messages joined).
    pub fn message(&self) -> &str {
        &self.message
    }
}

//! Aggregation of independent outcomes into one.
//!
//! Unlike the sequencing combinators, aggregation is deliberately eager:
//! every input is inspected even after a failure has been seen, so that
//! every contributing message and cause can be collected into a single
//! [`CompositeFailure`]. Do not "optimize" this into short-circuiting.

use super::{Outcome, OutcomeState};
use crate::fault::{CompositeFailure, Fault};

/// Combine independent payload-carrying outcomes into one.
///
/// If every input succeeded, the result succeeds and carries the payloads
/// in their original order. If any failed, the result is a failing outcome
/// whose cause is a [`CompositeFailure`] holding every failing message (in
/// order) and every present cause (in order; possibly fewer than the
/// messages).
///
/// # Panics
///
/// Panics when `outcomes` is empty: an aggregation over nothing would be a
/// vacuous success and is treated as API misuse.
///
/// # Example
///
/// ```rust
/// use verdict::{combine_values, Outcome};
///
/// let combined = combine_values(vec![
///     Outcome::succeed_with(1),
///     Outcome::succeed_with(2),
///     Outcome::succeed_with(3),
/// ]);
/// assert_eq!(combined.value(), Some(&vec![1, 2, 3]));
/// ```
pub fn combine_values<T, I>(outcomes: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    let outcomes: Vec<Outcome<T>> = outcomes.into_iter().collect();
    assert!(
        !outcomes.is_empty(),
        "`outcomes` must contain at least one outcome"
    );

    let mut values = Vec::with_capacity(outcomes.len());
    let mut error_messages = Vec::new();
    let mut inner_faults = Vec::new();

    // Eager by contract: every input contributes, failures never cut the
    // walk short.
    for outcome in outcomes {
        match outcome.state {
            OutcomeState::Succeeded(value) => values.push(value),
            OutcomeState::Failed(cause) => {
                error_messages.push(outcome.message);
                if let Some(fault) = cause {
                    inner_faults.push(fault);
                }
            }
        }
    }

    if error_messages.is_empty() {
        Outcome::succeed_with(values)
    } else {
        Outcome::from_fault(Fault::from(CompositeFailure::new(
            error_messages,
            inner_faults,
        )))
    }
}

/// Combine independent no-payload outcomes into one.
///
/// Same contract as [`combine_values`], without a carried payload.
///
/// # Panics
///
/// Panics when `outcomes` is empty.
///
/// # Example
///
/// ```rust
/// use verdict::{combine, Outcome};
///
/// let all_good = combine(vec![Outcome::succeed(), Outcome::succeed()]);
/// assert!(all_good.succeeded());
///
/// let mixed = combine(vec![Outcome::succeed(), Outcome::fail("a"), Outcome::fail("b")]);
/// assert!(mixed.failed());
/// assert_eq!(mixed.cause().unwrap().message(), "a; b");
/// ```
pub fn combine<I>(outcomes: I) -> Outcome
where
    I: IntoIterator<Item = Outcome>,
{
    combine_values(outcomes).into_unit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_successes_combine_into_one_success() {
        let combined = combine(vec![
            Outcome::succeed(),
            Outcome::succeed(),
            Outcome::succeed(),
        ]);
        assert!(combined.succeeded());
        assert!(combined.cause().is_none());
    }

    #[test]
    fn payloads_are_collected_in_original_order() {
        let combined = combine_values(vec![
            Outcome::succeed_with(1),
            Outcome::succeed_with(2),
            Outcome::succeed_with(3),
        ]);
        assert_eq!(combined.value(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn mixed_inputs_yield_a_composite_failure() {
        let cause_b = Fault::new("b's root cause");
        let combined = combine(vec![
            Outcome::succeed(),
            Outcome::fail("a"),
            Outcome::fail_with("b", cause_b.clone()),
        ]);

        assert!(combined.failed());
        let composite = combined.cause().unwrap().as_composite().unwrap();
        assert_eq!(composite.error_messages(), ["a", "b"]);
        assert_eq!(composite.inner_faults(), [cause_b]);
    }

    #[test]
    fn fault_list_tracks_only_failures_with_causes() {
        let combined = combine(vec![
            Outcome::fail("no cause"),
            Outcome::fail_with("with cause", Fault::new("root")),
            Outcome::fail("also no cause"),
        ]);

        let composite = combined.cause().unwrap().as_composite().unwrap();
        assert_eq!(composite.error_messages().len(), 3);
        assert_eq!(composite.inner_faults().len(), 1);
        assert_eq!(composite.inner_faults()[0].message(), "root");
    }

    #[test]
    fn every_input_is_evaluated_even_after_a_failure() {
        let combined = combine_values(vec![
            Outcome::<i32>::fail("first"),
            Outcome::succeed_with(2),
            Outcome::<i32>::fail("last"),
        ]);

        let composite = combined.cause().unwrap().as_composite().unwrap();
        assert_eq!(composite.error_messages(), ["first", "last"]);
    }

    #[test]
    #[should_panic(expected = "`outcomes`")]
    fn empty_input_panics_instead_of_vacuously_succeeding() {
        combine(Vec::new());
    }

    #[test]
    #[should_panic(expected = "`outcomes`")]
    fn empty_payload_input_panics_too() {
        combine_values(Vec::<Outcome<i32>>::new());
    }

    #[test]
    fn failing_combined_outcome_message_matches_the_composite() {
        let combined = combine(vec![Outcome::fail("a"), Outcome::fail("b")]);
        assert_eq!(combined.message(), "a; b");
    }
}

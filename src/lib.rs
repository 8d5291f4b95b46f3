//! Verdict: composable success/failure outcomes.
//!
//! Verdict gives call chains an explicit, immutable representation of "this
//! operation succeeded or failed", so that expected failures (validation
//! errors, business-rule rejections, recoverable I/O problems) flow through
//! code as values instead of unwinding. Pipelines short-circuit on the first
//! failure, independent failures can be merged into one composite failure,
//! and both branches can be inspected, transformed, or reduced without ever
//! unwinding unless the caller chooses to.
//!
//! # Core Concepts
//!
//! - **Outcome**: the success/failure value type; `Outcome` carries no
//!   payload, `Outcome<T>` carries one on success
//! - **Fault**: the opaque cause a failing outcome may carry
//! - **CompositeFailure**: a fault that is also an ordered list of
//!   contributing failures, produced by aggregation
//! - **Combinators**: pure operations for sequencing (`then`, `when`),
//!   inspection (`on_success`, `on_failure`, `on_both`), reduction (`fold`),
//!   transformation (`map`, `flat_map`, `map_error`), fault capture
//!   (`catch`), and aggregation (`combine`, `combine_values`), each with an
//!   asynchronous counterpart
//!
//! # Example
//!
//! ```rust
//! use verdict::{combine, Outcome};
//!
//! fn check_name(name: &str) -> Outcome {
//!     if name.is_empty() {
//!         Outcome::fail("name must not be empty")
//!     } else {
//!         Outcome::succeed()
//!     }
//! }
//!
//! fn check_age(age: i64) -> Outcome {
//!     if age < 0 {
//!         Outcome::fail("age must not be negative")
//!     } else {
//!         Outcome::succeed()
//!     }
//! }
//!
//! // Aggregation is eager: every validation runs, every failure is kept.
//! let report = combine(vec![check_name(""), check_age(-3)]);
//! assert!(report.failed());
//! let composite = report.cause().unwrap().as_composite().unwrap();
//! assert_eq!(
//!     composite.error_messages(),
//!     ["name must not be empty", "age must not be negative"]
//! );
//!
//! // Sequencing short-circuits instead.
//! let chained = check_name("ada")
//!     .then(|_| Outcome::succeed_with(42))
//!     .map(|answer| answer * 2)
//!     .on_success(|doubled| assert_eq!(*doubled, 84));
//! assert!(chained.succeeded());
//! ```

pub mod fault;
pub mod outcome;

// Re-export the full public surface at the crate root.
pub use fault::{CompositeFailure, Fault, SingleFault};
pub use outcome::{combine, combine_values, Outcome};

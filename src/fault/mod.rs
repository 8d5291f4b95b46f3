//! Failure causes for outcomes.
//!
//! A [`Fault`] is the opaque object a failing outcome may carry as its
//! cause. The shape is closed and inspectable: a fault is either a single
//! captured failure or a [`CompositeFailure`] aggregating several.

mod composite;

pub use composite::CompositeFailure;

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Kind tag used for faults created from a bare message.
const GENERIC_KIND: &str = "fault";

/// Kind tag used for faults captured from a panic payload.
const PANIC_KIND: &str = "panic";

/// The cause of a failing outcome.
///
/// Faults compare nominally: two faults are equal when their kind tag and
/// message text match. A captured source error participates in the
/// `std::error::Error` chain but is deliberately excluded from equality,
/// hashing, and serialization.
///
/// # Example
///
/// ```rust
/// use verdict::Fault;
///
/// let parse_error = "abc".parse::<i32>().unwrap_err();
/// let fault = Fault::captured(parse_error);
///
/// assert_eq!(fault.message(), "invalid digit found in string");
/// assert!(fault.kind().contains("ParseIntError"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fault {
    /// A single failure with a kind tag, a message, and an optional source.
    Single(SingleFault),
    /// Several contributing failures rolled into one.
    Composite(CompositeFailure),
}

/// A single captured failure.
///
/// Only constructible through the [`Fault`] factories; inspect it through
/// the accessors when matching on [`Fault::Single`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SingleFault {
    kind: Cow<'static, str>,
    message: String,
    #[serde(skip)]
    source: Option<Arc<dyn StdError + Send + Sync + 'static>>,
}

impl SingleFault {
    /// The nominal kind tag, usually the originating error's type name.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The captured source error, when one was retained.
    pub fn source(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }
}

// Equality and hashing are nominal: kind + message, never the source.
impl PartialEq for SingleFault {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl Eq for SingleFault {}

impl Hash for SingleFault {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.message.hash(state);
    }
}

impl Fault {
    /// Create a fault from a bare message.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_kind(GENERIC_KIND, message)
    }

    /// Create a fault with an explicit kind tag.
    ///
    /// The kind participates in nominal equality, so two faults built with
    /// different kinds never compare equal even when their messages match.
    pub fn with_kind(kind: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::Single(SingleFault {
            kind: kind.into(),
            message: message.into(),
            source: None,
        })
    }

    /// Capture a concrete error as a fault.
    ///
    /// The error's type name becomes the kind tag, its display output the
    /// message, and the error itself is retained as the fault's source for
    /// `std::error::Error` chain walking.
    pub fn captured<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let message = error.to_string();
        Self::Single(SingleFault {
            kind: Cow::Borrowed(std::any::type_name::<E>()),
            message,
            source: Some(Arc::new(error)),
        })
    }

    /// Convert a caught panic payload into a fault.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "operation panicked with a non-string payload".to_string()
        };
        Self::with_kind(PANIC_KIND, message)
    }

    /// The nominal kind tag.
    pub fn kind(&self) -> &str {
        match self {
            Self::Single(single) => single.kind(),
            Self::Composite(_) => "composite",
        }
    }

    /// The failure message; for composites, the derived concatenation.
    pub fn message(&self) -> &str {
        match self {
            Self::Single(single) => single.message(),
            Self::Composite(composite) => composite.message(),
        }
    }

    /// View this fault as a composite, when it is one.
    pub fn as_composite(&self) -> Option<&CompositeFailure> {
        match self {
            Self::Single(_) => None,
            Self::Composite(composite) => Some(composite),
        }
    }
}

impl From<CompositeFailure> for Fault {
    fn from(composite: CompositeFailure) -> Self {
        Self::Composite(composite)
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl StdError for Fault {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Single(single) => single
                .source
                .as_ref()
                .map(|error| error.as_ref() as &(dyn StdError + 'static)),
            Self::Composite(_) => None,
        }
    }
}

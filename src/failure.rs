use std::fmt;

use crate::outcome::ErrorOutcome;

/// Anything a handler can hand to [`fail`](crate::registry::fail): either
/// a failure that already carries an outcome code, or an arbitrary
/// description that does not.
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// A failure that already is a structured outcome; its code and
    /// message pass through normalization untouched.
    Structured(ErrorOutcome),
    /// Any other failure, reduced to its textual description.
    Unstructured(String),
}

impl Failure {
    /// Wrap an arbitrary value by its display representation.
    pub fn other(value: impl fmt::Display) -> Self {
        Failure::Unstructured(value.to_string())
    }
}

impl From<ErrorOutcome> for Failure {
    fn from(err: ErrorOutcome) -> Self {
        Failure::Structured(err)
    }
}

impl From<anyhow::Error> for Failure {
    /// Unwraps the chain to its root cause before deciding: an error
    /// whose root is already an [`ErrorOutcome`] stays structured no
    /// matter how much context was layered on top.
    fn from(err: anyhow::Error) -> Self {
        let cause = err.root_cause();
        match cause.downcast_ref::<ErrorOutcome>() {
            Some(outcome) => Failure::Structured(outcome.clone()),
            None => Failure::Unstructured(cause.to_string()),
        }
    }
}

impl From<String> for Failure {
    fn from(description: String) -> Self {
        Failure::Unstructured(description)
    }
}

impl From<&str> for Failure {
    fn from(description: &str) -> Self {
        Failure::Unstructured(description.to_string())
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Capability shared by every response outcome: a numeric code, a
/// human-readable message and an optional payload.
pub trait ReturnCode {
    /// Numeric outcome code for programmatic handling.
    fn code(&self) -> i32;

    /// Human-readable description of the outcome; may be empty.
    fn message(&self) -> &str;

    /// Attached payload, present only on success-like outcomes.
    fn data(&self) -> Option<&Value>;
}

/// Immutable outcome value returned to a caller.
///
/// Empty messages and absent payloads are omitted from serialized output;
/// `Code` is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    #[serde(rename = "Code")]
    code: i32,
    #[serde(rename = "Message", default, skip_serializing_if = "String::is_empty")]
    message: String,
    #[serde(rename = "Data", default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl Outcome {
    pub(crate) fn new(code: i32, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            code,
            message: message.into(),
            data,
        }
    }
}

impl ReturnCode for Outcome {
    fn code(&self) -> i32 {
        self.code
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }
}

/// Failure outcome. Carries a code and message like [`Outcome`] but also
/// behaves as a regular error: its `Display` output equals its message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ErrorOutcome {
    #[serde(rename = "Code")]
    code: i32,
    #[serde(rename = "Message", default, skip_serializing_if = "String::is_empty")]
    message: String,
}

impl ErrorOutcome {
    pub(crate) fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl ReturnCode for ErrorOutcome {
    fn code(&self) -> i32 {
        self.code
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn data(&self) -> Option<&Value> {
        None
    }
}

use std::sync::Mutex;

use lazy_static::lazy_static;
use serde_json::Value;
use tracing::debug;

use crate::failure::Failure;
use crate::outcome::{ErrorOutcome, Outcome, ReturnCode};

/// Tracks every well-known code defined in a process and rejects
/// duplicates.
///
/// Construct one per process (or one per test) and pass it to whatever
/// defines named outcome values. Ad-hoc per-request outcomes built by
/// [`WellKnownCodes::succeed`] and friends bypass registration.
#[derive(Debug, Default)]
pub struct CodeRegistry {
    codes: Mutex<Vec<i32>>,
}

impl CodeRegistry {
    pub fn new() -> Self {
        Self {
            codes: Mutex::new(Vec::new()),
        }
    }

    /// Record a well-known code.
    ///
    /// # Panics
    ///
    /// Panics if the code was already registered. Two named constants
    /// sharing a code is a defect in the defining code, not a runtime
    /// condition to recover from.
    pub fn register(&self, code: i32) {
        let mut codes = self.codes.lock().expect("code registry lock poisoned");
        if codes.contains(&code) {
            panic!("duplicate well-known code: {code}");
        }
        codes.push(code);
        debug!(code, "Registered well-known code");
    }

    /// Define a well-known success value.
    pub fn success(&self, code: i32, message: impl Into<String>) -> Outcome {
        self.register(code);
        Outcome::new(code, message, None)
    }

    /// Define a well-known error value.
    pub fn error(&self, code: i32, message: impl Into<String>) -> ErrorOutcome {
        self.register(code);
        ErrorOutcome::new(code, message)
    }
}

/// The generic outcome values every handler shares. Codes below 1000
/// mirror their HTTP status equivalents.
#[derive(Debug, Clone)]
pub struct WellKnownCodes {
    pub success: Outcome,
    pub system: ErrorOutcome,
    pub argument: ErrorOutcome,
    pub timeout: ErrorOutcome,
}

impl WellKnownCodes {
    /// Register the generic codes against `registry` and return the set.
    pub fn register(registry: &CodeRegistry) -> Self {
        Self {
            success: registry.success(200, "OK"),
            system: registry.error(500, "Internal Server Error"),
            argument: registry.error(400, "Bad Request"),
            timeout: registry.error(408, "Request Timeout"),
        }
    }

    /// Build a success outcome with the given message and payload.
    ///
    /// # Panics
    ///
    /// Panics when `message` is empty and `data` is `None`; an outcome
    /// carrying neither is meaningless and indicates a bug in the caller.
    pub fn succeed(&self, message: impl Into<String>, data: Option<Value>) -> Outcome {
        let message = message.into();
        if message.is_empty() && data.is_none() {
            panic!("invalid args: message and data are both empty");
        }
        Outcome::new(self.success.code(), message, data)
    }

    /// [`succeed`](Self::succeed) with a message only.
    pub fn with_message(&self, message: impl Into<String>) -> Outcome {
        self.succeed(message, None)
    }

    /// [`succeed`](Self::succeed) with a payload only. The serialized
    /// outcome carries no `Message` field.
    pub fn with_data(&self, data: Value) -> Outcome {
        self.succeed("", Some(data))
    }

    /// Normalize anything that went wrong into an [`ErrorOutcome`].
    ///
    /// Failures that already carry an outcome code keep their code and
    /// message; everything else is wrapped under the generic system
    /// error code with its textual description as the message.
    pub fn fail(&self, failure: impl Into<Failure>) -> ErrorOutcome {
        match failure.into() {
            Failure::Structured(err) => err,
            Failure::Unstructured(message) => ErrorOutcome::new(self.system.code(), message),
        }
    }
}

lazy_static! {
    static ref REGISTRY: CodeRegistry = CodeRegistry::new();

    /// Process-wide well-known codes backing the free functions below.
    pub static ref WELL_KNOWN: WellKnownCodes = WellKnownCodes::register(&REGISTRY);
}

/// See [`WellKnownCodes::succeed`].
pub fn succeed(message: impl Into<String>, data: Option<Value>) -> Outcome {
    WELL_KNOWN.succeed(message, data)
}

/// See [`WellKnownCodes::with_message`].
pub fn with_message(message: impl Into<String>) -> Outcome {
    WELL_KNOWN.with_message(message)
}

/// See [`WellKnownCodes::with_data`].
pub fn with_data(data: Value) -> Outcome {
    WELL_KNOWN.with_data(data)
}

/// See [`WellKnownCodes::fail`].
pub fn fail(failure: impl Into<Failure>) -> ErrorOutcome {
    WELL_KNOWN.fail(failure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_register_distinct_codes() {
        let registry = CodeRegistry::new();
        registry.register(200);
        registry.register(500);
        registry.register(1001);
    }

    #[test]
    #[should_panic(expected = "duplicate well-known code: 1001")]
    fn test_register_duplicate_code_panics() {
        let registry = CodeRegistry::new();
        registry.register(1001);
        registry.register(1001);
    }

    #[test]
    fn test_concurrent_registration() {
        let registry = Arc::new(CodeRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.register(1000 + i))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        // All eight codes landed; a ninth duplicate still trips.
        let result = std::panic::catch_unwind(|| registry.register(1003));
        assert!(result.is_err());
    }

    #[test]
    fn test_business_error_definition() {
        let registry = CodeRegistry::new();
        let err = registry.error(1404, "order not found");
        assert_eq!(err.code(), 1404);
        assert_eq!(err.message(), "order not found");
        assert!(err.data().is_none());
    }

    #[test]
    #[should_panic(expected = "invalid args")]
    fn test_succeed_empty_message_and_data_panics() {
        let codes = WellKnownCodes::register(&CodeRegistry::new());
        codes.succeed("", None);
    }

    #[test]
    fn test_succeed_message_only() {
        let codes = WellKnownCodes::register(&CodeRegistry::new());
        let outcome = codes.succeed("created", None);
        assert_eq!(outcome.code(), 200);
        assert_eq!(outcome.message(), "created");
    }

    #[test]
    fn test_succeed_data_only() {
        let codes = WellKnownCodes::register(&CodeRegistry::new());
        let outcome = codes.succeed("", Some(json!([1, 2, 3])));
        assert_eq!(outcome.code(), 200);
        assert_eq!(outcome.data(), Some(&json!([1, 2, 3])));
    }

    #[test]
    fn test_free_functions_use_process_codes() {
        let outcome = with_message("ok");
        assert_eq!(outcome.code(), WELL_KNOWN.success.code());

        let err = fail("broken");
        assert_eq!(err.code(), WELL_KNOWN.system.code());
    }
}

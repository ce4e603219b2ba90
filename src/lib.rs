//! Structured success/error outcomes for API handlers.
//!
//! Handlers produce [`Outcome`] values for successes and [`ErrorOutcome`]
//! values for failures; both serialize directly as a response body with a
//! numeric `Code`, an optional `Message` and an optional `Data` payload.
//! Codes below 1000 follow HTTP status semantics; business codes are
//! four-digit (>= 1000) by convention.

pub mod failure;
pub mod outcome;
pub mod registry;

pub use failure::Failure;
pub use outcome::{ErrorOutcome, Outcome, ReturnCode};
pub use registry::{
    fail, succeed, with_data, with_message, CodeRegistry, WellKnownCodes, WELL_KNOWN,
};

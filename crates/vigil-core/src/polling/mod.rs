//! Auto-refresh scheduling.
//!
//! [`PollingController`] drives a refresh callback on a fixed cadence and
//! exposes a countdown to the next refresh. See the controller docs for the
//! concurrency rules.

pub mod controller;
pub mod errors;
pub mod types;

pub use controller::{PollingController, RefreshError, TICK};
pub use errors::PollingError;
pub use types::{PollingSnapshot, PollingState, RefreshOutcome};

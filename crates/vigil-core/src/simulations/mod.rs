//! Attack simulation cards.
//!
//! A simulation cycles `ready -> running -> completed -> ready` on timers.
//! Nothing is executed against a real system; the runner only tracks status.

pub mod errors;
pub mod runner;
pub mod types;

pub use errors::SimulationError;
pub use runner::SimulationRunner;
pub use types::SimulationTiming;

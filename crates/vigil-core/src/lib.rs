//! vigil-core: Core library for the Vigil security dashboard
//!
//! This library holds the SIEM data contract, the injected data source, the
//! client-side filtering and aggregation behind each dashboard view, and the
//! auto-refresh controller. It is used by the `vigil` CLI.
//!
//! # Main Entry Points
//!
//! - [`polling`] - Auto-refresh cadence with a countdown
//! - [`source`] - Where snapshots come from
//! - [`dashboard`] - Dashboard view model
//! - [`search`] - Alert and log filtering
//! - [`simulations`] - Simulation card runner
//! - [`config`] - Configuration management

pub mod config;
pub mod dashboard;
pub mod errors;
pub mod events;
pub mod logging;
pub mod polling;
pub mod search;
pub mod siem;
pub mod simulations;
pub mod source;

// Re-export commonly used types at crate root for convenience
pub use config::VigilConfig;
pub use dashboard::DashboardView;
pub use errors::{ConfigError, VigilError, VigilResult};
pub use polling::{PollingController, PollingError, PollingSnapshot, RefreshOutcome};
pub use siem::{
    Alert, AlertCounts, Detection, SecurityPosture, SeverityLevel, SiemSnapshot, Simulation,
    SimulationStatus, UnifiedLog,
};
pub use simulations::{SimulationError, SimulationRunner, SimulationTiming};
pub use source::{FileSource, FixtureSource, SiemSource, SourceError};

// Re-export logging initialization
pub use logging::init_logging;

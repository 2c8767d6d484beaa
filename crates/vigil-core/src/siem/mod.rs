pub mod operations;
pub mod types;

pub use operations::{count_alerts, derive_posture, trust_band};
pub use types::{
    Alert, AlertCounts, Detection, DetectionType, ExpectedAlert, LogSource, SecurityPosture,
    SeverityLevel, SiemSnapshot, Simulation, SimulationStatus, TamperIndicator, TamperKind,
    TamperingReport, TimelineEvent, TrustBand, UnifiedLog,
};

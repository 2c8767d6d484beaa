use std::time::Duration;

/// How long a simulation stays in each transient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationTiming {
    /// `running` until `completed`.
    pub run_duration: Duration,
    /// `completed` until `ready` again.
    pub reset_delay: Duration,
}

impl Default for SimulationTiming {
    fn default() -> Self {
        Self {
            run_duration: Duration::from_secs(2),
            reset_delay: Duration::from_secs(3),
        }
    }
}

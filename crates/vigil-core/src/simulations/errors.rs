use crate::errors::VigilError;
use crate::siem::types::SimulationStatus;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    #[error("Simulation '{id}' not found")]
    NotFound { id: String },

    #[error("Simulation '{id}' is {status}, wait until it is ready")]
    NotReady { id: String, status: SimulationStatus },

    #[error("Simulation runner requires a Tokio runtime")]
    NoRuntime,
}

impl VigilError for SimulationError {
    fn error_code(&self) -> &'static str {
        match self {
            SimulationError::NotFound { .. } => "SIMULATION_NOT_FOUND",
            SimulationError::NotReady { .. } => "SIMULATION_NOT_READY",
            SimulationError::NoRuntime => "SIMULATION_NO_RUNTIME",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            SimulationError::NotFound { .. } | SimulationError::NotReady { .. }
        )
    }
}

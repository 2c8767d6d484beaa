use crate::errors::VigilError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PollingError {
    #[error("Invalid refresh interval {value}s: must be greater than 0")]
    InvalidInterval { value: u64 },

    #[error("Polling controller requires a Tokio runtime")]
    NoRuntime,
}

impl VigilError for PollingError {
    fn error_code(&self) -> &'static str {
        match self {
            PollingError::InvalidInterval { .. } => "POLLING_INVALID_INTERVAL",
            PollingError::NoRuntime => "POLLING_NO_RUNTIME",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, PollingError::InvalidInterval { .. })
    }
}

use crate::errors::VigilError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Snapshot file not found at '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read snapshot file '{}': {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse snapshot from {origin}: {source}")]
    ParseFailed {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl VigilError for SourceError {
    fn error_code(&self) -> &'static str {
        match self {
            SourceError::NotFound { .. } => "SOURCE_NOT_FOUND",
            SourceError::ReadFailed { .. } => "SOURCE_READ_FAILED",
            SourceError::ParseFailed { .. } => "SOURCE_PARSE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            SourceError::NotFound { .. } | SourceError::ParseFailed { .. }
        )
    }
}

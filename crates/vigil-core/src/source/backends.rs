use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::siem::types::SiemSnapshot;
use crate::source::errors::SourceError;
use crate::source::traits::SiemSource;

const DEMO_SNAPSHOT: &str = include_str!("fixtures/demo.json");

/// Built-in demo dataset compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSource;

impl SiemSource for FixtureSource {
    fn name(&self) -> &'static str {
        "fixture"
    }

    fn fetch(&self) -> Result<SiemSnapshot, SourceError> {
        let snapshot = parse_snapshot(DEMO_SNAPSHOT, "built-in demo data")?;
        debug!(
            event = "core.source.fixture_loaded",
            alerts = snapshot.alerts.len(),
            logs = snapshot.logs.len()
        );
        Ok(snapshot)
    }
}

/// JSON snapshot on disk, re-read on every fetch so an external exporter can
/// overwrite it between refreshes.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SiemSource for FileSource {
    fn name(&self) -> &'static str {
        "file"
    }

    fn fetch(&self) -> Result<SiemSnapshot, SourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SourceError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                SourceError::ReadFailed {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;

        let snapshot = parse_snapshot(&content, &self.path.display().to_string())?;

        info!(
            event = "core.source.file_loaded",
            path = %self.path.display(),
            alerts = snapshot.alerts.len(),
            logs = snapshot.logs.len()
        );

        Ok(snapshot)
    }
}

fn parse_snapshot(content: &str, origin: &str) -> Result<SiemSnapshot, SourceError> {
    serde_json::from_str(content).map_err(|e| SourceError::ParseFailed {
        origin: origin.to_string(),
        source: e,
    })
}

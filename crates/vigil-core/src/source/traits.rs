//! Data source trait definition.

use crate::siem::types::SiemSnapshot;
use crate::source::errors::SourceError;

/// Trait defining where the dashboard's data comes from.
///
/// Views never read a global dataset; they are handed a source and call
/// [`SiemSource::fetch`] on every refresh, which lets tests swap in fakes.
pub trait SiemSource: Send + Sync {
    /// Short name for logs (e.g., "fixture", "file").
    fn name(&self) -> &'static str;

    /// Fetch a complete snapshot of alerts, logs, detections and the rest.
    fn fetch(&self) -> Result<SiemSnapshot, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptySource;

    impl SiemSource for EmptySource {
        fn name(&self) -> &'static str {
            "empty"
        }

        fn fetch(&self) -> Result<SiemSnapshot, SourceError> {
            Ok(SiemSnapshot::default())
        }
    }

    #[test]
    fn test_source_is_object_safe() {
        let source: Box<dyn SiemSource> = Box::new(EmptySource);
        assert_eq!(source.name(), "empty");
        assert!(source.fetch().unwrap().alerts.is_empty());
    }
}

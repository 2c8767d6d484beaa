pub mod backends;
pub mod errors;
pub mod traits;

pub use backends::{FileSource, FixtureSource};
pub use errors::SourceError;
pub use traits::SiemSource;

use std::sync::Arc;

use crate::config::VigilConfig;

/// Pick the data source for a configuration.
///
/// A configured `[data] path` selects [`FileSource`]; otherwise the built-in
/// [`FixtureSource`] is used.
pub fn source_from_config(config: &VigilConfig) -> Arc<dyn SiemSource> {
    match &config.data.path {
        Some(path) => Arc::new(FileSource::new(path)),
        None => Arc::new(FixtureSource),
    }
}

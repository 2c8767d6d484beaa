pub mod operations;
pub mod types;

pub use operations::{count_by_source, filter_alerts, filter_logs, search, unique_services};
pub use types::{AlertFilter, LogFilter, SearchResults, SourceCounts, TimeRange};

pub mod operations;
pub mod types;

pub use operations::{DEFAULT_BUCKET_HOURS, bucket_alerts, build_dashboard, recent_alerts};
pub use types::{AlertBucket, DashboardView};

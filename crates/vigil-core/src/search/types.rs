use chrono::Duration;
use serde::Serialize;

use crate::siem::types::{Alert, LogSource, SeverityLevel, UnifiedLog};

/// Look-back window for the log viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    LastHour,
    Last24Hours,
    Last7Days,
    #[default]
    All,
}

impl TimeRange {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1h" => Some(TimeRange::LastHour),
            "24h" => Some(TimeRange::Last24Hours),
            "7d" => Some(TimeRange::Last7Days),
            "all" => Some(TimeRange::All),
            _ => None,
        }
    }

    /// Window length, `None` for unbounded.
    pub fn window(&self) -> Option<Duration> {
        match self {
            TimeRange::LastHour => Some(Duration::hours(1)),
            TimeRange::Last24Hours => Some(Duration::hours(24)),
            TimeRange::Last7Days => Some(Duration::days(7)),
            TimeRange::All => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AlertFilter {
    pub severity: Option<SeverityLevel>,
    pub query: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    pub source: Option<LogSource>,
    pub service: Option<String>,
    pub query: Option<String>,
    pub range: TimeRange,
}

/// Matches across alerts and logs for one query.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    pub alerts: Vec<Alert>,
    pub logs: Vec<UnifiedLog>,
}

impl SearchResults {
    pub fn total(&self) -> usize {
        self.alerts.len() + self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SourceCounts {
    pub syslog: usize,
    pub auth: usize,
    pub suricata: usize,
}

impl SourceCounts {
    pub fn get(&self, source: LogSource) -> usize {
        match source {
            LogSource::Syslog => self.syslog,
            LogSource::Auth => self.auth,
            LogSource::Suricata => self.suricata,
        }
    }
}
